use constcat::concat;

mod components;
mod sections;
mod sidebar;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::SECTION_STYLES;
pub use sidebar::SIDEBAR_STYLES;
pub use variables::CSS_VARIABLES;

// Single stylesheet served from the shell's style element.
pub const GLOBAL_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

a.btn:hover,
a.social-link:hover {
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SIDEBAR_STYLES,
    SECTION_STYLES,
);
