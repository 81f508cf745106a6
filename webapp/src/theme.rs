use dioxus::prelude::*;

use portfolio_core::theme::Theme;

use crate::common::storage;

/// Theme state holder: one writer (the toggle), many readers.
#[derive(Clone, Copy)]
pub struct ThemeController {
    mode: Signal<Theme>,
}

impl ThemeController {
    pub fn mode(&self) -> Theme {
        *self.mode.read()
    }

    /// Flip the mode, then persist and restyle the document root before the
    /// signal write so the next paint is already in the new theme.
    pub fn toggle(&mut self) {
        let next = self.mode.peek().toggled();
        apply_root_class(next);
        storage::store_theme(next);
        self.mode.set(next);
    }
}

fn os_prefers_dark() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(query.matches())
}

fn apply_root_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
}

/// Resolve the initial theme (persisted, else OS preference, else dark),
/// apply it, and provide the controller to the subtree. Call once from the
/// shell.
pub fn use_theme_provider() -> ThemeController {
    let mode = use_signal(|| {
        let theme = Theme::initial(storage::load_theme(), os_prefers_dark());
        apply_root_class(theme);
        theme
    });

    use_context_provider(|| ThemeController { mode })
}

pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}
