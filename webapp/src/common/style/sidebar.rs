pub const SIDEBAR_STYLES: &str = r#"
/* Shell layout */
.app-shell {
  display: flex;
  min-height: 100vh;
  background-color: var(--background);
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.content-pane {
  width: calc(100% - var(--sidebar-width));
  margin-left: var(--sidebar-width);
  overflow: hidden;
}

/* Scroll progress bar */
.scroll-progress {
  position: fixed;
  top: 0;
  left: var(--sidebar-width);
  right: 0;
  height: 4px;
  background-image: var(--gradient-progress);
  transform-origin: left;
  transform: scaleX(0);
  transition: transform 80ms linear;
  z-index: 50;
}

/* Decorative backdrop canvas */
.backdrop-canvas {
  position: fixed;
  inset: 0;
  z-index: -2;
  pointer-events: none;
}

/* Desktop sidebar */
.side-panel {
  position: fixed;
  left: 0;
  top: 0;
  height: 100vh;
  width: var(--sidebar-width);
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border-right: 1px solid var(--border);
  z-index: 40;
}

.side-panel-body {
  flex: 1;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: var(--space-12) var(--space-6);
}

.panel-footer {
  padding: var(--space-6);
  border-top: 1px solid var(--border);
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

.brand {
  margin-bottom: var(--space-12);
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.brand-name {
  background-image: var(--gradient-brand);
  background-clip: text;
  -webkit-background-clip: text;
  color: transparent;
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.brand-role {
  height: 24px;
  display: flex;
  align-items: center;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Navigation */
.side-nav {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  margin-bottom: var(--space-12);
}

.nav-entry {
  position: relative;
  width: 100%;
  text-align: left;
  padding: var(--space-3) var(--space-4);
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
  transition: color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.nav-entry:hover {
  color: var(--text-primary);
  transform: translateX(2px);
}

.nav-entry.active {
  color: var(--primary);
  transform: translateX(4px);
}

.nav-entry-label {
  position: relative;
  display: inline-block;
}

.nav-entry-underline {
  position: absolute;
  left: 0;
  right: 0;
  bottom: -4px;
  height: 2px;
  background-image: var(--gradient-brand);
}

/* Social links */
.social-links {
  display: flex;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.social-link {
  display: inline-flex;
  padding: var(--space-2);
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.social-link:hover {
  color: var(--primary);
}

.theme-toggle {
  width: fit-content;
}

/* Mobile header */
.mobile-header {
  display: none;
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--mobile-header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
  background-color: var(--surface);
  border-bottom: 1px solid var(--border);
  z-index: 60;
}

.mobile-header-actions {
  display: flex;
  gap: var(--space-2);
}

/* Mobile slide-in menu */
.mobile-menu-backdrop {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.5);
  z-index: 70;
  animation: menu-fade var(--transition-fast) var(--easing-standard);
}

.mobile-menu {
  position: fixed;
  left: 0;
  top: 0;
  height: 100vh;
  width: 320px;
  max-width: 85vw;
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border-right: 1px solid var(--border);
  z-index: 80;
  animation: menu-slide var(--transition-normal) var(--easing-standard);
}

.mobile-menu-body {
  flex: 1;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: var(--space-12) var(--space-8);
}

.mobile-menu .nav-entry.active::before {
  content: "";
  position: absolute;
  left: 0;
  top: 0;
  bottom: 0;
  width: 3px;
  background-image: var(--gradient-rail);
}

@keyframes menu-fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes menu-slide {
  from { transform: translateX(-100%); }
  to { transform: translateX(0); }
}

@media (max-width: 1023px) {
  .side-panel {
    display: none;
  }

  .content-pane {
    width: 100%;
    margin-left: 0;
    padding-top: var(--mobile-header-height);
  }

  .scroll-progress {
    left: 0;
  }

  .mobile-header {
    display: flex;
  }
}
"#;
