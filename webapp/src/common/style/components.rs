pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
  text-decoration: none;
}

.btn:hover {
  transform: translateY(-2px) scale(1.02);
  text-decoration: none;
}

.btn:active {
  transform: translateY(0) scale(0.97);
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
}

.btn-primary {
  background-image: var(--gradient-brand);
  color: var(--text-inverse);
}

.btn-primary:hover {
  box-shadow: var(--shadow-glow);
}

.btn-outline {
  background-color: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-outline:hover {
  border-color: var(--primary);
  color: var(--primary);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

/* Badges */
.badge {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  border: 1px solid var(--border);
  color: var(--text-secondary);
  font-size: 0.75rem;
}

.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Form Elements */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  margin-bottom: var(--space-5);
}

.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-5);
}

.form-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  outline: none;
  border-color: var(--border-focus);
}

.form-textarea {
  resize: none;
}

/* Icons */
.icon {
  width: 1.25em;
  height: 1.25em;
  flex-shrink: 0;
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: none;
  border-radius: var(--radius-md);
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.icon-button:hover {
  color: var(--text-primary);
  background-color: var(--surface-raised);
}

/* Toast */
.toast-region {
  position: fixed;
  bottom: var(--space-6);
  right: var(--space-6);
  z-index: 100;
}

.toast {
  padding: var(--space-3) var(--space-5);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  border: 1px solid var(--border);
  color: var(--text-primary);
  box-shadow: var(--shadow-lg);
  animation: toast-in var(--transition-normal) var(--easing-standard);
}

@keyframes toast-in {
  from {
    opacity: 0;
    transform: translateY(16px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* Scroll-triggered reveal: elements start hidden and slide up once their
   section crosses the reveal threshold. */
.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
}

/* Typing caret */
.typing-caret {
  display: inline-block;
  width: 2px;
  height: 1em;
  margin-left: 4px;
  vertical-align: text-bottom;
  background-image: linear-gradient(180deg, var(--primary), var(--accent));
  animation: caret-blink 0.8s infinite;
}

@keyframes caret-blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}
"#;
