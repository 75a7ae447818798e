//! Global CSS styles for the intake desktop app.
//!
//! Light clinical palette: neutral background, blue accent for actions,
//! red/green for the status banner.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #ffffff;
  --surface-muted: #f3f4f6;
  --border: #d1d5db;

  /* ACCENT (actions, focus) */
  --accent: #3b82f6;
  --accent-hover: #2563eb;
  --accent-disabled: #9ca3af;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;

  /* SEMANTIC */
  --danger-bg: #fee2e2;
  --danger-text: #b91c1c;
  --ok-bg: #bbf7d0;
  --ok-text: #16a34a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 1.5rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Page === */
.intake-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 100%;
  max-width: 36rem;
  margin: 0 auto;
  padding: 1rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.page-subtitle {
  margin-bottom: 1rem;
  color: var(--text-secondary);
}

/* === Form Layout === */
.intake-form {
  width: 100%;
}

.intake-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem;
  width: 100%;
  margin-bottom: 1rem;
}

.span-full {
  grid-column: 1 / -1;
  margin-top: 0.5rem;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.input-label {
  display: block;
  margin-bottom: 0.25rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.input-field {
  width: 100%;
  padding: 0.25rem 0.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
}

.input-field--tall {
  height: 8rem;
}

/* === Radio Group === */
.radio-group {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem;
}

.radio-option {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

/* === Notice === */
.privacy-notice {
  margin-bottom: 1rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn-primary {
  width: 100%;
  padding: 0.5rem 1rem;
  background: var(--accent);
  border: none;
  border-radius: 4px;
  color: #ffffff;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary:hover {
  background: var(--accent-hover);
}

.btn-primary:disabled {
  background: var(--accent-disabled);
  cursor: not-allowed;
}

/* === Status Banner === */
.status-banner {
  margin-top: 1rem;
  padding: 0.5rem;
  border-radius: 4px;
}

.status-banner--error {
  background: var(--danger-bg);
  color: var(--danger-text);
}

.status-banner--ok {
  background: var(--ok-bg);
  color: var(--ok-text);
}
"#;
