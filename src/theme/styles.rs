//! Global CSS styles for KakaoShare.
//!
//! Single page: header bar, composer card, footer.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --header-purple: #6200ea;
  --kakao-yellow: #fee500;
  --kakao-brown: #3c1e1e;

  /* SURFACES */
  --paper: #ffffff;
  --background: #f5f5f7;
  --border: #d0d0d7;

  /* TEXT */
  --text-primary: #1c1b1f;
  --text-secondary: rgba(28, 27, 31, 0.7);
  --text-muted: rgba(28, 27, 31, 0.5);

  /* SEMANTIC */
  --danger: #d32f2f;
  --danger-bg: #fdecea;

  /* Typography */
  --font-sans: 'Pretendard', 'Apple SD Gothic Neo', 'Noto Sans KR', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.app {
  padding: 16px;
  text-align: center;
}

/* === Header === */
.app-header {
  margin: 8px;
  padding: 12px 16px;
  background: var(--header-purple);
  color: #fff;
  border-radius: 4px;
  text-align: left;
}

.app-header__title {
  font-size: var(--text-xl);
  font-weight: 500;
}

/* === Composer Card === */
.composer {
  margin: 8px;
  padding: 16px;
  background: var(--paper);
  border-radius: 4px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
  text-align: left;
}

.composer__label {
  display: block;
  margin-bottom: 4px;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.composer__textarea {
  width: 100%;
  padding: 12px;
  border: 1px solid var(--border);
  border-radius: 4px;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  resize: vertical;
  transition: border-color var(--transition-fast);
}

.composer__textarea:focus {
  outline: none;
  border-color: var(--header-purple);
}

.composer__counter {
  margin: 4px 0 16px;
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-align: right;
}

.composer__counter--full {
  color: var(--danger);
}

.composer__actions {
  display: flex;
  align-items: center;
  gap: 16px;
}

/* === Buttons === */
.btn {
  min-width: 96px;
  padding: 6px 16px;
  border-radius: 4px;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-outlined {
  background: transparent;
  border: 1px solid var(--header-purple);
  color: var(--header-purple);
}

.btn-outlined:hover:not(:disabled) {
  background: rgba(98, 0, 234, 0.06);
}

.btn-send {
  background: var(--kakao-yellow);
  border: 1px solid var(--kakao-yellow);
  color: var(--kakao-brown);
  font-weight: 600;
}

.btn-send:hover:not(:disabled) {
  filter: brightness(0.95);
}

.spinner {
  display: inline-block;
  width: 14px;
  height: 14px;
  border: 2px solid var(--kakao-brown);
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Error Alert === */
.alert-error {
  margin-top: 16px;
  padding: 8px 16px;
  background: var(--danger-bg);
  border-left: 4px solid var(--danger);
  border-radius: 4px;
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Image Preview === */
.image-preview {
  position: relative;
  max-width: 345px;
  margin-top: 16px;
  border-radius: 4px;
  overflow: hidden;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);
}

.image-preview__img {
  display: block;
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.image-preview__remove {
  position: absolute;
  top: 8px;
  right: 8px;
  width: 28px;
  height: 28px;
  border: none;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.55);
  color: #fff;
  cursor: pointer;
}

.image-preview__remove:disabled {
  display: none;
}

/* === Footer === */
.app-footer {
  padding: 16px;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.app-footer a {
  color: var(--header-purple);
  text-decoration: none;
}
"#;
