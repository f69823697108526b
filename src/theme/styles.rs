//! Global CSS for the desktop showcase.
//!
//! Class names match the variant tables in `designkit-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #ffffff;
  --surface-muted: #f4f5f7;
  --border: #dde1e6;
  --text-primary: #16181d;
  --text-muted: #5f6670;
  --accent: #3557d4;
  --accent-hover: #2944b0;
  --danger: #c8324b;
  --warning: #b86e00;
  --success: #237a47;
  --info: #2f6fbd;
  --radius: 6px;
  --font-sans: 'Inter', system-ui, sans-serif;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--surface-muted);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.45rem 0.9rem;
  border: 1px solid transparent;
  border-radius: var(--radius);
  font: inherit;
  cursor: pointer;
  background: none;
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover:not(:disabled) { background: var(--accent-hover); }
.btn-secondary { border-color: var(--border); background: var(--surface); }
.btn-ghost { color: var(--text-muted); }
.btn-ghost:hover:not(:disabled) { background: var(--surface-muted); }
.btn-danger { background: var(--danger); color: #fff; }
.btn-link { color: var(--accent); text-decoration: underline; }

/* === Badges === */
.badge {
  display: inline-block;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  font-size: 0.75rem;
  text-transform: lowercase;
}
.badge-neutral { background: var(--surface-muted); color: var(--text-muted); }
.badge-info { background: #e4edf9; color: var(--info); }
.badge-success { background: #e1f3e8; color: var(--success); }
.badge-warning { background: #fbf0de; color: var(--warning); }
.badge-danger { background: #f9e2e6; color: var(--danger); }

/* === Inputs === */
.form-field { display: flex; flex-direction: column; gap: 0.3rem; margin-bottom: 0.9rem; }
.input-label { font-size: 0.85rem; color: var(--text-muted); }
.input-field {
  padding: 0.5rem 0.7rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font: inherit;
}
.input-field:focus { outline: 2px solid var(--accent); outline-offset: -1px; }
.input-filled { background: var(--surface-muted); }
.input-invalid { border-color: var(--danger); }
.input-error { margin: 0; font-size: 0.8rem; color: var(--danger); }

/* === Loading overlay === */
.loading-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  background: rgba(255, 255, 255, 0.7);
  z-index: 100;
}
.loading-spinner {
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
.loading-message { color: var(--text-muted); }
@keyframes spin { to { transform: rotate(360deg); } }

/* === Layout === */
.nav-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1.5rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}
.nav-title { font-weight: 600; }
.nav-user { display: flex; align-items: center; gap: 0.5rem; }

.login-page { display: flex; gap: 2rem; justify-content: center; padding: 4rem 1rem; }
.login-card, .demo-accounts {
  width: 22rem;
  padding: 1.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}
.demo-accounts ul { list-style: none; padding: 0; margin: 0; }
.demo-account {
  display: flex;
  flex-direction: column;
  width: 100%;
  padding: 0.5rem;
  border: none;
  background: none;
  text-align: left;
  cursor: pointer;
}
.demo-account:hover { background: var(--surface-muted); }
.demo-role { font-size: 0.8rem; color: var(--text-muted); }

.dashboard { display: grid; gap: 1rem; padding: 1.5rem; }
.panel {
  padding: 1rem 1.25rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}
.panel-header { display: flex; justify-content: space-between; align-items: center; }
.panel-title { margin: 0 0 0.75rem; font-size: 1.1rem; }
.panel-muted, .panel-footnote { color: var(--text-muted); }
.panel-admin { border-color: var(--accent); }

.project-list, .favorite-content, .permission-list { list-style: none; padding: 0; }
.project-row { display: flex; align-items: center; gap: 0.75rem; padding: 0.3rem 0; }
.project-name { flex: 1; }
.permission-list { display: flex; flex-wrap: wrap; gap: 0.4rem; }

.content-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 0.75rem; }
.content-card { padding: 0.75rem; border: 1px solid var(--border); border-radius: var(--radius); }
.content-card-header { display: flex; justify-content: space-between; align-items: baseline; }
.content-card-title { margin: 0; font-size: 1rem; }
.content-card-description { color: var(--text-muted); font-size: 0.9rem; }
.content-card-actions { display: flex; justify-content: space-between; }
.content-preview { margin-top: 1rem; padding: 0.75rem; background: var(--surface-muted); border-radius: var(--radius); }

.recent-list li { display: flex; justify-content: space-between; padding: 0.2rem 0; }
.recent-time { color: var(--text-muted); font-variant-numeric: tabular-nums; }
"#;
