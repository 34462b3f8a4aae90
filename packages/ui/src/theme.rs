use dioxus::prelude::*;

const CONSOLE_CSS: &str = r#"
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    color: #37352f;
    background: #f7f7f5;
}

.navbar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1.5rem;
    background: #ffffff;
    border-bottom: 1px solid #e9e9e7;
}

.navbar-brand { margin: 0; font-weight: 700; }
.navbar-links { display: flex; gap: 1rem; align-items: center; }
.navbar-links a { color: #37352f; text-decoration: none; font-size: 0.9375rem; }
.navbar-links a.active { font-weight: 600; border-bottom: 2px solid #2383e2; }

.page, .list-screen { max-width: 1100px; margin: 1.5rem auto; padding: 0 1.5rem; }

.auth-container {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    padding: 2rem;
    background: #ffffff;
}

.auth-card { width: 100%; max-width: 360px; display: flex; flex-direction: column; gap: 0.75rem; }
.auth-card h1 { margin: 0 0 0.5rem; font-size: 1.75rem; }
.auth-footer { color: #787774; font-size: 0.875rem; }

.entity-form {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 0.75rem;
    padding: 1rem;
    margin-bottom: 1rem;
    background: #ffffff;
    border: 1px solid #e9e9e7;
    border-radius: 6px;
}

.entity-form h3, .form-error, .form-actions { grid-column: 1 / -1; margin: 0; }

.field { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.875rem; }
.field-checkbox { flex-direction: row; align-items: center; gap: 0.5rem; }
.field-required { color: #e03e3e; }
.field-input { padding: 0.5rem; border: 1px solid #d3d3d0; border-radius: 4px; font-size: 0.9375rem; }
.field-input.invalid { border-color: #e03e3e; }
.field-error, .form-error { color: #e03e3e; font-size: 0.8125rem; }
.field-with-button { display: flex; gap: 0.25rem; }
.field-with-button .field-input { flex: 1; }

.btn {
    padding: 0.5rem 1rem;
    border: 1px solid transparent;
    border-radius: 4px;
    font-size: 0.875rem;
    cursor: pointer;
    background: #efefed;
}

.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-small { padding: 0.25rem 0.5rem; font-size: 0.8125rem; }
.btn-primary { background: #2383e2; color: #ffffff; }
.btn-secondary { background: #ffffff; border-color: #d3d3d0; }
.btn-danger { background: #e03e3e; color: #ffffff; }
.icon-button { background: none; border: none; cursor: pointer; padding: 0.25rem; }

.form-actions, .modal-actions { display: flex; gap: 0.5rem; justify-content: flex-end; }

.table-card { background: #ffffff; border: 1px solid #e9e9e7; border-radius: 6px; padding: 1rem; }
.table-toolbar { margin-bottom: 0.75rem; }
.table-search { display: inline-flex; align-items: center; gap: 0.5rem; }
.table-search input { padding: 0.375rem 0.5rem; border: 1px solid #d3d3d0; border-radius: 4px; }
.data-table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.data-table th, .data-table td { padding: 0.5rem; border-bottom: 1px solid #e9e9e7; text-align: left; }
.data-table th.sortable { cursor: pointer; user-select: none; }
.sort-indicator { margin-left: 0.25rem; color: #9b9a97; }
.table-empty { text-align: center; color: #787774; }
.row-actions { display: flex; gap: 0.5rem; }
.table-pagination { display: flex; gap: 0.5rem; align-items: center; margin-top: 0.75rem; }
.page-label { margin: 0 0.5rem; }
.missing { color: #9b9a97; }
.badge { padding: 0.125rem 0.5rem; border-radius: 999px; font-size: 0.75rem; }
.badge-yes { background: #dbeddb; }
.badge-no { background: #ffe2dd; }

.modal-backdrop {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.3);
    z-index: 2000;
}

.modal-card { background: #ffffff; border-radius: 8px; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15); max-width: 28rem; width: 100%; margin: 0 1rem; }
.modal-body { padding: 1.25rem; display: flex; flex-direction: column; gap: 0.75rem; }
.modal-title { margin: 0; }

.toast-stack { position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 3000; }
.toast { min-width: 240px; padding: 0.75rem 1rem; border-radius: 6px; color: #ffffff; cursor: pointer; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); }
.toast-success { background: #0f7b6c; }
.toast-error { background: #e03e3e; }
.toast-info { background: #2383e2; }

.error-panel { max-width: 600px; margin: 2rem auto; padding: 1rem; border: 1px solid #e03e3e; border-radius: 6px; background: #ffffff; }
"#;

/// Global styles of the console.
#[component]
pub fn ConsoleStyles() -> Element {
    rsx! {
        style { {CONSOLE_CSS} }
    }
}
