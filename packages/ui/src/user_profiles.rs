//! User accounts table and the edit dialog.

use api::{Entity, User, UserDraft};
use dioxus::prelude::*;

use crate::columns::{rows, TableRecord};
use crate::confirm_dialog::ModalOverlay;
use crate::context::use_api;
use crate::data_table::DataTable;
use crate::fields::{PasswordField, TextField};
use crate::form::check_required;
use crate::list::parse_id;
use crate::list_screen::use_list_screen;
use crate::toast::{notify, use_toasts, ToastKind};

#[component]
pub fn UserProfiles() -> Element {
    let api = use_api();
    let screen = use_list_screen::<User>(api.clone());
    let mut editing = use_signal(|| None::<i64>);

    let list = screen.state.read();
    let table_rows = rows(&list.records);
    let loading = list.loading;
    drop(list);
    let (save_api, delete_api) = (api.clone(), api);

    rsx! {
        section {
            class: "list-screen",
            h2 { "User Profiles" }
            DataTable {
                noun: "user",
                columns: User::columns(),
                rows: table_rows,
                loading,
                on_edit: move |key: String| editing.set(parse_id::<User>(&key)),
                on_delete: move |key: String| screen.delete(delete_api.clone(), key),
            }
        }
        if let Some(id) = editing() {
            UserEditDialog {
                key: "{id}",
                id,
                on_close: move |_| editing.set(None),
                on_save: move |_| {
                    editing.set(None);
                    screen.refresh(save_api.clone());
                },
            }
        }
    }
}

/// Edits the server copy of one user: fetched by id when opened, sent back
/// as a partial update.
#[component]
pub fn UserEditDialog(id: i64, on_close: EventHandler<()>, on_save: EventHandler<()>) -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let mut draft = use_signal(|| None::<UserDraft>);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let fetch_api = api.clone();
    use_hook(move || {
        spawn(async move {
            match fetch_api.users().get(&id).await {
                Ok(user) => draft.set(Some(user.to_draft())),
                Err(e) => {
                    let message = format!("Error fetching data for edit: {e}");
                    notify(&mut toasts, ToastKind::Error, &message);
                    error.set(Some(message));
                }
            }
        })
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(body) = draft.peek().clone() else {
            return;
        };
        if let Some(message) = check_required::<User>(&body) {
            notify(&mut toasts, ToastKind::Error, "Required fields are missing");
            error.set(Some(message));
            return;
        }
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            let result = api.users().update(&id, &body).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    notify(&mut toasts, ToastKind::Success, "User updated");
                    on_save.call(());
                }
                Err(e) => {
                    let message = format!("Error updating data: {e}");
                    notify(&mut toasts, ToastKind::Error, &message);
                    error.set(Some(message));
                }
            }
        });
    };

    let current = draft();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "modal-body entity-form",
                onsubmit,
                h3 { class: "modal-title", "Edit User #{id}" }
                {match current {
                    None => rsx! { p { class: "modal-message", "Loading..." } },
                    Some(d) => rsx! {
                        TextField {
                            label: "Email",
                            value: d.email,
                            input_type: "email",
                            required: true,
                            oninput: move |v: String| {
                                if let Some(user) = draft.write().as_mut() {
                                    user.email = v;
                                }
                            },
                        }
                        TextField {
                            label: "Phone",
                            value: d.phone,
                            required: true,
                            oninput: move |v: String| {
                                if let Some(user) = draft.write().as_mut() {
                                    user.phone = v;
                                }
                            },
                        }
                        PasswordField {
                            label: "Password",
                            value: d.password,
                            oninput: move |v: String| {
                                if let Some(user) = draft.write().as_mut() {
                                    user.password = v;
                                }
                            },
                        }
                    },
                }}
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving() || draft.read().is_none(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
