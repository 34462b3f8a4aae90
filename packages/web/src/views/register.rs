//! Registration page: full email, phone and password rules before `POST /user`.

use api::{ApiError, UserDraft};
use dioxus::prelude::*;
use ui::validation::{validate_email, validate_password, validate_phone};
use ui::{notify, use_api, use_toasts, PasswordField, TextField, ToastKind};

use crate::Route;

fn failure_message(err: &ApiError) -> &'static str {
    match err.status() {
        Some(status) if (400..500).contains(&status) => "Invalid email, phone number, or password.",
        _ => "An error occurred. Please try again later.",
    }
}

/// Per-field errors of a registration draft, in form order.
fn check(draft: &UserDraft) -> [Option<String>; 3] {
    [
        validate_email(&draft.email).map(String::from),
        validate_phone(&draft.phone).map(String::from),
        validate_password(&draft.password).map(String::from),
    ]
}

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut draft = use_signal(UserDraft::default);
    let mut email_error = use_signal(|| None::<String>);
    let mut phone_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = draft.peek().clone();
        let [email, phone, password] = check(&body);
        let invalid = email.is_some() || phone.is_some() || password.is_some();
        email_error.set(email);
        phone_error.set(phone);
        password_error.set(password);
        if invalid {
            return;
        }

        let api = api.clone();
        spawn(async move {
            loading.set(true);
            let result = api.auth().register(&body).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    draft.set(UserDraft::default());
                    notify(&mut toasts, ToastKind::Success, "Registration successful!");
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("registration failed: {e}");
                    notify(&mut toasts, ToastKind::Error, failure_message(&e));
                }
            }
        });
    };

    let current = draft();

    rsx! {
        div {
            class: "auth-container",
            form {
                class: "auth-card",
                onsubmit,
                h1 { "Create Account" }

                TextField {
                    label: "Email",
                    value: current.email,
                    input_type: "email",
                    required: true,
                    error: email_error(),
                    oninput: move |v: String| {
                        email_error.set(validate_email(&v).map(String::from));
                        draft.write().email = v;
                    },
                }

                PasswordField {
                    label: "Password",
                    value: current.password,
                    error: password_error(),
                    oninput: move |v: String| {
                        password_error.set(validate_password(&v).map(String::from));
                        draft.write().password = v;
                    },
                }

                TextField {
                    label: "Phone No",
                    value: current.phone,
                    input_type: "tel",
                    required: true,
                    error: phone_error(),
                    oninput: move |v: String| {
                        phone_error.set(validate_phone(&v).map(String::from));
                        draft.write().phone = v;
                    },
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign Up" }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
