//! Login page: email and password checked against `/user/login`.

use api::ApiError;
use dioxus::prelude::*;
use ui::validation::{validate_login_email, validate_login_password};
use ui::{notify, use_api, use_auth, use_toasts, PasswordField, TextField, ToastKind};

use super::after_login;
use crate::Route;

const REJECTED: &str = "Invalid email or password.";
const UNAVAILABLE: &str = "An error occurred. Please try again later.";

/// Toast text for a login attempt that did not sign the user in.
fn failure_message(outcome: &Result<bool, ApiError>) -> &'static str {
    match outcome {
        Ok(_) => REJECTED,
        Err(e) if matches!(e.status(), Some(401 | 403 | 404)) => REJECTED,
        Err(_) => UNAVAILABLE,
    }
}

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let (e, p) = (email(), password());
        email_error.set(validate_login_email(&e).map(String::from));
        password_error.set(validate_login_password(&p).map(String::from));
        if email_error.peek().is_some() || password_error.peek().is_some() {
            return;
        }

        let api = api.clone();
        spawn(async move {
            loading.set(true);
            let outcome = api.auth().login(&e, &p).await;
            loading.set(false);
            if let Ok(true) = outcome {
                auth.login();
                notify(&mut toasts, ToastKind::Success, "Login successful!");
                nav.replace(after_login(auth.take_redirect()));
                return;
            }
            if let Err(err) = &outcome {
                tracing::warn!("login failed: {err}");
            }
            notify(&mut toasts, ToastKind::Error, failure_message(&outcome));
        });
    };

    rsx! {
        div {
            class: "auth-container",
            form {
                class: "auth-card",
                onsubmit,
                h1 { "Sign In" }

                TextField {
                    label: "Email",
                    value: email(),
                    input_type: "email",
                    required: true,
                    error: email_error(),
                    oninput: move |v: String| {
                        email_error.set(validate_login_email(&v).map(String::from));
                        email.set(v);
                    },
                }

                PasswordField {
                    label: "Password",
                    value: password(),
                    error: password_error(),
                    oninput: move |v: String| {
                        password_error.set(validate_login_password(&v).map(String::from));
                        password.set(v);
                    },
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
