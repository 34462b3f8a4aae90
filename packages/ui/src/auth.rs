//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use crate::session::{load_session, ConsoleSession};

/// The console session shared by every route.
///
/// Holds the persisted flag and the path an unauthenticated visitor tried to
/// open, so the login page can send them back there.
#[derive(Clone, Copy)]
pub struct AuthState {
    session: Signal<ConsoleSession>,
    redirect: Signal<Option<String>>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn login(&mut self) {
        self.session.write().login();
        tracing::info!("signed in");
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
        self.redirect.set(None);
        tracing::info!("signed out");
    }

    /// Remember where a guarded navigation was headed.
    pub fn remember(&mut self, path: String) {
        if self.redirect.peek().as_deref() != Some(path.as_str()) {
            self.redirect.set(Some(path));
        }
    }

    /// Consume the remembered path.
    pub fn take_redirect(&mut self) -> Option<String> {
        self.redirect.write().take()
    }
}

/// Get the authentication context.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Provider component that loads the session flag once and shares it.
#[component]
pub fn AuthProvider(storage_key: String, children: Element) -> Element {
    let session = use_signal(move || load_session(&storage_key));
    let redirect = use_signal(|| None);
    use_context_provider(|| AuthState { session, redirect });

    rsx! {
        {children}
    }
}

/// Button that signs out and runs `on_logout` (usually a navigation).
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                auth.logout();
                on_logout.call(());
            },
            "{label}"
        }
    }
}
