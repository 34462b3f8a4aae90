//! Dashboard shell: the route guard, navigation bar and the pages it hosts.

use dioxus::prelude::*;
use ui::views::{AboutView, HomeView};
use ui::{use_auth, CityList, CountryList, LogoutButton, Navbar, StateList, UserProfiles};

use crate::Route;

/// Routes that need a signed-in session.
fn is_guarded(route: &Route) -> bool {
    matches!(
        route,
        Route::Home {}
            | Route::Users {}
            | Route::About {}
            | Route::Countries {}
            | Route::States {}
            | Route::Cities {}
    )
}

/// Where a visit to `route` must go instead, if anywhere.
pub(crate) fn guard(authenticated: bool, route: &Route) -> Option<Route> {
    (!authenticated && is_guarded(route)).then_some(Route::Login {})
}

/// Destination after a successful login: the remembered dashboard route, or
/// the dashboard home.
pub(crate) fn after_login(remembered: Option<String>) -> Route {
    remembered
        .and_then(|path| path.parse::<Route>().ok())
        .filter(is_guarded)
        .unwrap_or(Route::Home {})
}

/// Layout of every `/dashboard` route.
///
/// Unauthenticated visitors are sent to the login page; the path they asked
/// for is remembered so the login page can return them to it.
#[component]
pub fn DashboardLayout() -> Element {
    let mut auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    if let Some(target) = guard(auth.is_authenticated(), &route) {
        tracing::debug!("guarded route {route} requires sign-in");
        auth.remember(route.to_string());
        nav.replace(target);
        return rsx! {};
    }

    rsx! {
        Navbar {
            Link { to: Route::Home {}, active_class: "active", "Home" }
            Link { to: Route::Users {}, active_class: "active", "User Profiles" }
            Link { to: Route::Countries {}, active_class: "active", "Countries" }
            Link { to: Route::States {}, active_class: "active", "States" }
            Link { to: Route::Cities {}, active_class: "active", "Cities" }
            Link { to: Route::About {}, active_class: "active", "About" }
            LogoutButton {
                class: "btn btn-secondary btn-small",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }

        main {
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let message = errors
                        .errors()
                        .first()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "Unknown error".to_string());
                    tracing::error!("dashboard page failed: {message}");
                    rsx! {
                        div {
                            class: "error-panel",
                            h3 { "Something went wrong" }
                            pre { "{message}" }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| errors.clear_errors(),
                                "Retry"
                            }
                        }
                    }
                },
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn Users() -> Element {
    rsx! { UserProfiles {} }
}

#[component]
pub fn About() -> Element {
    rsx! { AboutView {} }
}

#[component]
pub fn Countries() -> Element {
    rsx! { CountryList {} }
}

#[component]
pub fn States() -> Element {
    rsx! { StateList {} }
}

#[component]
pub fn Cities() -> Element {
    rsx! { CityList {} }
}

/// Unknown paths go back to the login page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}
