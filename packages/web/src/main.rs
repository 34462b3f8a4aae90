use dioxus::prelude::*;

use store::ConsoleConfig;
use ui::{AuthProvider, ConsoleProvider, ConsoleStyles, ToastHost};
use views::{About, Cities, Countries, DashboardLayout, Home, Login, NotFound, Register, States, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/")]
            Home {},
            #[route("/user-profiles")]
            Users {},
            #[route("/about")]
            About {},
            #[route("/countries")]
            Countries {},
            #[route("/states")]
            States {},
            #[route("/cities")]
            Cities {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const CONFIG_TOML: &str = include_str!("../geoadmin.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ConsoleConfig {
    match ConsoleConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid {}: {e}", ConsoleConfig::filename());
            ConsoleConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let storage_key = config.session.storage_key.clone();
    let auto_close_ms = config.toast.auto_close_ms;

    rsx! {
        ConsoleStyles {}

        ConsoleProvider {
            config,
            AuthProvider {
                storage_key,
                ToastHost {
                    auto_close_ms,
                    Router::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ConsoleConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login {}.to_string(), "/");
        assert_eq!(Route::Countries {}.to_string(), "/dashboard/countries");
        assert_eq!(Route::Users {}.to_string(), "/dashboard/user-profiles");
        assert_eq!(
            "/dashboard/cities".parse::<Route>().ok(),
            Some(Route::Cities {})
        );
    }

    #[test]
    fn test_unknown_path_is_caught() {
        let route = "/no/such/page".parse::<Route>().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
