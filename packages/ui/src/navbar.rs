use dioxus::prelude::*;

/// Top bar of the dashboard; `children` are the navigation entries.
#[component]
pub fn Navbar(#[props(default = "GeoAdmin".to_string())] brand: String, children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            h3 { class: "navbar-brand", "{brand}" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
