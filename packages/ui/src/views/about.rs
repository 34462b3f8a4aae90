use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        section {
            class: "page",
            h2 { "About" }
            p { "GeoAdmin is an administrative console for the geographic reference service." }
            p {
                "Tables are filtered, sorted and paginated in the browser over the full collection. "
                "Every change is sent to the service and followed by a fresh copy of the list."
            }
        }
    }
}
