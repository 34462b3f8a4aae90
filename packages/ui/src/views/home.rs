use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        section {
            class: "page",
            h2 { "Dashboard" }
            p { "Manage the countries, states and cities used as reference data, and the user accounts allowed to sign in." }
            ul {
                class: "page-list",
                li { "Countries: codes, names, sort order and status." }
                li { "States: grouped under a country code." }
                li { "Cities: optionally linked to a state and a country." }
                li { "User Profiles: review, edit and remove accounts." }
            }
        }
    }
}
