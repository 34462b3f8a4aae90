//! This crate contains all shared UI for the console.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod columns;
pub mod form;
pub mod list;
pub mod table;
pub mod validation;

mod session;
pub use session::{load_session, make_session_store, ConsoleSession};

mod context;
pub use context::{use_api, use_config, Api, ConsoleProvider};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod toast;
pub use toast::{notify, use_toasts, ToastHost, ToastKind, Toasts};

mod theme;
pub use theme::ConsoleStyles;

mod navbar;
pub use navbar::Navbar;

mod confirm_dialog;
pub use confirm_dialog::{ConfirmDialog, ModalOverlay};

mod fields;
pub use fields::{CheckboxField, NumberField, PasswordField, SelectField, TextField};

mod data_table;
pub use data_table::DataTable;

mod forms;
pub use forms::{use_entity_form, CityForm, CountryForm, EntityForm, StateForm};

mod list_screen;
pub use list_screen::{use_list_screen, CityList, CountryList, ListScreen, StateList};

mod user_profiles;
pub use user_profiles::{UserEditDialog, UserProfiles};

pub mod views;
