//! Country, state and city list screens.
//!
//! Each screen composes one form and one [`DataTable`] over a [`ListState`]
//! snapshot. Creating, updating and deleting all end with a full refetch.

use std::str::FromStr;

use api::{City, Country, Entity, State};
use dioxus::prelude::*;

use crate::columns::{rows, TableRecord};
use crate::context::{use_api, Api};
use crate::data_table::DataTable;
use crate::forms::{CityForm, CountryForm, StateForm};
use crate::list::{delete_then_refresh, parse_id, refresh, ListState};
use crate::toast::{notify, use_toasts, ToastKind, Toasts};

/// Signals and actions of one list screen.
pub struct ListScreen<E: 'static> {
    pub state: Signal<ListState<E>>,
    toasts: Signal<Toasts>,
}

impl<E: 'static> Clone for ListScreen<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for ListScreen<E> {}

/// Create the screen state and fetch the collection once on mount.
pub fn use_list_screen<E>(api: Api) -> ListScreen<E>
where
    E: TableRecord,
    E::Id: FromStr,
{
    let state = use_signal(ListState::<E>::default);
    let toasts = use_toasts();
    let screen = ListScreen { state, toasts };
    use_hook(move || screen.refresh(api));
    screen
}

impl<E> ListScreen<E>
where
    E: TableRecord,
    E::Id: FromStr,
{
    pub fn refresh(self, api: Api) {
        let mut state = self.state;
        let mut toasts = self.toasts;
        spawn(async move {
            state.write().loading = true;
            let result = refresh(&api.resource::<E>()).await;
            let failed = result.is_err();
            state.write().apply(result);
            if failed {
                let message = state.peek().error.clone().unwrap_or_default();
                notify(&mut toasts, ToastKind::Error, &message);
            }
        });
    }

    /// Called by the form once a save went through.
    pub fn saved(self, api: Api) {
        let mut state = self.state;
        state.write().clear_selection();
        self.refresh(api);
    }

    pub fn edit(self, key: String) {
        let mut state = self.state;
        state.write().select(&key);
    }

    pub fn cancel(self) {
        let mut state = self.state;
        state.write().clear_selection();
    }

    pub fn delete(self, api: Api, key: String) {
        let mut state = self.state;
        let mut toasts = self.toasts;
        let Some(id) = parse_id::<E>(&key) else {
            tracing::warn!("row key {key} is not a {} id", E::LABEL);
            return;
        };
        spawn(async move {
            match delete_then_refresh(&api.resource::<E>(), &id).await {
                Ok(records) => {
                    let mut list = state.write();
                    if list.selected.as_ref().is_some_and(|s| s.id().to_string() == key) {
                        list.clear_selection();
                    }
                    list.apply(Ok(records));
                    drop(list);
                    notify(&mut toasts, ToastKind::Success, &format!("{} deleted", E::LABEL));
                }
                Err(e) => {
                    let message = format!("Failed to delete {}: {e}", E::LABEL.to_lowercase());
                    notify(&mut toasts, ToastKind::Error, &message);
                }
            }
        });
    }
}

#[component]
pub fn CountryList() -> Element {
    let api = use_api();
    let screen = use_list_screen::<Country>(api.clone());
    let list = screen.state.read();
    let selected = list.selected.clone();
    let table_rows = rows(&list.records);
    let loading = list.loading;
    drop(list);
    let (save_api, delete_api) = (api.clone(), api);

    rsx! {
        section {
            class: "list-screen",
            h2 { "Countries" }
            CountryForm {
                current: selected,
                on_save: move |_| screen.saved(save_api.clone()),
                on_cancel: move |_| screen.cancel(),
            }
            DataTable {
                noun: "country",
                columns: Country::columns(),
                rows: table_rows,
                loading,
                on_edit: move |key: String| screen.edit(key),
                on_delete: move |key: String| screen.delete(delete_api.clone(), key),
            }
        }
    }
}

#[component]
pub fn StateList() -> Element {
    let api = use_api();
    let screen = use_list_screen::<State>(api.clone());
    let list = screen.state.read();
    let selected = list.selected.clone();
    let table_rows = rows(&list.records);
    let loading = list.loading;
    drop(list);
    let (save_api, delete_api) = (api.clone(), api);

    rsx! {
        section {
            class: "list-screen",
            h2 { "States" }
            StateForm {
                current: selected,
                on_save: move |_| screen.saved(save_api.clone()),
                on_cancel: move |_| screen.cancel(),
            }
            DataTable {
                noun: "state",
                columns: State::columns(),
                rows: table_rows,
                loading,
                on_edit: move |key: String| screen.edit(key),
                on_delete: move |key: String| screen.delete(delete_api.clone(), key),
            }
        }
    }
}

#[component]
pub fn CityList() -> Element {
    let api = use_api();
    let screen = use_list_screen::<City>(api.clone());
    let list = screen.state.read();
    let selected = list.selected.clone();
    let table_rows = rows(&list.records);
    let loading = list.loading;
    drop(list);
    let (save_api, delete_api) = (api.clone(), api);

    rsx! {
        section {
            class: "list-screen",
            h2 { "Cities" }
            CityForm {
                current: selected,
                on_save: move |_| screen.saved(save_api.clone()),
                on_cancel: move |_| screen.cancel(),
            }
            DataTable {
                noun: "city",
                columns: City::columns(),
                rows: table_rows,
                loading,
                on_edit: move |key: String| screen.edit(key),
                on_delete: move |key: String| screen.delete(delete_api.clone(), key),
            }
        }
    }
}
