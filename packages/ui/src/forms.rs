//! Country, state and city forms.
//!
//! Each form edits a local draft. Selecting a row (or clearing the selection)
//! rebuilds the draft; a successful save resets it, shows a toast and calls
//! `on_save` so the list screen can clear its selection and refetch.

use api::{ApiError, City, Country, Entity, State};
use dioxus::prelude::*;

use crate::context::{use_api, Api};
use crate::fields::{CheckboxField, NumberField, SelectField, TextField};
use crate::form::{draft_for, parse_sort_seq, submit, FormEntity, Options, SaveError};
use crate::toast::{notify, use_toasts, ToastKind, Toasts};

/// Signals backing one entity form.
pub struct EntityForm<E: FormEntity> {
    pub draft: Signal<E::Draft>,
    pub error: Signal<Option<String>>,
    pub saving: Signal<bool>,
    current: ReadOnlySignal<Option<E>>,
    toasts: Signal<Toasts>,
}

impl<E: FormEntity> Clone for EntityForm<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: FormEntity> Copy for EntityForm<E> {}

pub fn use_entity_form<E>(current: ReadOnlySignal<Option<E>>) -> EntityForm<E>
where
    E: FormEntity,
    E::Draft: Default,
{
    let mut draft = use_signal(|| draft_for(current.peek().as_ref()));
    let mut error = use_signal(|| None);
    let saving = use_signal(|| false);
    let toasts = use_toasts();

    use_effect(move || {
        let record = current.read();
        draft.set(draft_for(record.as_ref()));
        error.set(None);
    });

    EntityForm {
        draft,
        error,
        saving,
        current,
        toasts,
    }
}

impl<E> EntityForm<E>
where
    E: FormEntity,
    E::Draft: Default,
{
    pub fn is_editing(&self) -> bool {
        self.current.read().is_some()
    }

    /// Create or update, then hand control back to the list screen.
    pub fn submit(self, api: Api, on_save: EventHandler<()>) {
        let Self {
            mut draft,
            mut error,
            mut saving,
            current,
            mut toasts,
        } = self;
        if *saving.peek() {
            return;
        }
        let id = current.peek().as_ref().map(|record| record.id().clone());
        let body = draft.peek().clone();

        spawn(async move {
            saving.set(true);
            let result = submit(&api.resource::<E>(), id.as_ref(), &body).await;
            saving.set(false);

            match result {
                Ok(_) => {
                    let verb = if id.is_some() { "updated" } else { "created" };
                    notify(&mut toasts, ToastKind::Success, &format!("{} {verb}", E::LABEL));
                    error.set(None);
                    draft.set(E::Draft::default());
                    on_save.call(());
                }
                Err(SaveError::Invalid(message)) => error.set(Some(message)),
                Err(SaveError::Api(e)) => {
                    let message = format!("Failed to save {}: {e}", E::LABEL.to_lowercase());
                    notify(&mut toasts, ToastKind::Error, &message);
                    error.set(Some(message));
                }
            }
        });
    }
}

#[component]
fn FormActions(editing: bool, saving: bool, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "form-actions",
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: saving,
                if saving { "Saving..." } else if editing { "Update" } else { "Create" }
            }
            if editing {
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
pub fn CountryForm(
    current: ReadOnlySignal<Option<Country>>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let form = use_entity_form(current);
    let mut draft = form.draft;
    let editing = form.is_editing();
    let d = draft();

    rsx! {
        form {
            class: "entity-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                form.submit(api.clone(), on_save);
            },
            h3 { if editing { "Edit Country" } else { "Add Country" } }
            TextField {
                label: "Country Code",
                value: d.country_code,
                required: true,
                oninput: move |v: String| draft.write().country_code = v,
            }
            TextField {
                label: "Country Name",
                value: d.country_name,
                required: true,
                oninput: move |v: String| draft.write().country_name = v,
            }
            NumberField {
                label: "Sort Sequence",
                value: d.sort_seq,
                oninput: move |v: String| {
                    let previous = draft.peek().sort_seq;
                    draft.write().sort_seq = parse_sort_seq(&v, previous);
                },
            }
            CheckboxField {
                label: "Active",
                checked: d.active,
                onchange: move |checked: bool| draft.write().active = checked,
            }
            if let Some(message) = (form.error)() {
                p { class: "form-error", "{message}" }
            }
            FormActions { editing, saving: (form.saving)(), on_cancel }
        }
    }
}

#[component]
pub fn StateForm(
    current: ReadOnlySignal<Option<State>>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let form = use_entity_form(current);
    let mut draft = form.draft;
    let editing = form.is_editing();
    let countries = use_countries(api.clone());
    let d = draft();

    let country_options = countries.read().items().iter().map(country_option).collect::<Vec<_>>();
    let countries_loading = matches!(*countries.read(), Options::Loading);
    let countries_error = countries.read().error().map(str::to_string);

    rsx! {
        form {
            class: "entity-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                form.submit(api.clone(), on_save);
            },
            h3 { if editing { "Edit State" } else { "Add State" } }
            TextField {
                label: "State Code",
                value: d.state_code,
                required: true,
                oninput: move |v: String| draft.write().state_code = v,
            }
            TextField {
                label: "State Name",
                value: d.state_name,
                required: true,
                oninput: move |v: String| draft.write().state_name = v,
            }
            SelectField {
                label: "Country",
                value: d.country_code,
                options: country_options,
                required: true,
                loading: countries_loading,
                error: countries_error,
                onchange: move |v: String| draft.write().country_code = v,
            }
            NumberField {
                label: "Sort Sequence",
                value: d.sort_seq,
                oninput: move |v: String| {
                    let previous = draft.peek().sort_seq;
                    draft.write().sort_seq = parse_sort_seq(&v, previous);
                },
            }
            CheckboxField {
                label: "Active",
                checked: d.active,
                onchange: move |checked: bool| draft.write().active = checked,
            }
            if let Some(message) = (form.error)() {
                p { class: "form-error", "{message}" }
            }
            FormActions { editing, saving: (form.saving)(), on_cancel }
        }
    }
}

#[component]
pub fn CityForm(
    current: ReadOnlySignal<Option<City>>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let form = use_entity_form(current);
    let mut draft = form.draft;
    let editing = form.is_editing();
    let countries = use_countries(api.clone());
    let states = use_states(api.clone());
    let d = draft();

    let country_options = countries.read().items().iter().map(country_option).collect::<Vec<_>>();
    let state_options = states.read().items().iter().map(state_option).collect::<Vec<_>>();

    rsx! {
        form {
            class: "entity-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                form.submit(api.clone(), on_save);
            },
            h3 { if editing { "Edit City" } else { "Add City" } }
            TextField {
                label: "City Name",
                value: d.city_name,
                required: true,
                oninput: move |v: String| draft.write().city_name = v,
            }
            SelectField {
                label: "Country",
                value: d.country_code.unwrap_or_default(),
                options: country_options,
                loading: matches!(*countries.read(), Options::Loading),
                error: countries.read().error().map(str::to_string),
                onchange: move |v: String| draft.write().country_code = non_empty(v),
            }
            SelectField {
                label: "State",
                value: d.state_code.unwrap_or_default(),
                options: state_options,
                loading: matches!(*states.read(), Options::Loading),
                error: states.read().error().map(str::to_string),
                onchange: move |v: String| draft.write().state_code = non_empty(v),
            }
            NumberField {
                label: "Sort Sequence",
                value: d.sort_seq,
                oninput: move |v: String| {
                    let previous = draft.peek().sort_seq;
                    draft.write().sort_seq = parse_sort_seq(&v, previous);
                },
            }
            CheckboxField {
                label: "Active",
                checked: d.active,
                onchange: move |checked: bool| draft.write().active = checked,
            }
            if let Some(message) = (form.error)() {
                p { class: "form-error", "{message}" }
            }
            FormActions { editing, saving: (form.saving)(), on_cancel }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn country_option(country: &Country) -> (String, String) {
    (
        country.country_code.clone(),
        format!("{} ({})", country.country_name, country.country_code),
    )
}

fn state_option(state: &State) -> (String, String) {
    (
        state.state_code.clone(),
        format!("{} ({})", state.state_name, state.state_code),
    )
}

/// Reference countries, loaded once on mount.
fn use_countries(api: Api) -> Signal<Options<Country>> {
    use_reference("countries", async move { api.countries().list().await })
}

fn use_states(api: Api) -> Signal<Options<State>> {
    use_reference("states", async move { api.states().list().await })
}

fn use_reference<E, Fut>(what: &'static str, request: Fut) -> Signal<Options<E>>
where
    E: Entity,
    Fut: std::future::Future<Output = Result<Vec<E>, ApiError>> + 'static,
{
    let mut options = use_signal(|| Options::Loading);
    use_hook(move || {
        spawn(async move {
            options.set(Options::from_result(request.await, what));
        })
    });
    options
}
