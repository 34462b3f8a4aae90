use dioxus::prelude::*;

use crate::form::sort_seq_text;
use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] required: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        label {
            class: "field",
            span {
                class: "field-label",
                "{label}"
                if required { span { class: "field-required", " *" } }
            }
            input {
                class: if error.is_some() { "field-input invalid" } else { "field-input" },
                r#type: "{input_type}",
                value: "{value}",
                required,
                disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(ref message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}

/// Password input with its own show/hide toggle.
#[component]
pub fn PasswordField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] error: Option<String>,
) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" span { class: "field-required", " *" } }
            div {
                class: "field-with-button",
                input {
                    class: if error.is_some() { "field-input invalid" } else { "field-input" },
                    r#type: if visible() { "text" } else { "password" },
                    value: "{value}",
                    required: true,
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "icon-button",
                    title: if visible() { "Hide password" } else { "Show password" },
                    onclick: move |_| visible.toggle(),
                    if visible() {
                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                }
            }
            if let Some(ref message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}

/// Integer input that keeps the typed text while it still parses to `value`.
#[component]
pub fn NumberField(label: String, value: i64, oninput: EventHandler<String>) -> Element {
    let mut raw = use_signal(move || value.to_string());
    let shown = sort_seq_text(&raw(), value);

    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: "field-input",
                r#type: "number",
                step: "1",
                value: "{shown}",
                oninput: move |evt: FormEvent| {
                    raw.set(evt.value());
                    oninput.call(evt.value());
                },
            }
        }
    }
}

#[component]
pub fn CheckboxField(label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "field field-checkbox",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| onchange.call(!checked),
            }
            span { "{label}" }
        }
    }
}

/// `options` are `(value, label)` pairs; an empty value means "none".
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
    #[props(default)] required: bool,
    #[props(default)] loading: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span {
                class: "field-label",
                "{label}"
                if required { span { class: "field-required", " *" } }
            }
            select {
                class: "field-input",
                value: "{value}",
                required,
                disabled: loading,
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                option {
                    value: "",
                    selected: value.is_empty(),
                    if loading { "Loading..." } else { "None" }
                }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
            if let Some(ref message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}
