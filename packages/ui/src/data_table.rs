//! Sortable, filterable, paginated table with per-row edit and delete.
//!
//! View state lives in a [`TableState`] signal owned by the component; the
//! rows always come from the parent's latest snapshot. Deleting asks for
//! confirmation first, on every screen.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::confirm_dialog::ConfirmDialog;
use crate::context::use_config;
use crate::icons::{
    FaEye, FaEyeSlash, FaMagnifyingGlass, FaPenToSquare, FaSort, FaSortDown, FaSortUp, FaTrashCan,
};
use crate::table::{CellValue, Column, Row, SortDirection, TableState};
use crate::Icon;

#[component]
pub fn DataTable(
    noun: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
    #[props(default = false)] loading: bool,
) -> Element {
    let config = use_config();
    let mut state = use_signal(move || {
        TableState::new(config.table.default_page_size, config.table.page_sizes)
    });
    let mut revealed = use_signal(HashSet::<String>::new);
    let mut pending_delete = use_signal(|| None::<String>);

    let view = state.read().view(&columns, &rows);
    let count = view.filtered_count;
    let page_label = view.label();
    let filter = state.read().filter().to_string();
    let page_size = state.read().page_size();
    let page_sizes = state.read().page_sizes().to_vec();
    let can_previous = state.read().can_previous(count);
    let can_next = state.read().can_next(count);
    let span = columns.len() + 1;

    rsx! {
        div {
            class: "table-card",
            div {
                class: "table-toolbar",
                label {
                    class: "table-search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: "Search all columns...",
                        value: "{filter}",
                        oninput: move |evt: FormEvent| state.write().set_filter(evt.value()),
                    }
                }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        for (index, column) in columns.iter().cloned().enumerate() {
                            th {
                                key: "{column.id}",
                                class: if column.sortable { "sortable" } else { "" },
                                onclick: move |_| {
                                    if column.sortable {
                                        state.write().toggle_sort(index);
                                    }
                                },
                                span { "{column.label}" }
                                if column.sortable {
                                    span {
                                        class: "sort-indicator",
                                        {sort_icon(state.read().sort_direction(index))}
                                    }
                                }
                            }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    if loading && rows.is_empty() {
                        tr {
                            td { colspan: "{span}", class: "table-empty", "Loading..." }
                        }
                    } else if view.rows.is_empty() {
                        tr {
                            td { colspan: "{span}", class: "table-empty", "No records found." }
                        }
                    }
                    for row in view.rows.iter().cloned() {
                        tr {
                            key: "{row.key}",
                            for (index, cell) in row.cells.iter().cloned().enumerate() {
                                td {
                                    key: "{index}",
                                    {render_cell(&row.key, cell, revealed)}
                                }
                            }
                            td {
                                class: "row-actions",
                                button {
                                    class: "btn btn-small btn-primary",
                                    title: "Edit",
                                    onclick: {
                                        let key = row.key.clone();
                                        move |_| on_edit.call(key.clone())
                                    },
                                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                    " Edit"
                                }
                                button {
                                    class: "btn btn-small btn-danger",
                                    title: "Delete",
                                    onclick: {
                                        let key = row.key.clone();
                                        move |_| pending_delete.set(Some(key.clone()))
                                    },
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                    " Delete"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "table-pagination",
                button {
                    class: "btn btn-small",
                    disabled: !can_previous,
                    onclick: move |_| state.write().first_page(),
                    "<<"
                }
                button {
                    class: "btn btn-small",
                    disabled: !can_previous,
                    onclick: move |_| state.write().previous_page(count),
                    "<"
                }
                span { class: "page-label", "{page_label}" }
                button {
                    class: "btn btn-small",
                    disabled: !can_next,
                    onclick: move |_| state.write().next_page(count),
                    ">"
                }
                button {
                    class: "btn btn-small",
                    disabled: !can_next,
                    onclick: move |_| state.write().last_page(count),
                    ">>"
                }
                select {
                    value: "{page_size}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            state.write().set_page_size(size, count);
                        }
                    },
                    for size in page_sizes {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == page_size,
                            "Show {size}"
                        }
                    }
                }
            }
        }

        {pending_delete().map(|key| rsx! {
            ConfirmDialog {
                title: "Confirm Delete",
                message: format!("Are you sure you want to delete this {noun}?"),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    pending_delete.set(None);
                    revealed.write().remove(&key);
                    on_delete.call(key.clone());
                },
            }
        })}
    }
}

fn sort_icon(direction: Option<SortDirection>) -> Element {
    match direction {
        Some(SortDirection::Ascending) => rsx! { Icon { icon: FaSortUp, width: 12, height: 12 } },
        Some(SortDirection::Descending) => rsx! { Icon { icon: FaSortDown, width: 12, height: 12 } },
        None => rsx! { Icon { icon: FaSort, width: 12, height: 12 } },
    }
}

fn render_cell(row_key: &str, cell: CellValue, mut revealed: Signal<HashSet<String>>) -> Element {
    match cell {
        CellValue::Secret(secret) => {
            let key = row_key.to_string();
            let shown = revealed.read().contains(&key);
            let text = if shown { secret } else { CellValue::Secret(secret).display() };
            rsx! {
                span { class: "secret", "{text}" }
                button {
                    class: "icon-button",
                    title: if shown { "Hide password" } else { "Show password" },
                    onclick: move |_| {
                        let mut set = revealed.write();
                        if !set.remove(&key) {
                            set.insert(key.clone());
                        }
                    },
                    if shown {
                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                }
            }
        }
        CellValue::Flag(active) => {
            let text = CellValue::Flag(active).display();
            rsx! {
                span { class: if active { "badge badge-yes" } else { "badge badge-no" }, "{text}" }
            }
        }
        CellValue::Missing => rsx! { span { class: "missing", "N/A" } },
        other => {
            let text = other.display();
            rsx! { "{text}" }
        }
    }
}
