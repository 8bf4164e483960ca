use api::{AdminBackend, NewWorkshop};
use dioxus::prelude::*;

use super::feedback::{format_date, settle, EmptyMessage, ErrorMessage, Spinner};
use super::ModalOverlay;
use crate::icons::FaPlus;
use crate::pager::Pager;
use crate::platform::sleep_ms;
use crate::session::use_backend;
use crate::state::workshops::{
    CreateDialog, WorkshopsState, CREATED_CLOSE_DELAY_MS, WORKSHOPS_FETCH_FAILED,
    WORKSHOP_CREATE_FAILED,
};
use crate::state::Loadable;
use crate::status_chip::WorkshopStatusChip;
use crate::workshop_form::WorkshopForm;
use crate::Icon;

/// Workshop table with the create dialog. `on_open` receives a workshop id.
#[component]
pub fn WorkshopsView(on_open: EventHandler<String>) -> Element {
    let backend = use_backend();
    let mut state = use_signal(|| WorkshopsState {
        workshops: Loadable::pending(),
        ..WorkshopsState::default()
    });
    let mut dialog = use_signal(CreateDialog::default);

    let _loader = use_resource(move || async move {
        let ticket = state.write().workshops.begin();
        let result = backend.api().admin_workshops().await;
        state
            .write()
            .workshops
            .resolve(ticket, settle(&backend, result, WORKSHOPS_FETCH_FAILED));
    });

    let handle_create = move |payload: NewWorkshop| {
        if !dialog.write().begin() {
            return;
        }
        spawn(async move {
            match backend.api().create_workshop(&payload).await {
                Ok(created) => {
                    tracing::info!(id = %created.id, "workshop created");
                    state.write().prepend(created);
                    let shown = dialog.write().succeed();
                    sleep_ms(CREATED_CLOSE_DELAY_MS).await;
                    dialog.write().close_after_success(shown);
                }
                Err(e) => {
                    tracing::warn!("create workshop failed: {e}");
                    if !backend.end_session_if_rejected(&e) {
                        dialog.write().fail(e.message_or(WORKSHOP_CREATE_FAILED));
                    }
                }
            }
        });
    };

    let current = state.read();
    let body = if current.workshops.is_loading() {
        rsx! { Spinner {} }
    } else if let Some(message) = current.workshops.error() {
        rsx! { ErrorMessage { message: message.to_string() } }
    } else if current.all().is_empty() {
        rsx! { EmptyMessage { message: "No workshops available." } }
    } else {
        let pagination = current.pagination;
        let total = current.total();
        let rows = current.visible().to_vec();
        rsx! {
            div {
                class: "bg-white rounded-xl shadow overflow-x-auto",
                table {
                    class: "min-w-full divide-y divide-gray-200",
                    thead {
                        class: "bg-gray-50",
                        tr {
                            for heading in ["Title", "Date", "Capacity", "Status"] {
                                th { class: "px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase", "{heading}" }
                            }
                        }
                    }
                    tbody {
                        class: "divide-y divide-gray-100",
                        for workshop in rows {
                            tr {
                                key: "{workshop.id}",
                                class: "cursor-pointer hover:bg-gray-50",
                                onclick: {
                                    let id = workshop.id.clone();
                                    move |_| on_open.call(id.clone())
                                },
                                td { class: "px-4 py-3 font-medium text-gray-800", "{workshop.title}" }
                                td { class: "px-4 py-3", {format_date(&workshop.date)} }
                                td { class: "px-4 py-3", "{workshop.max_capacity}" }
                                td { class: "px-4 py-3", WorkshopStatusChip { status: workshop.archive_status() } }
                            }
                        }
                    }
                }
                Pager {
                    pagination,
                    total,
                    on_change: move |next| state.write().pagination = next,
                }
            }
        }
    };

    let create = dialog.read().clone();

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-800", "Workshops" }
                button {
                    r#type: "button",
                    class: "flex items-center gap-2 bg-teal-500 text-white px-4 py-2 rounded-lg hover:bg-teal-600",
                    onclick: move |_| dialog.write().open(),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Create Workshop"
                }
            }
            {body}
        }
        if create.open {
            ModalOverlay {
                on_close: move |_| dialog.write().close(),
                locked: create.submitting,
                wide: true,
                div {
                    class: "p-6",
                    h2 { class: "text-xl font-bold text-gray-800 mb-4", "Create New Workshop" }
                    if let Some(message) = create.success.clone() {
                        div { class: "bg-green-100 text-green-700 p-3 rounded-lg text-sm mb-4", "{message}" }
                    } else {
                        if let Some(message) = create.error.clone() {
                            div { class: "bg-red-100 text-red-700 p-3 rounded-lg text-sm mb-4", "{message}" }
                        }
                        WorkshopForm {
                            submitting: create.submitting,
                            on_submit: handle_create,
                            on_cancel: move |_| dialog.write().close(),
                        }
                    }
                }
            }
        }
    }
}
