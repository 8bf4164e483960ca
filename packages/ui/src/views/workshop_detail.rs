use api::{AdminBackend, TimeSlot, Workshop};
use chrono::Utc;
use dioxus::prelude::*;

use super::feedback::{format_date, settle, EmptyMessage, ErrorMessage, Spinner};
use crate::confirmation_dialog::ConfirmationDialog;
use crate::icons::{FaArrowLeft, FaBoxArchive, FaPen, FaPlus, FaRotateLeft, FaTrashCan};
use crate::platform::alert;
use crate::session::use_backend;
use crate::state::workshop_detail::{upsert_slot, DetailAction, DETAIL_FETCH_FAILED};
use crate::state::{Confirmation, Loadable};
use crate::status_chip::{BookingStatusChip, WorkshopStatusChip};
use crate::time_slot_dialog::TimeSlotDialog;
use crate::Icon;

/// One workshop with its time slots, bookings and archive controls.
#[component]
pub fn WorkshopDetailView(workshop_id: String, on_back: EventHandler<()>) -> Element {
    let backend = use_backend();

    // Mirror the prop so the loader re-runs on navigation between workshops
    let mut id_signal = use_signal(|| workshop_id.clone());
    if *id_signal.peek() != workshop_id {
        id_signal.set(workshop_id.clone());
    }

    let mut detail = use_signal(Loadable::<Workshop>::pending);
    let mut confirm = use_signal(Confirmation::<DetailAction>::default);
    // None: closed, Some(None): new slot, Some(Some(slot)): editing
    let mut slot_dialog = use_signal(|| Option::<Option<TimeSlot>>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            let ticket = detail.write().begin();
            let result = backend.api().workshop_by_id(&id).await;
            detail
                .write()
                .resolve(ticket, settle(&backend, result, DETAIL_FETCH_FAILED));
        }
    });

    let mut ask = move |action: DetailAction| {
        confirm.write().open(action.request(), action);
    };

    let handle_confirm = move |_| {
        let Some(action) = confirm.write().begin() else {
            return;
        };
        let id = id_signal();
        spawn(async move {
            let result = action.perform(&backend.api(), &id).await;
            confirm.write().finish();
            match result {
                Ok(outcome) => {
                    if let Some(workshop) = detail.write().data_mut() {
                        outcome.apply(workshop);
                    }
                }
                Err(e) => {
                    tracing::warn!("workshop action failed: {e}");
                    if !backend.end_session_if_rejected(&e) {
                        alert(&e.message_or(action.failure_message()));
                    }
                }
            }
        });
    };

    let back = rsx! {
        button {
            r#type: "button",
            class: "flex items-center gap-2 text-teal-600 hover:text-teal-800 mb-4",
            onclick: move |_| on_back.call(()),
            Icon { icon: FaArrowLeft, width: 14, height: 14 }
            "Back to Workshops"
        }
    };

    let state = detail.read();
    if state.is_loading() {
        return rsx! { {back} Spinner {} };
    }
    if let Some(message) = state.error() {
        return rsx! { {back} ErrorMessage { message: message.to_string() } };
    }
    let Some(workshop) = state.data().cloned() else {
        return rsx! { {back} EmptyMessage { message: "Workshop not found." } };
    };
    let status = workshop.status_at(Utc::now());
    let archived = workshop.is_archived();
    let dialog = confirm.read().clone();
    let editing = slot_dialog();

    rsx! {
        {back}
        div {
            class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
            div {
                class: "lg:col-span-2 space-y-6",
                section {
                    class: "bg-white rounded-xl shadow p-6",
                    h1 { class: "text-2xl font-bold text-gray-800 mb-2", "{workshop.title}" }
                    p { class: "text-gray-600 mb-4 whitespace-pre-line", "{workshop.description}" }
                    dl {
                        class: "grid grid-cols-2 gap-4 text-sm",
                        div {
                            dt { class: "text-gray-500", "Date" }
                            dd { class: "font-medium text-gray-800", {format_date(&workshop.date)} }
                        }
                        div {
                            dt { class: "text-gray-500", "Capacity" }
                            dd { class: "font-medium text-gray-800", "{workshop.max_capacity}" }
                        }
                    }
                }

                section {
                    class: "bg-white rounded-xl shadow p-6",
                    div {
                        class: "flex items-center justify-between mb-4",
                        h2 { class: "text-lg font-semibold text-gray-800", "Time Slots" }
                        button {
                            r#type: "button",
                            class: "flex items-center gap-2 text-sm bg-teal-500 text-white px-3 py-1.5 rounded-lg hover:bg-teal-600",
                            onclick: move |_| slot_dialog.set(Some(None)),
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            "New Time Slot"
                        }
                    }
                    if workshop.time_slots.is_empty() {
                        EmptyMessage { message: "No time slots yet." }
                    }
                    ul {
                        class: "divide-y divide-gray-100",
                        for slot in workshop.time_slots.clone() {
                            li {
                                key: "{slot.id}",
                                class: "flex items-center justify-between py-3",
                                div {
                                    p { class: "font-medium text-gray-800", "{slot.start_time} - {slot.end_time}" }
                                    p { class: "text-sm text-gray-500", "{slot.available_spots} spots available" }
                                }
                                div {
                                    class: "flex gap-2",
                                    button {
                                        r#type: "button",
                                        class: "p-2 text-gray-600 hover:text-teal-600",
                                        title: "Edit time slot",
                                        onclick: {
                                            let slot = slot.clone();
                                            move |_| slot_dialog.set(Some(Some(slot.clone())))
                                        },
                                        Icon { icon: FaPen, width: 14, height: 14 }
                                    }
                                    button {
                                        r#type: "button",
                                        class: "p-2 text-gray-600 hover:text-red-600",
                                        title: "Delete time slot",
                                        onclick: {
                                            let id = slot.id.clone();
                                            move |_| ask(DetailAction::DeleteSlot(id.clone()))
                                        },
                                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    class: "bg-white rounded-xl shadow p-6",
                    h2 { class: "text-lg font-semibold text-gray-800 mb-4", "Bookings" }
                    if workshop.bookings.is_empty() {
                        EmptyMessage { message: "No bookings yet." }
                    }
                    ul {
                        class: "divide-y divide-gray-100",
                        for booking in workshop.bookings.clone() {
                            li {
                                key: "{booking.id}",
                                class: "flex items-center justify-between py-3",
                                div {
                                    p { class: "font-medium text-gray-800", "{booking.customer_name()}" }
                                    p { class: "text-sm text-gray-500", "{booking.customer_email()} · {booking.time_range()}" }
                                }
                                BookingStatusChip { status: booking.status }
                            }
                        }
                    }
                }
            }

            aside {
                section {
                    class: "bg-white rounded-xl shadow p-6 space-y-4",
                    h2 { class: "text-lg font-semibold text-gray-800", "Status" }
                    WorkshopStatusChip { status }
                    if archived {
                        button {
                            r#type: "button",
                            class: "w-full flex items-center justify-center gap-2 bg-green-600 text-white px-4 py-2 rounded-lg hover:bg-green-700",
                            onclick: move |_| ask(DetailAction::Restore),
                            Icon { icon: FaRotateLeft, width: 14, height: 14 }
                            "Restore Workshop"
                        }
                    } else {
                        button {
                            r#type: "button",
                            class: "w-full flex items-center justify-center gap-2 bg-red-600 text-white px-4 py-2 rounded-lg hover:bg-red-700",
                            onclick: move |_| ask(DetailAction::Archive),
                            Icon { icon: FaBoxArchive, width: 14, height: 14 }
                            "Archive Workshop"
                        }
                    }
                }
            }
        }

        if let Some(request) = dialog.request().cloned() {
            ConfirmationDialog {
                request,
                submitting: dialog.is_submitting(),
                on_confirm: handle_confirm,
                on_cancel: move |_| confirm.write().dismiss(),
            }
        }

        if let Some(slot) = editing {
            TimeSlotDialog {
                workshop_id: workshop.id.clone(),
                editing: slot,
                on_save: move |saved: TimeSlot| {
                    if let Some(workshop) = detail.write().data_mut() {
                        upsert_slot(workshop, saved);
                    }
                },
                on_close: move |_| slot_dialog.set(None),
            }
        }
    }
}
