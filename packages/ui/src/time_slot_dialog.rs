use api::TimeSlot;
use dioxus::prelude::*;

use crate::session::use_backend;
use crate::state::time_slot_form::{TimeSlotForm, SLOT_SAVE_FAILED};
use crate::views::ModalOverlay;

const INPUT: &str = "mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-teal-500 focus:border-teal-500";

/// Add or edit a time slot of `workshop_id`. `on_save` receives the slot as
/// the backend stored it.
#[component]
pub fn TimeSlotDialog(
    workshop_id: String,
    editing: Option<TimeSlot>,
    on_save: EventHandler<TimeSlot>,
    on_close: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let mut form = use_signal(move || match &editing {
        Some(slot) => TimeSlotForm::edit(slot),
        None => TimeSlotForm::create(),
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let submission = match form.read().validate() {
            Ok(submission) => submission,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        submitting.set(true);
        let workshop_id = workshop_id.clone();
        spawn(async move {
            let result = submission.send(&backend.api(), &workshop_id).await;
            submitting.set(false);
            match result {
                Ok(slot) => {
                    on_save.call(slot);
                    on_close.call(());
                }
                Err(e) => {
                    if !backend.end_session_if_rejected(&e) {
                        error.set(Some(e.message_or(SLOT_SAVE_FAILED)));
                    }
                }
            }
        });
    };

    let editing = form.read().is_editing();
    let title = form.read().title();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            locked: submitting(),
            div {
                class: "p-6",
                h2 { class: "text-xl font-bold text-gray-800 mb-4", "{title}" }
                if let Some(message) = error() {
                    div { class: "bg-red-100 text-red-700 p-3 rounded-lg text-sm mb-4", "{message}" }
                }
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "space-y-4",
                        div {
                            label { class: "block text-sm font-medium text-gray-700", r#for: "slot-start", "Start Time" }
                            input {
                                id: "slot-start",
                                class: INPUT,
                                r#type: "text",
                                placeholder: "e.g., 10:00 AM",
                                value: "{form.read().start_time}",
                                oninput: move |evt: FormEvent| form.write().start_time = evt.value(),
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700", r#for: "slot-end", "End Time" }
                            input {
                                id: "slot-end",
                                class: INPUT,
                                r#type: "text",
                                placeholder: "e.g., 12:00 PM",
                                value: "{form.read().end_time}",
                                oninput: move |evt: FormEvent| form.write().end_time = evt.value(),
                            }
                        }
                        if editing {
                            div {
                                label { class: "block text-sm font-medium text-gray-700", r#for: "slot-spots", "Available Spots" }
                                input {
                                    id: "slot-spots",
                                    class: INPUT,
                                    r#type: "number",
                                    min: "0",
                                    value: "{form.read().available_spots}",
                                    oninput: move |evt: FormEvent| form.write().available_spots = evt.value(),
                                }
                            }
                        }
                    }
                    div {
                        class: "mt-6 flex justify-end gap-3",
                        button {
                            r#type: "button",
                            class: "bg-gray-200 text-gray-700 px-4 py-2 rounded-lg hover:bg-gray-300",
                            disabled: submitting(),
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "bg-teal-500 text-white px-4 py-2 rounded-lg hover:bg-teal-600 disabled:bg-teal-300",
                            disabled: submitting(),
                            if submitting() { "Saving..." } else { "Save Time Slot" }
                        }
                    }
                }
            }
        }
    }
}
