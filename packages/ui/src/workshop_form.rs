use api::NewWorkshop;
use dioxus::prelude::*;

use crate::icons::{FaPlus, FaTrashCan};
use crate::state::workshop_form::{WorkshopDraft, WorkshopErrors};
use crate::Icon;

const INPUT: &str = "mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-teal-500 focus:border-teal-500";

/// Create-workshop form. Only a draft that validates reaches `on_submit`.
#[component]
pub fn WorkshopForm(
    on_submit: EventHandler<NewWorkshop>,
    on_cancel: EventHandler<()>,
    #[props(default)] submitting: bool,
) -> Element {
    let mut draft = use_signal(WorkshopDraft::default);
    let mut errors = use_signal(WorkshopErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft.read().validate() {
            Ok(payload) => {
                errors.set(WorkshopErrors::default());
                on_submit.call(payload);
            }
            Err(found) => errors.set(found),
        }
    };

    let current = errors.read().clone();
    let slots = draft.read().time_slots.clone();
    let can_remove = draft.read().can_remove_slot();

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: handle_submit,

            div {
                label { class: "block text-sm font-medium text-gray-700", r#for: "workshop-title", "Title" }
                input {
                    id: "workshop-title",
                    class: INPUT,
                    r#type: "text",
                    disabled: submitting,
                    value: "{draft.read().title}",
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }
                FieldError { message: current.title.clone() }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700", r#for: "workshop-description", "Description" }
                textarea {
                    id: "workshop-description",
                    class: INPUT,
                    rows: "4",
                    disabled: submitting,
                    value: "{draft.read().description}",
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }
                FieldError { message: current.description.clone() }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div {
                    label { class: "block text-sm font-medium text-gray-700", r#for: "workshop-date", "Date" }
                    input {
                        id: "workshop-date",
                        class: INPUT,
                        r#type: "date",
                        disabled: submitting,
                        value: "{draft.read().date}",
                        oninput: move |evt: FormEvent| draft.write().date = evt.value(),
                    }
                    FieldError { message: current.date.clone() }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700", r#for: "workshop-capacity", "Max Capacity" }
                    input {
                        id: "workshop-capacity",
                        class: INPUT,
                        r#type: "number",
                        disabled: submitting,
                        value: "{draft.read().max_capacity}",
                        oninput: move |evt: FormEvent| draft.write().max_capacity = evt.value(),
                    }
                    FieldError { message: current.max_capacity.clone() }
                }
            }

            div {
                h3 { class: "text-sm font-medium text-gray-700 mb-2", "Time Slots" }
                for (index, slot) in slots.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "flex items-start gap-2 mb-2",
                        div {
                            class: "flex-1",
                            input {
                                class: INPUT,
                                r#type: "text",
                                placeholder: "Start (e.g., 10:00 AM)",
                                disabled: submitting,
                                value: "{slot.start_time}",
                                oninput: move |evt: FormEvent| {
                                    if let Some(slot) = draft.write().time_slots.get_mut(index) {
                                        slot.start_time = evt.value();
                                    }
                                },
                            }
                            FieldError { message: current.slot(index).start_time }
                        }
                        div {
                            class: "flex-1",
                            input {
                                class: INPUT,
                                r#type: "text",
                                placeholder: "End (e.g., 12:00 PM)",
                                disabled: submitting,
                                value: "{slot.end_time}",
                                oninput: move |evt: FormEvent| {
                                    if let Some(slot) = draft.write().time_slots.get_mut(index) {
                                        slot.end_time = evt.value();
                                    }
                                },
                            }
                            FieldError { message: current.slot(index).end_time }
                        }
                        button {
                            r#type: "button",
                            class: "mt-2 text-red-500 hover:text-red-700 disabled:opacity-30",
                            title: "Remove time slot",
                            disabled: submitting || !can_remove,
                            onclick: move |_| {
                                draft.write().remove_slot(index);
                            },
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                    }
                }
                FieldError { message: current.time_slots.clone() }
                button {
                    r#type: "button",
                    class: "flex items-center gap-2 text-sm text-teal-600 hover:text-teal-800",
                    disabled: submitting,
                    onclick: move |_| draft.write().add_slot(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Add Time Slot"
                }
            }

            div {
                class: "flex justify-end gap-3 pt-2",
                button {
                    r#type: "button",
                    class: "bg-gray-200 text-gray-700 px-4 py-2 rounded-lg hover:bg-gray-300",
                    disabled: submitting,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "bg-teal-500 text-white px-4 py-2 rounded-lg hover:bg-teal-600 disabled:bg-teal-300",
                    disabled: submitting,
                    if submitting { "Creating..." } else { "Create Workshop" }
                }
            }
        }
    }
}

#[component]
fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "mt-1 text-sm text-red-600", "{message}" }
        },
        None => rsx! {},
    }
}
