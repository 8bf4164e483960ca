use dioxus::prelude::*;

use crate::state::ConfirmRequest;
use crate::views::ModalOverlay;

/// Confirm-before-acting dialog.
///
/// While `submitting`, both buttons are disabled and the backdrop does not
/// close the dialog.
#[component]
pub fn ConfirmationDialog(
    request: ConfirmRequest,
    submitting: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let button = request.confirm_color.button_class();
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            locked: submitting,
            div {
                class: "p-6",
                h2 { class: "text-xl font-bold text-gray-800 mb-2", "{request.title}" }
                p { class: "text-gray-600 mb-6", "{request.message}" }
                div {
                    class: "flex justify-end gap-3",
                    button {
                        r#type: "button",
                        class: "bg-gray-200 text-gray-700 px-4 py-2 rounded-lg hover:bg-gray-300 disabled:opacity-50",
                        disabled: submitting,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "text-white px-4 py-2 rounded-lg disabled:opacity-50 {button}",
                        disabled: submitting,
                        onclick: move |_| on_confirm.call(()),
                        if submitting { "Processing..." } else { "{request.confirm_text}" }
                    }
                }
            }
        }
    }
}
