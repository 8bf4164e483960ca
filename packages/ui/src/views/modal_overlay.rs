use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or pressing Escape triggers `on_close`,
/// unless `locked` is set (an action is running).
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] locked: bool,
    /// Use the wider card for forms.
    #[props(default)]
    wide: bool,
    children: Element,
) -> Element {
    let width = if wide { "max-w-2xl" } else { "max-w-md" };
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
            role: "dialog",
            "aria-modal": "true",
            tabindex: "-1",
            onclick: move |_| {
                if !locked {
                    on_close.call(());
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape && !locked {
                    on_close.call(());
                }
            },
            div {
                class: "bg-white rounded-2xl shadow-xl w-full mx-4 max-h-[90vh] overflow-y-auto {width}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
