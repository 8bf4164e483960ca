use dioxus::prelude::*;

use ui::views::{WorkshopDetailView, WorkshopsView};

use crate::Route;

#[component]
pub fn Workshops() -> Element {
    let nav = use_navigator();
    rsx! {
        WorkshopsView {
            on_open: move |id: String| {
                nav.push(Route::WorkshopDetail { id });
            },
        }
    }
}

#[component]
pub fn WorkshopDetail(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        WorkshopDetailView {
            workshop_id: id,
            on_back: move |_| {
                nav.push(Route::Workshops {});
            },
        }
    }
}
