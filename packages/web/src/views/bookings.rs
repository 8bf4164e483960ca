use dioxus::prelude::*;

use ui::views::BookingsView;

#[component]
pub fn Bookings() -> Element {
    rsx! {
        BookingsView {}
    }
}
