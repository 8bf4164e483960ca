use dioxus::prelude::*;

use ui::views::DashboardView;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView {
            on_view_bookings: move |_| {
                nav.push(Route::Bookings {});
            },
            on_view_workshops: move |_| {
                nav.push(Route::Workshops {});
            },
        }
    }
}
