use api::{BookingStatus, WorkshopStatus};
use dioxus::prelude::*;

#[component]
pub fn BookingStatusChip(status: BookingStatus) -> Element {
    let color = match status {
        BookingStatus::Confirmed => "bg-green-100 text-green-800",
        BookingStatus::Pending => "bg-yellow-100 text-yellow-800",
        BookingStatus::Canceled => "bg-red-100 text-red-800",
        BookingStatus::Unknown => "bg-gray-100 text-gray-700",
    };
    rsx! {
        span {
            class: "inline-block px-2.5 py-0.5 rounded-full text-xs font-semibold {color}",
            "{status.label()}"
        }
    }
}

#[component]
pub fn WorkshopStatusChip(status: WorkshopStatus) -> Element {
    let color = match status {
        WorkshopStatus::Active => "bg-green-100 text-green-800",
        WorkshopStatus::Archived => "bg-gray-200 text-gray-700",
        WorkshopStatus::Expired => "bg-orange-100 text-orange-800",
    };
    rsx! {
        span {
            class: "inline-block px-2.5 py-0.5 rounded-full text-xs font-semibold {color}",
            "{status.label()}"
        }
    }
}
