use api::ApiError;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::session::Backend;
use crate::Icon;

/// Turn a fetch result into what a view stores. A rejected session logs
/// out; every failure is reported as `fallback`.
pub(crate) fn settle<T>(
    backend: &Backend,
    result: Result<T, ApiError>,
    fallback: &str,
) -> Result<T, String> {
    result.map_err(|e| {
        if !backend.end_session_if_rejected(&e) {
            tracing::error!("{fallback} {e}");
        }
        fallback.to_string()
    })
}

/// "Jun 1, 2030"
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center py-16 text-teal-600",
            role: "progressbar",
            Icon { class: "animate-spin", icon: FaSpinner, width: 32, height: 32 }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "bg-red-100 text-red-700 p-4 rounded-lg", "{message}" }
    }
}

#[component]
pub fn EmptyMessage(message: String) -> Element {
    rsx! {
        div { class: "text-gray-500 text-center py-12", "{message}" }
    }
}
