use api::{AdminBackend, DashboardStats};
use dioxus::prelude::*;

use super::feedback::{settle, EmptyMessage, ErrorMessage, Spinner};
use crate::popular_chart::{ChartKind, PopularChart};
use crate::session::use_backend;
use crate::state::Loadable;

const STATS_FETCH_FAILED: &str = "Failed to fetch dashboard stats.";

#[component]
pub fn DashboardView(on_view_bookings: EventHandler<()>, on_view_workshops: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut stats = use_signal(Loadable::<DashboardStats>::pending);
    let mut chart = use_signal(ChartKind::default);

    let _loader = use_resource(move || async move {
        let ticket = stats.write().begin();
        let result = backend.api().dashboard_stats().await;
        stats
            .write()
            .resolve(ticket, settle(&backend, result, STATS_FETCH_FAILED));
    });

    let state = stats.read();
    if state.is_loading() {
        return rsx! { Spinner {} };
    }
    if let Some(message) = state.error() {
        return rsx! { ErrorMessage { message: message.to_string() } };
    }
    let Some(data) = state.data().cloned() else {
        return rsx! { EmptyMessage { message: "No stats available." } };
    };
    let kind = chart();
    let percentage = capacity_label(data.slots_filled_percentage);

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-2xl font-bold text-gray-800", "Dashboard" }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                StatCard {
                    title: "Total Bookings",
                    value: data.total_bookings.to_string(),
                    CardLink { label: "View Bookings", on_click: move |_| on_view_bookings.call(()) }
                }
                StatCard {
                    title: "Active Workshops",
                    value: data.total_workshops.to_string(),
                    CardLink { label: "View Workshops", on_click: move |_| on_view_workshops.call(()) }
                }
                StatCard {
                    title: "Slots Filled",
                    value: data.slots_filled.to_string(),
                    p { class: "text-sm text-teal-600 mt-1", "{percentage}" }
                }
            }
            div {
                class: "bg-white rounded-xl shadow p-6",
                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-semibold text-gray-800", "Most Popular Workshops" }
                    button {
                        r#type: "button",
                        class: "text-sm text-teal-600 border border-teal-600 px-3 py-1 rounded-lg hover:bg-teal-50",
                        onclick: move |_| chart.set(kind.toggled()),
                        "{kind.toggle_label()}"
                    }
                }
                if data.popular_workshops.is_empty() {
                    EmptyMessage { message: "No bookings yet." }
                } else {
                    PopularChart {
                        peak: data.peak_bookings(),
                        workshops: data.popular_workshops.clone(),
                        kind,
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl shadow p-6",
            p { class: "text-sm text-gray-500", "{title}" }
            p { class: "text-3xl font-bold text-gray-800 mt-2", "{value}" }
            {children}
        }
    }
}

#[component]
fn CardLink(label: String, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "text-sm text-teal-600 hover:underline mt-3",
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}

/// The server's figure as sent: `75.0` shows as `75`, `66.67` stays `66.67`.
fn capacity_label(percentage: f64) -> String {
    format!("{percentage}% Capacity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_label_keeps_server_precision() {
        assert_eq!(capacity_label(75.0), "75% Capacity");
        assert_eq!(capacity_label(66.67), "66.67% Capacity");
        assert_eq!(capacity_label(0.5), "0.5% Capacity");
    }
}
