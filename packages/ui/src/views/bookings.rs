use api::{AdminBackend, BookingStatus};
use dioxus::prelude::*;

use super::feedback::{settle, EmptyMessage, ErrorMessage, Spinner};
use crate::bookings_table::BookingsTable;
use crate::pager::Pager;
use crate::platform::alert;
use crate::session::use_backend;
use crate::state::bookings::{BookingsState, BOOKINGS_FETCH_FAILED, STATUS_UPDATE_FAILED};
use crate::state::{Loadable, PaginationModel};

/// Server-paged bookings with per-row status actions.
#[component]
pub fn BookingsView() -> Element {
    let backend = use_backend();
    let mut pagination = use_signal(PaginationModel::default);
    let mut state = use_signal(|| BookingsState {
        page: Loadable::pending(),
        ..BookingsState::default()
    });

    // Re-runs whenever the page or page size changes
    let _loader = use_resource(move || {
        let query = pagination().query();
        async move {
            let ticket = state.write().begin();
            tracing::debug!(page = query.page, limit = query.limit, "fetching bookings");
            let result = backend.api().all_bookings(query).await;
            state
                .write()
                .resolve(ticket, settle(&backend, result, BOOKINGS_FETCH_FAILED));
        }
    });

    let handle_set_status = move |(booking_id, status): (String, BookingStatus)| {
        spawn(async move {
            match backend.api().update_booking_status(&booking_id, status).await {
                Ok(echoed) => {
                    state.write().apply_status(&booking_id, status, echoed);
                }
                Err(e) => {
                    tracing::warn!(booking = %booking_id, "status update failed: {e}");
                    state.write().menu = None;
                    if !backend.end_session_if_rejected(&e) {
                        alert(&e.message_or(STATUS_UPDATE_FAILED));
                    }
                }
            }
        });
    };

    let current = state.read();
    let body = if current.page.is_loading() && current.rows().is_empty() {
        rsx! { Spinner {} }
    } else if let Some(message) = current.page.error() {
        rsx! { ErrorMessage { message: message.to_string() } }
    } else if current.rows().is_empty() {
        rsx! { EmptyMessage { message: "No bookings available." } }
    } else {
        rsx! {
            div {
                class: "bg-white rounded-xl shadow overflow-x-auto",
                BookingsTable {
                    rows: current.rows().to_vec(),
                    menu: current.menu.clone(),
                    on_toggle_menu: move |id: String| state.write().toggle_menu(&id),
                    on_set_status: handle_set_status,
                }
                Pager {
                    pagination: pagination(),
                    total: current.total,
                    on_change: move |next| pagination.set(next),
                }
            }
        }
    };

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-2xl font-bold text-gray-800", "Bookings Management" }
            {body}
        }
    }
}
