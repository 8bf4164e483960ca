use api::{Booking, BookingStatus};
use dioxus::prelude::*;

use crate::icons::FaEllipsisVertical;
use crate::status_chip::BookingStatusChip;
use crate::Icon;

/// The bookings grid. Status changes are requested through `on_set_status`;
/// the table itself never changes a row.
#[component]
pub fn BookingsTable(
    rows: Vec<Booking>,
    /// Booking whose actions menu is open.
    menu: Option<String>,
    on_toggle_menu: EventHandler<String>,
    on_set_status: EventHandler<(String, BookingStatus)>,
) -> Element {
    rsx! {
        table {
            class: "min-w-full divide-y divide-gray-200",
            thead {
                class: "bg-gray-50",
                tr {
                    for heading in ["Customer Name", "Customer Email", "Workshop", "Time Slot", "Status", "Actions"] {
                        th {
                            class: "px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase",
                            "{heading}"
                        }
                    }
                }
            }
            tbody {
                class: "divide-y divide-gray-100",
                for booking in rows {
                    BookingRow {
                        key: "{booking.id}",
                        menu_open: menu.as_deref() == Some(booking.id.as_str()),
                        booking: booking.clone(),
                        on_toggle_menu,
                        on_set_status,
                    }
                }
            }
        }
    }
}

#[component]
fn BookingRow(
    booking: Booking,
    menu_open: bool,
    on_toggle_menu: EventHandler<String>,
    on_set_status: EventHandler<(String, BookingStatus)>,
) -> Element {
    let id = booking.id.clone();
    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-4 py-3", "{booking.customer_name()}" }
            td { class: "px-4 py-3", "{booking.customer_email()}" }
            td { class: "px-4 py-3", "{booking.workshop_title()}" }
            td { class: "px-4 py-3", "{booking.time_range()}" }
            td { class: "px-4 py-3", BookingStatusChip { status: booking.status } }
            td {
                class: "px-4 py-3 relative",
                button {
                    r#type: "button",
                    class: "p-2 rounded-full hover:bg-gray-200",
                    "aria-label": "Actions for booking {id}",
                    onclick: {
                        let id = id.clone();
                        move |_| on_toggle_menu.call(id.clone())
                    },
                    Icon { icon: FaEllipsisVertical, width: 14, height: 14 }
                }
                if menu_open {
                    ul {
                        class: "absolute right-4 z-10 mt-1 w-44 bg-white border rounded-md shadow-lg",
                        role: "menu",
                        for status in BookingStatus::SELECTABLE {
                            li {
                                key: "{status.as_str()}",
                                role: "menuitem",
                                class: "px-4 py-2 text-sm cursor-pointer hover:bg-gray-100",
                                onclick: {
                                    let id = id.clone();
                                    move |_| on_set_status.call((id.clone(), status))
                                },
                                "Set to {status.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{BookingTimeSlot, BookingUser, BookingWorkshop};

    fn render(rows: Vec<Booking>, menu: Option<String>) -> String {
        fn app(props: (Vec<Booking>, Option<String>)) -> Element {
            let (rows, menu) = props;
            rsx! {
                BookingsTable {
                    rows,
                    menu,
                    on_toggle_menu: |_| {},
                    on_set_status: |_| {},
                }
            }
        }
        let mut dom = VirtualDom::new_with_props(app, (rows, menu));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_row_fields() {
        let booking = Booking {
            id: "booking-1".into(),
            status: BookingStatus::Pending,
            user: Some(BookingUser {
                name: Some("Ada Lovelace".into()),
                email: Some("ada@example.com".into()),
            }),
            workshop: Some(BookingWorkshop {
                title: "Pottery".into(),
            }),
            time_slot: Some(BookingTimeSlot {
                start_time: "10:00 AM".into(),
                end_time: "12:00 PM".into(),
            }),
        };
        let html = render(vec![booking], None);
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("10:00 AM - 12:00 PM"));
        assert!(html.contains("Pending"));
        assert!(html.contains("Actions for booking booking-1"));
        assert!(!html.contains("Set to Confirmed"));
    }

    #[tokio::test]
    async fn test_confirmed_row_after_status_change() {
        use crate::state::bookings::BookingsState;
        use crate::state::fake::FakeBackend;
        use crate::state::PaginationModel;
        use api::AdminBackend;

        let backend = FakeBackend::default();
        backend.bookings.borrow_mut().push(Booking {
            id: "booking-1".into(),
            status: BookingStatus::Pending,
            user: Some(BookingUser {
                name: Some("John Doe".into()),
                email: None,
            }),
            workshop: None,
            time_slot: None,
        });

        let mut state = BookingsState::default();
        let ticket = state.begin();
        let page = backend.all_bookings(PaginationModel::default().query()).await;
        state.resolve(ticket, page.map_err(|e| e.to_string()));
        assert!(render(state.rows().to_vec(), None).contains("Pending"));

        let echoed = backend
            .update_booking_status("booking-1", BookingStatus::Confirmed)
            .await
            .unwrap();
        state.apply_status("booking-1", BookingStatus::Confirmed, echoed);

        let html = render(state.rows().to_vec(), None);
        assert!(html.contains("John Doe"));
        assert!(html.contains("Confirmed"));
        assert!(!html.contains("Pending"));
    }

    #[test]
    fn test_missing_fields_show_placeholder() {
        let booking = Booking {
            id: "b2".into(),
            status: BookingStatus::Unknown,
            user: None,
            workshop: None,
            time_slot: None,
        };
        let html = render(vec![booking], Some("b2".into()));
        assert!(html.contains("N/A"));
        assert!(html.contains("Unknown"));
        assert!(html.contains("Set to Pending"));
        assert!(html.contains("Set to Canceled"));
    }
}
