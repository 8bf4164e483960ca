//! # Bookings
//!
//! A [`Booking`] references a user, a workshop and a time slot. The list
//! endpoint embeds small projections of each; the nested bookings of a
//! workshop detail response may leave some of them out, so all three are
//! optional and rendered as `"N/A"` when missing.
//!
//! `status` is the only field the console edits. Any status may be set from
//! any other; the backend decides what is legal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub user: Option<BookingUser>,
    #[serde(default)]
    pub workshop: Option<BookingWorkshop>,
    #[serde(default)]
    pub time_slot: Option<BookingTimeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingWorkshop {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingTimeSlot {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
    /// Anything the backend sends that this client does not know about.
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Statuses an admin can pick from.
    pub const SELECTABLE: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Canceled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Canceled => "Canceled",
            BookingStatus::Unknown => "Unknown",
        }
    }

    /// Wire value, as sent in `PUT /bookings/{id}`.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Canceled => "CANCELED",
            BookingStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const NOT_AVAILABLE: &str = "N/A";

impl Booking {
    pub fn customer_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn customer_email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn workshop_title(&self) -> &str {
        self.workshop
            .as_ref()
            .map(|w| w.title.as_str())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// `"9 AM - 10 AM"`, or `"N/A"` without a slot.
    pub fn time_range(&self) -> String {
        match &self.time_slot {
            Some(slot) => format!("{} - {}", slot.start_time, slot.end_time),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Query of `GET /bookings`. `page` is 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

/// Response of `GET /bookings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingsPage {
    pub data: Vec<Booking>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookings_page_from_backend() {
        let json = r#"{
            "data": [{
                "id": "booking-1",
                "status": "PENDING",
                "user": {"name": "John Doe", "email": "john@example.com"},
                "workshop": {"title": "Yoga Basics"},
                "timeSlot": {"startTime": "9 AM", "endTime": "10 AM"}
            }],
            "pagination": {"total": 1, "page": 1, "limit": 10}
        }"#;
        let page: BookingsPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.pagination.total, 1);
        let booking = &page.data[0];
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.customer_name(), "John Doe");
        assert_eq!(booking.workshop_title(), "Yoga Basics");
        assert_eq!(booking.time_range(), "9 AM - 10 AM");
    }

    #[test]
    fn test_missing_nested_fields_render_na() {
        let booking: Booking =
            serde_json::from_str(r#"{"id":"b2","status":"CONFIRMED","user":{"name":"Ann"}}"#)
                .unwrap();

        assert_eq!(booking.customer_name(), "Ann");
        assert_eq!(booking.customer_email(), "N/A");
        assert_eq!(booking.workshop_title(), "N/A");
        assert_eq!(booking.time_range(), "N/A");
    }

    #[test]
    fn test_unrecognised_status() {
        let booking: Booking =
            serde_json::from_str(r#"{"id":"b3","status":"WAITLISTED"}"#).unwrap();
        assert_eq!(booking.status, BookingStatus::Unknown);
        assert_eq!(booking.status.label(), "Unknown");
    }

    #[test]
    fn test_status_wire_value_matches_serde() {
        for status in BookingStatus::SELECTABLE {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }
}
