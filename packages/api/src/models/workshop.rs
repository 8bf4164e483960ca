//! # Workshops and their time slots
//!
//! [`Workshop`] is what `GET /workshops/admin` lists and what
//! `GET /workshops/{id}` returns with `timeSlots` and `bookings` filled in.
//! The list endpoint may omit the nested collections, so both default to
//! empty.
//!
//! Archiving is a soft delete: `deletedAt` is set by `DELETE /workshops/{id}`
//! and cleared by `PUT /workshops/{id}/restore`. The client never removes a
//! workshop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::booking::Booking;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub max_capacity: u32,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Lifecycle label shown next to a workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkshopStatus {
    Active,
    Archived,
    /// The workshop date is not in the future.
    Expired,
}

impl WorkshopStatus {
    pub fn label(self) -> &'static str {
        match self {
            WorkshopStatus::Active => "Active",
            WorkshopStatus::Archived => "Archived",
            WorkshopStatus::Expired => "Out Dated",
        }
    }
}

impl Workshop {
    pub fn is_archived(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Archive state only, as shown in the workshop list.
    pub fn archive_status(&self) -> WorkshopStatus {
        if self.is_archived() {
            WorkshopStatus::Archived
        } else {
            WorkshopStatus::Active
        }
    }

    /// Detail-page status: an expired date wins over the archive state.
    pub fn status_at(&self, now: DateTime<Utc>) -> WorkshopStatus {
        if self.date <= now {
            WorkshopStatus::Expired
        } else {
            self.archive_status()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub available_spots: u32,
}

/// Body of `POST /workshops`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkshop {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub max_capacity: u32,
    pub time_slots: Vec<NewTimeSlot>,
}

/// Body of `POST /workshops/{id}/timeslots`, also nested in [`NewWorkshop`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeSlot {
    pub start_time: String,
    pub end_time: String,
}

/// Body of `PUT /timeslots/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotUpdate {
    pub start_time: String,
    pub end_time: String,
    pub available_spots: u32,
}
