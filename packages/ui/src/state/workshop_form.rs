//! Create-workshop form: the draft being edited and its validation.

use api::{NewTimeSlot, NewWorkshop};
use chrono::{DateTime, NaiveDate, Utc};

pub const DEFAULT_CAPACITY: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct SlotDraft {
    pub start_time: String,
    pub end_time: String,
}

/// Raw form input, kept as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkshopDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub max_capacity: String,
    pub time_slots: Vec<SlotDraft>,
}

impl Default for WorkshopDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            max_capacity: DEFAULT_CAPACITY.to_string(),
            time_slots: vec![SlotDraft {
                start_time: "10:00 AM".to_string(),
                end_time: "12:00 PM".to_string(),
            }],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotErrors {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Per-field messages. Empty means the draft is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkshopErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub max_capacity: Option<String>,
    pub time_slots: Option<String>,
    pub slots: Vec<SlotErrors>,
}

impl WorkshopErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.max_capacity.is_none()
            && self.time_slots.is_none()
            && self
                .slots
                .iter()
                .all(|s| s.start_time.is_none() && s.end_time.is_none())
    }

    pub fn slot(&self, index: usize) -> SlotErrors {
        self.slots.get(index).cloned().unwrap_or_default()
    }
}

impl WorkshopDraft {
    pub fn add_slot(&mut self) {
        self.time_slots.push(SlotDraft {
            start_time: String::new(),
            end_time: String::new(),
        });
    }

    pub fn can_remove_slot(&self) -> bool {
        self.time_slots.len() > 1
    }

    /// Remove the slot at `index`. The last remaining slot stays.
    pub fn remove_slot(&mut self, index: usize) -> bool {
        if !self.can_remove_slot() || index >= self.time_slots.len() {
            return false;
        }
        self.time_slots.remove(index);
        true
    }

    /// Check every field and build the request payload.
    pub fn validate(&self) -> Result<NewWorkshop, WorkshopErrors> {
        let mut errors = WorkshopErrors::default();

        if self.title.chars().count() < 3 {
            errors.title = Some("Title is required".to_string());
        }
        if self.description.chars().count() < 10 {
            errors.description = Some("Description is required".to_string());
        }

        let date = if self.date.trim().is_empty() {
            errors.date = Some("Date is required".to_string());
            None
        } else {
            let parsed = parse_date(self.date.trim());
            if parsed.is_none() {
                errors.date = Some("Invalid date".to_string());
            }
            parsed
        };

        let max_capacity = match self.max_capacity.trim().parse::<u32>() {
            Ok(n) if n > 0 => Some(n),
            _ => {
                errors.max_capacity = Some("Must be a positive number".to_string());
                None
            }
        };

        if self.time_slots.is_empty() {
            errors.time_slots = Some("At least one time slot is required".to_string());
        }
        errors.slots = self
            .time_slots
            .iter()
            .map(|slot| SlotErrors {
                start_time: slot
                    .start_time
                    .is_empty()
                    .then(|| "Start time is required".to_string()),
                end_time: slot
                    .end_time
                    .is_empty()
                    .then(|| "End time is required".to_string()),
            })
            .collect();

        match (date, max_capacity) {
            (Some(date), Some(max_capacity)) if errors.is_empty() => Ok(NewWorkshop {
                title: self.title.clone(),
                description: self.description.clone(),
                date,
                max_capacity,
                time_slots: self
                    .time_slots
                    .iter()
                    .map(|s| NewTimeSlot {
                        start_time: s.start_time.clone(),
                        end_time: s.end_time.clone(),
                    })
                    .collect(),
            }),
            _ => Err(errors),
        }
    }
}

/// `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp.
fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
