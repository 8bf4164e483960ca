use api::{AdminBackend, ApiError, NewTimeSlot, TimeSlot, TimeSlotUpdate};

pub const SLOT_SAVE_FAILED: &str = "An error occurred.";

/// The add/edit time slot dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSlotForm {
    editing: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub available_spots: String,
}

/// A validated form, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotSubmission {
    Create(NewTimeSlot),
    Update {
        slot_id: String,
        update: TimeSlotUpdate,
    },
}

impl TimeSlotForm {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(slot: &TimeSlot) -> Self {
        Self {
            editing: Some(slot.id.clone()),
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            available_spots: slot.available_spots.to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Time Slot"
        } else {
            "Add New Time Slot"
        }
    }

    pub fn validate(&self) -> Result<SlotSubmission, String> {
        if self.start_time.trim().is_empty() {
            return Err("Start time is required".to_string());
        }
        if self.end_time.trim().is_empty() {
            return Err("End time is required".to_string());
        }
        let Some(slot_id) = &self.editing else {
            return Ok(SlotSubmission::Create(NewTimeSlot {
                start_time: self.start_time.clone(),
                end_time: self.end_time.clone(),
            }));
        };
        let available_spots = self
            .available_spots
            .trim()
            .parse::<u32>()
            .map_err(|_| "Available spots must be a non-negative number".to_string())?;
        Ok(SlotSubmission::Update {
            slot_id: slot_id.clone(),
            update: TimeSlotUpdate {
                start_time: self.start_time.clone(),
                end_time: self.end_time.clone(),
                available_spots,
            },
        })
    }
}

impl SlotSubmission {
    pub async fn send<B: AdminBackend>(
        &self,
        backend: &B,
        workshop_id: &str,
    ) -> Result<TimeSlot, ApiError> {
        match self {
            SlotSubmission::Create(slot) => backend.add_time_slot(workshop_id, slot).await,
            SlotSubmission::Update { slot_id, update } => {
                backend.update_time_slot(slot_id, update).await
            }
        }
    }
}
