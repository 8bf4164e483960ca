//! Workshop detail: destructive actions and how their results patch the
//! loaded workshop.
//!
//! Archive, restore and delete-slot all go through a [`Confirmation`]
//! dialog. Once confirmed, [`DetailAction::perform`] calls the backend and
//! returns an [`ActionOutcome`]; only that outcome is applied to the local
//! copy, so a failed call never changes what the page shows.
//!
//! [`Confirmation`]: super::Confirmation

use api::{AdminBackend, ApiError, TimeSlot, Workshop};
use chrono::{DateTime, Utc};

use super::confirmation::{ConfirmColor, ConfirmRequest};

pub const DETAIL_FETCH_FAILED: &str = "Failed to fetch workshop details.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailAction {
    Archive,
    Restore,
    DeleteSlot(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    ArchiveState(Option<DateTime<Utc>>),
    SlotRemoved(String),
}

impl DetailAction {
    pub fn request(&self) -> ConfirmRequest {
        match self {
            DetailAction::Archive => ConfirmRequest::new(
                "Archive Workshop?",
                "This will hide the workshop from public view but preserve its data. You can restore it later.",
            )
            .confirm_with("Archive", ConfirmColor::Red),
            DetailAction::Restore => ConfirmRequest::new(
                "Restore Workshop?",
                "This will make the workshop visible and bookable to the public again.",
            )
            .confirm_with("Restore", ConfirmColor::Green),
            DetailAction::DeleteSlot(_) => ConfirmRequest::new(
                "Delete Time Slot?",
                "This action cannot be undone. You can only delete slots with no active bookings.",
            )
            .confirm_with("Delete", ConfirmColor::Red),
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            DetailAction::Archive => "Failed to archive workshop.",
            DetailAction::Restore => "Failed to restore workshop.",
            DetailAction::DeleteSlot(_) => "Failed to delete time slot.",
        }
    }

    pub async fn perform<B: AdminBackend>(
        &self,
        backend: &B,
        workshop_id: &str,
    ) -> Result<ActionOutcome, ApiError> {
        tracing::debug!(workshop = workshop_id, action = ?self, "running confirmed action");
        match self {
            DetailAction::Archive => {
                let updated = backend.soft_delete_workshop(workshop_id).await?;
                // Backend may omit the timestamp.
                Ok(ActionOutcome::ArchiveState(
                    updated.deleted_at.or_else(|| Some(Utc::now())),
                ))
            }
            DetailAction::Restore => {
                backend.restore_workshop(workshop_id).await?;
                Ok(ActionOutcome::ArchiveState(None))
            }
            DetailAction::DeleteSlot(slot_id) => {
                backend.delete_time_slot(slot_id).await?;
                Ok(ActionOutcome::SlotRemoved(slot_id.clone()))
            }
        }
    }
}

impl ActionOutcome {
    pub fn apply(self, workshop: &mut Workshop) {
        match self {
            ActionOutcome::ArchiveState(deleted_at) => workshop.deleted_at = deleted_at,
            ActionOutcome::SlotRemoved(slot_id) => {
                workshop.time_slots.retain(|slot| slot.id != slot_id)
            }
        }
    }
}

/// Patch a saved slot into the workshop: replace by id, else append.
pub fn upsert_slot(workshop: &mut Workshop, slot: TimeSlot) {
    match workshop.time_slots.iter_mut().find(|s| s.id == slot.id) {
        Some(existing) => *existing = slot,
        None => workshop.time_slots.push(slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fake::{workshop, FakeBackend};
    use crate::state::Confirmation;
    use api::WorkshopStatus;

    fn backend_with(w: &Workshop) -> FakeBackend {
        let backend = FakeBackend::default();
        backend.workshops.borrow_mut().push(w.clone());
        backend
    }

    #[test]
    fn test_dialog_text() {
        let archive = DetailAction::Archive.request();
        assert_eq!(archive.title, "Archive Workshop?");
        assert_eq!(archive.confirm_text, "Archive");
        assert_eq!(archive.confirm_color, ConfirmColor::Red);

        let restore = DetailAction::Restore.request();
        assert_eq!(restore.confirm_text, "Restore");
        assert_eq!(restore.confirm_color, ConfirmColor::Green);

        let delete = DetailAction::DeleteSlot("s1".into()).request();
        assert_eq!(delete.title, "Delete Time Slot?");
        assert_eq!(delete.confirm_text, "Delete");
    }

    #[tokio::test]
    async fn test_archive_then_restore_is_identity() {
        let original = workshop("w1", "Pottery");
        let backend = backend_with(&original);
        let mut local = original.clone();

        let outcome = DetailAction::Archive.perform(&backend, "w1").await.unwrap();
        outcome.apply(&mut local);
        assert!(local.is_archived());
        assert_eq!(local.archive_status(), WorkshopStatus::Archived);

        let outcome = DetailAction::Restore.perform(&backend, "w1").await.unwrap();
        outcome.apply(&mut local);
        assert_eq!(local, original);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_slot() {
        let original = workshop("w1", "Pottery");
        let backend = backend_with(&original);
        let mut local = original.clone();
        let mut dialog = Confirmation::default();

        let action = DetailAction::DeleteSlot("w1-slot".into());
        dialog.open(action.request(), action);
        let action = dialog.begin().unwrap();
        let result = action.perform(&backend, "w1").await;
        dialog.finish();

        result.unwrap().apply(&mut local);
        assert!(local.time_slots.is_empty());
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn test_refused_delete_leaves_state() {
        let original = workshop("w1", "Pottery");
        let backend = backend_with(&original);
        backend.fail(
            "delete_time_slot",
            400,
            Some("Cannot delete a time slot with active bookings."),
        );

        let action = DetailAction::DeleteSlot("w1-slot".into());
        let err = action.perform(&backend, "w1").await.unwrap_err();
        assert_eq!(
            err.message_or(action.failure_message()),
            "Cannot delete a time slot with active bookings."
        );
        assert_eq!(backend.workshops.borrow()[0], original);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_generic_message() {
        let backend = backend_with(&workshop("w1", "Pottery"));
        backend.fail("soft_delete_workshop", 500, None);

        let err = DetailAction::Archive.perform(&backend, "w1").await.unwrap_err();
        assert_eq!(err.message_or(DetailAction::Archive.failure_message()), "Failed to archive workshop.");
    }

    #[test]
    fn test_upsert_slot() {
        let mut w = workshop("w1", "Pottery");
        let mut edited = w.time_slots[0].clone();
        edited.available_spots = 3;
        upsert_slot(&mut w, edited.clone());
        assert_eq!(w.time_slots, vec![edited.clone()]);

        let added = TimeSlot {
            id: "new".into(),
            ..edited
        };
        upsert_slot(&mut w, added);
        assert_eq!(w.time_slots.len(), 2);
    }
}
