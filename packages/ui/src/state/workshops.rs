use api::Workshop;

use super::fetch::Loadable;
use super::pagination::PaginationModel;

pub const WORKSHOPS_FETCH_FAILED: &str = "Failed to fetch workshops.";
pub const WORKSHOP_CREATED: &str = "Workshop created successfully!";
pub const WORKSHOP_CREATE_FAILED: &str = "Failed to create workshop.";
/// How long the success message stays up before the dialog closes.
pub const CREATED_CLOSE_DELAY_MS: u64 = 1500;

/// The workshop table, paged on the client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkshopsState {
    pub workshops: Loadable<Vec<Workshop>>,
    pub pagination: PaginationModel,
}

impl WorkshopsState {
    pub fn all(&self) -> &[Workshop] {
        self.workshops.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn visible(&self) -> &[Workshop] {
        self.pagination.slice(self.all())
    }

    pub fn total(&self) -> u64 {
        self.all().len() as u64
    }

    /// A newly created workshop goes to the top of the list.
    pub fn prepend(&mut self, workshop: Workshop) {
        if let Some(list) = self.workshops.data_mut() {
            list.insert(0, workshop);
        }
    }
}

/// The create-workshop dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateDialog {
    pub open: bool,
    pub submitting: bool,
    pub success: Option<String>,
    pub error: Option<String>,
    /// Bumped on every open.
    opened: u64,
}

impl CreateDialog {
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            opened: self.opened.wrapping_add(1),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        if !self.submitting {
            *self = Self {
                opened: self.opened,
                ..Self::default()
            };
        }
    }

    /// `false` while a submission is already running.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        self.success = None;
        true
    }

    /// Returns the handle [`close_after_success`](Self::close_after_success)
    /// needs once the success message has been shown.
    pub fn succeed(&mut self) -> u64 {
        self.submitting = false;
        self.success = Some(WORKSHOP_CREATED.to_string());
        self.opened
    }

    /// Close only if the dialog that succeeded is still open and showing its
    /// success message.
    pub fn close_after_success(&mut self, opened: u64) {
        if self.open && self.opened == opened && self.success.is_some() {
            self.close();
        }
    }

    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}
