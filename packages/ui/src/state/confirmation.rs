//! Confirm-before-acting dialog state.
//!
//! A [`Confirmation`] holds at most one pending action together with the
//! text the dialog shows for it. While the confirmed action is running the
//! dialog is "submitting": it cannot be dismissed and cannot be confirmed a
//! second time. Once the action has finished, success or failure, the dialog
//! closes.

/// Color of the confirm button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmColor {
    #[default]
    Red,
    Green,
    Teal,
}

impl ConfirmColor {
    pub fn button_class(self) -> &'static str {
        match self {
            ConfirmColor::Red => "bg-red-600 hover:bg-red-700",
            ConfirmColor::Green => "bg-green-600 hover:bg-green-700",
            ConfirmColor::Teal => "bg-teal-600 hover:bg-teal-700",
        }
    }
}

/// What the dialog says.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub confirm_color: ConfirmColor,
}

impl ConfirmRequest {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            confirm_text: "Confirm".to_string(),
            confirm_color: ConfirmColor::default(),
        }
    }

    pub fn confirm_with(mut self, text: &str, color: ConfirmColor) -> Self {
        self.confirm_text = text.to_string();
        self.confirm_color = color;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation<A> {
    pending: Option<(ConfirmRequest, A)>,
    submitting: bool,
}

impl<A> Default for Confirmation<A> {
    fn default() -> Self {
        Self {
            pending: None,
            submitting: false,
        }
    }
}

impl<A: Clone> Confirmation<A> {
    /// Show the dialog for `action`. Ignored while another action runs.
    pub fn open(&mut self, request: ConfirmRequest, action: A) {
        if self.submitting {
            return;
        }
        self.pending = Some((request, action));
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn request(&self) -> Option<&ConfirmRequest> {
        self.pending.as_ref().map(|(request, _)| request)
    }

    /// The user confirmed: hand out the action to run and lock the dialog.
    /// `None` if nothing is pending or the action already runs.
    pub fn begin(&mut self) -> Option<A> {
        if self.submitting {
            return None;
        }
        let (_, action) = self.pending.as_ref()?;
        let action = action.clone();
        self.submitting = true;
        Some(action)
    }

    /// The action completed; close regardless of its outcome.
    pub fn finish(&mut self) {
        self.pending = None;
        self.submitting = false;
    }

    /// Cancel, backdrop click or Escape. No effect while submitting.
    pub fn dismiss(&mut self) {
        if !self.submitting {
            self.pending = None;
        }
    }
}
