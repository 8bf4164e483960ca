//! # View state
//!
//! Every screen of the console follows the same cycle: fetch on mount, show a
//! spinner while the request is in flight, show a static error on failure,
//! keep the result as local state on success. Mutations call the backend
//! first and patch local state only once it answered with success; a failed
//! mutation leaves the state as it was.
//!
//! The types here hold that state and the rules for changing it, without any
//! Dioxus dependency, so they can be driven directly from tests. View
//! components keep them in signals and call into them from event handlers.
//!
//! | Module | State it owns |
//! |--------|---------------|
//! | [`fetch`] | [`Loadable`] and the [`RequestTracker`] that drops out-of-order responses |
//! | [`pagination`] | Page/size model shared by the bookings (server) and workshops (client) tables |
//! | [`confirmation`] | The generic confirm dialog contract |
//! | [`login`] | Login outcome, including the admin-role check |
//! | [`workshops`] | Workshop list and the create dialog |
//! | [`workshop_form`] | Workshop creation draft and its validation |
//! | [`workshop_detail`] | Archive/restore/delete-slot actions and how they patch the detail |
//! | [`time_slot_form`] | Add/edit time slot dialog |
//! | [`bookings`] | Bookings page and status changes |

pub mod bookings;
pub mod confirmation;
pub mod fetch;
pub mod login;
pub mod pagination;
pub mod time_slot_form;
pub mod workshop_detail;
pub mod workshop_form;
pub mod workshops;

#[cfg(test)]
pub(crate) mod fake;

pub use confirmation::{ConfirmColor, ConfirmRequest, Confirmation};
pub use fetch::{Loadable, RequestTracker, Ticket};
pub use pagination::{PaginationModel, PAGE_SIZES};
