//! Shared UI for the workshop admin console.
//!
//! Views are route-agnostic: they report navigation through callbacks and
//! the platform crate maps those onto its router.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`session`] | `SessionProvider`/`SessionScope`, session hooks, platform credential store |
//! | [`guard`] | Access rule for the protected routes |
//! | [`state`] | Dioxus-free view state and mutation rules |
//! | [`views`] | One component per screen plus the admin shell |

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod guard;
pub mod session;
pub mod state;
pub mod views;

mod platform;
pub use platform::alert;

pub use session::{
    sign_in, sign_out, use_backend, use_session, Backend, SessionProvider, SessionScope,
};

mod bookings_table;
pub use bookings_table::BookingsTable;

mod confirmation_dialog;
pub use confirmation_dialog::ConfirmationDialog;

mod pager;
pub use pager::Pager;

mod popular_chart;
pub use popular_chart::{ChartKind, PopularChart};

mod status_chip;
pub use status_chip::{BookingStatusChip, WorkshopStatusChip};

mod time_slot_dialog;
pub use time_slot_dialog::TimeSlotDialog;

mod workshop_form;
pub use workshop_form::WorkshopForm;
