//! Data models mirrored from the backend's JSON contract.

pub mod auth;
pub mod booking;
pub mod stats;
pub mod workshop;

pub use auth::{LoginRequest, LoginResponse};
pub use booking::{
    Booking, BookingStatus, BookingTimeSlot, BookingUser, BookingWorkshop, BookingsPage,
    PageQuery, Pagination,
};
pub use stats::{DashboardStats, PopularWorkshop};
pub use workshop::{NewTimeSlot, NewWorkshop, TimeSlot, TimeSlotUpdate, Workshop, WorkshopStatus};
