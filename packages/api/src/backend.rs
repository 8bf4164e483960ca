use std::future::Future;

use crate::error::ApiError;
use crate::models::{
    Booking, BookingStatus, BookingsPage, DashboardStats, LoginRequest, LoginResponse,
    NewTimeSlot, NewWorkshop, PageQuery, TimeSlot, TimeSlotUpdate, Workshop,
};

/// One method per backend operation the admin console uses.
///
/// [`crate::ApiClient`] implements this over HTTP; view logic is written
/// against the trait so it can run against an in-memory backend in tests.
pub trait AdminBackend {
    /// `POST /auth/login`. Never sends a bearer token. Does not check the role.
    fn login(
        &self,
        credentials: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;

    /// `GET /stats`
    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, ApiError>>;

    /// `GET /workshops/admin`, archived workshops included.
    fn admin_workshops(&self) -> impl Future<Output = Result<Vec<Workshop>, ApiError>>;

    /// `POST /workshops`
    fn create_workshop(
        &self,
        workshop: &NewWorkshop,
    ) -> impl Future<Output = Result<Workshop, ApiError>>;

    /// `GET /workshops/{id}` with time slots and bookings.
    fn workshop_by_id(&self, id: &str) -> impl Future<Output = Result<Workshop, ApiError>>;

    /// `DELETE /workshops/{id}`: sets `deletedAt`.
    fn soft_delete_workshop(&self, id: &str)
        -> impl Future<Output = Result<Workshop, ApiError>>;

    /// `PUT /workshops/{id}/restore`: clears `deletedAt`.
    fn restore_workshop(&self, id: &str) -> impl Future<Output = Result<Workshop, ApiError>>;

    /// `POST /workshops/{workshop_id}/timeslots`
    fn add_time_slot(
        &self,
        workshop_id: &str,
        slot: &NewTimeSlot,
    ) -> impl Future<Output = Result<TimeSlot, ApiError>>;

    /// `PUT /timeslots/{slot_id}`
    fn update_time_slot(
        &self,
        slot_id: &str,
        slot: &TimeSlotUpdate,
    ) -> impl Future<Output = Result<TimeSlot, ApiError>>;

    /// `DELETE /timeslots/{slot_id}`. Refused while active bookings exist.
    fn delete_time_slot(&self, slot_id: &str) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /bookings?page=&limit=`
    fn all_bookings(&self, query: PageQuery)
        -> impl Future<Output = Result<BookingsPage, ApiError>>;

    /// `PUT /bookings/{id}`. Returns the updated booking when the backend
    /// echoes one back.
    fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> impl Future<Output = Result<Option<Booking>, ApiError>>;
}
