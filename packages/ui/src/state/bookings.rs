use api::{Booking, BookingStatus, BookingsPage};

use super::fetch::{Loadable, Ticket};
use super::pagination::PaginationModel;

pub const BOOKINGS_FETCH_FAILED: &str = "Failed to fetch bookings.";
pub const STATUS_UPDATE_FAILED: &str = "Failed to update booking status.";

/// One server page of bookings plus the total row count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingsState {
    pub page: Loadable<Vec<Booking>>,
    pub pagination: PaginationModel,
    /// Kept across fetches so the pager does not jump while loading.
    pub total: u64,
    /// Booking whose actions menu is open.
    pub menu: Option<String>,
}

impl BookingsState {
    pub fn begin(&mut self) -> Ticket {
        self.menu = None;
        self.page.begin()
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<BookingsPage, String>) -> bool {
        let total = result.as_ref().ok().map(|page| page.pagination.total);
        let applied = self.page.resolve(ticket, result.map(|page| page.data));
        if let (true, Some(total)) = (applied, total) {
            self.total = total;
        }
        applied
    }

    pub fn rows(&self) -> &[Booking] {
        self.page.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn toggle_menu(&mut self, booking_id: &str) {
        self.menu = match self.menu.as_deref() {
            Some(open) if open == booking_id => None,
            _ => Some(booking_id.to_string()),
        };
    }

    /// Patch a confirmed status change into the visible page. Uses the
    /// backend's echoed status when it sent the booking back.
    pub fn apply_status(
        &mut self,
        booking_id: &str,
        requested: BookingStatus,
        echoed: Option<Booking>,
    ) -> bool {
        self.menu = None;
        let status = echoed
            .filter(|b| b.id == booking_id)
            .map(|b| b.status)
            .unwrap_or(requested);
        let Some(rows) = self.page.data_mut() else {
            return false;
        };
        match rows.iter_mut().find(|b| b.id == booking_id) {
            Some(row) => {
                row.status = status;
                true
            }
            None => false,
        }
    }
}
