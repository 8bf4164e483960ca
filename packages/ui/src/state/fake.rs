//! In-memory [`AdminBackend`] for state tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use api::{
    AdminBackend, ApiError, Booking, BookingStatus, BookingsPage, DashboardStats, LoginRequest,
    LoginResponse, NewTimeSlot, NewWorkshop, PageQuery, Pagination, TimeSlot, TimeSlotUpdate,
    Workshop,
};
use chrono::{TimeZone, Utc};

#[derive(Default)]
pub struct FakeBackend {
    pub role: String,
    pub stats: DashboardStats,
    pub workshops: RefCell<Vec<Workshop>>,
    pub bookings: RefCell<Vec<Booking>>,
    failures: RefCell<HashMap<&'static str, (u16, Option<String>)>>,
    calls: RefCell<Vec<String>>,
    next_id: Cell<u32>,
}

impl FakeBackend {
    pub fn with_role(role: &str) -> Self {
        Self {
            role: role.to_string(),
            ..Self::default()
        }
    }

    /// Make every later call to `op` fail with `status`.
    pub fn fail(&self, op: &'static str, status: u16, message: Option<&str>) {
        self.failures
            .borrow_mut()
            .insert(op, (status, message.map(str::to_string)));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &'static str, detail: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("{op} {detail}").trim_end().to_string());
        match self.failures.borrow().get(op) {
            Some((status, message)) => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{prefix}-{id}")
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            message: Some("Not found".to_string()),
        }
    }
}

pub fn workshop(id: &str, title: &str) -> Workshop {
    Workshop {
        id: id.to_string(),
        title: title.to_string(),
        description: "Hands-on introduction".to_string(),
        date: Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap(),
        max_capacity: 10,
        time_slots: vec![TimeSlot {
            id: format!("{id}-slot"),
            start_time: "10:00 AM".to_string(),
            end_time: "12:00 PM".to_string(),
            available_spots: 10,
        }],
        bookings: Vec::new(),
        deleted_at: None,
    }
}

pub fn booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        status,
        user: None,
        workshop: None,
        time_slot: None,
    }
}

impl AdminBackend for FakeBackend {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record("login", credentials.email.clone())?;
        Ok(LoginResponse {
            token: "fake-token".to_string(),
            role: self.role.clone(),
            user_id: Some("123".to_string()),
        })
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record("dashboard_stats", String::new())?;
        Ok(self.stats.clone())
    }

    async fn admin_workshops(&self) -> Result<Vec<Workshop>, ApiError> {
        self.record("admin_workshops", String::new())?;
        Ok(self.workshops.borrow().clone())
    }

    async fn create_workshop(&self, new: &NewWorkshop) -> Result<Workshop, ApiError> {
        self.record("create_workshop", new.title.clone())?;
        let created = Workshop {
            id: self.next_id("workshop"),
            title: new.title.clone(),
            description: new.description.clone(),
            date: new.date,
            max_capacity: new.max_capacity,
            time_slots: new
                .time_slots
                .iter()
                .map(|slot| TimeSlot {
                    id: self.next_id("slot"),
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                    available_spots: new.max_capacity,
                })
                .collect(),
            bookings: Vec::new(),
            deleted_at: None,
        };
        self.workshops.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn workshop_by_id(&self, id: &str) -> Result<Workshop, ApiError> {
        self.record("workshop_by_id", id.to_string())?;
        self.workshops
            .borrow()
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn soft_delete_workshop(&self, id: &str) -> Result<Workshop, ApiError> {
        self.record("soft_delete_workshop", id.to_string())?;
        let mut workshops = self.workshops.borrow_mut();
        let workshop = workshops
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(Self::not_found)?;
        workshop.deleted_at = Some(Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap());
        Ok(workshop.clone())
    }

    async fn restore_workshop(&self, id: &str) -> Result<Workshop, ApiError> {
        self.record("restore_workshop", id.to_string())?;
        let mut workshops = self.workshops.borrow_mut();
        let workshop = workshops
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(Self::not_found)?;
        workshop.deleted_at = None;
        Ok(workshop.clone())
    }

    async fn add_time_slot(
        &self,
        workshop_id: &str,
        slot: &NewTimeSlot,
    ) -> Result<TimeSlot, ApiError> {
        self.record("add_time_slot", workshop_id.to_string())?;
        let mut workshops = self.workshops.borrow_mut();
        let workshop = workshops
            .iter_mut()
            .find(|w| w.id == workshop_id)
            .ok_or_else(Self::not_found)?;
        let created = TimeSlot {
            id: self.next_id("slot"),
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            available_spots: workshop.max_capacity,
        };
        workshop.time_slots.push(created.clone());
        Ok(created)
    }

    async fn update_time_slot(
        &self,
        slot_id: &str,
        update: &TimeSlotUpdate,
    ) -> Result<TimeSlot, ApiError> {
        self.record("update_time_slot", slot_id.to_string())?;
        let mut workshops = self.workshops.borrow_mut();
        let slot = workshops
            .iter_mut()
            .flat_map(|w| w.time_slots.iter_mut())
            .find(|s| s.id == slot_id)
            .ok_or_else(Self::not_found)?;
        slot.start_time = update.start_time.clone();
        slot.end_time = update.end_time.clone();
        slot.available_spots = update.available_spots;
        Ok(slot.clone())
    }

    async fn delete_time_slot(&self, slot_id: &str) -> Result<(), ApiError> {
        self.record("delete_time_slot", slot_id.to_string())?;
        for workshop in self.workshops.borrow_mut().iter_mut() {
            workshop.time_slots.retain(|s| s.id != slot_id);
        }
        Ok(())
    }

    async fn all_bookings(&self, query: PageQuery) -> Result<BookingsPage, ApiError> {
        self.record(
            "all_bookings",
            format!("page={} limit={}", query.page, query.limit),
        )?;
        let bookings = self.bookings.borrow();
        let start = (query.page.saturating_sub(1) * query.limit) as usize;
        Ok(BookingsPage {
            data: bookings
                .iter()
                .skip(start)
                .take(query.limit as usize)
                .cloned()
                .collect(),
            pagination: Pagination {
                total: bookings.len() as u64,
            },
        })
    }

    async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Option<Booking>, ApiError> {
        self.record("update_booking_status", format!("{booking_id} {status}"))?;
        let mut bookings = self.bookings.borrow_mut();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(Self::not_found)?;
        booking.status = status;
        Ok(Some(booking.clone()))
    }
}
