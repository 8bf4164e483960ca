//! # API crate: gateway to the workshop backend
//!
//! Everything the admin console knows about the backend lives here: the JSON
//! models, where the backend is ([`ApiConfig`]), how its failures look
//! ([`ApiError`]) and one call per endpoint ([`AdminBackend`]).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`AdminBackend`] trait the UI is written against |
//! | [`client`] | [`ApiClient`], the `reqwest` implementation with bearer auth |
//! | [`config`] | Base URL resolution from the build and process environment |
//! | [`error`] | [`ApiError`] and `{ message }` extraction |
//! | [`models`] | Workshops, time slots, bookings, stats, login payloads |
//!
//! ## Endpoints
//!
//! | Method | Path | Trait method |
//! |--------|------|--------------|
//! | POST | `/auth/login` | `login` |
//! | GET | `/stats` | `dashboard_stats` |
//! | GET | `/workshops/admin` | `admin_workshops` |
//! | POST | `/workshops` | `create_workshop` |
//! | GET | `/workshops/{id}` | `workshop_by_id` |
//! | DELETE | `/workshops/{id}` | `soft_delete_workshop` |
//! | PUT | `/workshops/{id}/restore` | `restore_workshop` |
//! | POST | `/workshops/{id}/timeslots` | `add_time_slot` |
//! | PUT | `/timeslots/{id}` | `update_time_slot` |
//! | DELETE | `/timeslots/{id}` | `delete_time_slot` |
//! | GET | `/bookings?page=&limit=` | `all_bookings` |
//! | PUT | `/bookings/{id}` | `update_booking_status` |
//!
//! The backend owns every rule. This crate validates nothing and retries
//! nothing; errors are handed back unmodified.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use backend::AdminBackend;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::*;
