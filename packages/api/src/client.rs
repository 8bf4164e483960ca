//! HTTP implementation of [`AdminBackend`].

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::AdminBackend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Booking, BookingStatus, BookingsPage, DashboardStats, LoginRequest, LoginResponse,
    NewTimeSlot, NewWorkshop, PageQuery, TimeSlot, TimeSlotUpdate, Workshop,
};

/// REST client for the workshop backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
/// The UI keeps one and clones it with the session's current token for each
/// action.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

#[derive(Serialize)]
struct StatusBody {
    status: BookingStatus,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Attach a bearer token to every call except `login`.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "backend request");
        let builder = self.http.request(method, self.config.endpoint(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn anonymous_request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "backend request (anonymous)");
        self.http.request(method, self.config.endpoint(path))
    }

    /// Send and return the raw body of a success response.
    async fn send_raw(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), message = ?err.server_message(), "backend rejected request");
            return Err(err);
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_raw(builder).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to decode backend response: {}", e);
            ApiError::from(e)
        })
    }
}

impl AdminBackend for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self
            .anonymous_request(Method::POST, "/auth/login")
            .json(credentials);
        self.send(builder).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.send(self.request(Method::GET, "/stats")).await
    }

    async fn admin_workshops(&self) -> Result<Vec<Workshop>, ApiError> {
        self.send(self.request(Method::GET, "/workshops/admin")).await
    }

    async fn create_workshop(&self, workshop: &NewWorkshop) -> Result<Workshop, ApiError> {
        let builder = self.request(Method::POST, "/workshops").json(workshop);
        self.send(builder).await
    }

    async fn workshop_by_id(&self, id: &str) -> Result<Workshop, ApiError> {
        self.send(self.request(Method::GET, &format!("/workshops/{id}")))
            .await
    }

    async fn soft_delete_workshop(&self, id: &str) -> Result<Workshop, ApiError> {
        self.send(self.request(Method::DELETE, &format!("/workshops/{id}")))
            .await
    }

    async fn restore_workshop(&self, id: &str) -> Result<Workshop, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/workshops/{id}/restore"))
            .json(&serde_json::json!({}));
        self.send(builder).await
    }

    async fn add_time_slot(
        &self,
        workshop_id: &str,
        slot: &NewTimeSlot,
    ) -> Result<TimeSlot, ApiError> {
        let builder = self
            .request(Method::POST, &format!("/workshops/{workshop_id}/timeslots"))
            .json(slot);
        self.send(builder).await
    }

    async fn update_time_slot(
        &self,
        slot_id: &str,
        slot: &TimeSlotUpdate,
    ) -> Result<TimeSlot, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/timeslots/{slot_id}"))
            .json(slot);
        self.send(builder).await
    }

    async fn delete_time_slot(&self, slot_id: &str) -> Result<(), ApiError> {
        self.send_raw(self.request(Method::DELETE, &format!("/timeslots/{slot_id}")))
            .await
            .map(|_| ())
    }

    async fn all_bookings(&self, query: PageQuery) -> Result<BookingsPage, ApiError> {
        let builder = self.request(Method::GET, "/bookings").query(&query);
        self.send(builder).await
    }

    async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Option<Booking>, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/bookings/{booking_id}"))
            .json(&StatusBody { status });
        let body = self.send_raw(builder).await?;
        // Some deployments answer with `{ success: true }` instead of the booking
        Ok(serde_json::from_str(&body).ok())
    }
}
