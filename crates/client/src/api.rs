//! # Parking API Client
//!
//! The REST boundary of the dashboard. `ParkingApi` names the backend
//! operations the session consumes; `HttpParkingApi` implements them over
//! reqwest with bearer-token authentication. Non-success responses are mapped
//! onto the domain error taxonomy so callers never see transport types.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use parkview_core::errors::{ParkError, ParkResult};
use parkview_core::models::reservation::{CreateReservationRequest, Reservation};
use parkview_core::models::spot::ApiSpot;

use crate::config::ClientConfig;

/// Boundary operations consumed from the parking backend.
#[async_trait]
pub trait ParkingApi {
    /// All parking spots with their current backend-reported state.
    async fn list_spots(&self) -> ParkResult<Vec<ApiSpot>>;

    /// Past and future reservations for one spot, sorted by start time.
    async fn spot_history(&self, spot_id: i64) -> ParkResult<Vec<Reservation>>;

    /// Reservations for several spots in one call, keyed by spot id.
    async fn multi_spot_reservations(
        &self,
        spot_ids: Vec<i64>,
    ) -> ParkResult<HashMap<i64, Vec<Reservation>>>;

    /// Reservations belonging to the signed-in user.
    async fn my_reservations(&self) -> ParkResult<Vec<Reservation>>;

    /// Create one reservation. There is no batch endpoint.
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> ParkResult<Reservation>;

    /// Self-service cancellation of an owned reservation.
    async fn cancel_reservation(&self, id: i64) -> ParkResult<()>;

    /// Admin cancellation regardless of ownership.
    async fn force_cancel_reservation(&self, id: i64) -> ParkResult<()>;
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// reqwest-backed implementation of [`ParkingApi`].
#[derive(Clone)]
pub struct HttpParkingApi {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpParkingApi {
    /// Build the HTTP client and, when credentials are configured, perform
    /// the login handshake. The bearer token lives in process memory only.
    pub async fn connect(config: &ClientConfig) -> ParkResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .build()
            .map_err(to_api_error)?;

        let mut api = Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: None,
        };

        if let (Some(email), Some(password)) = (&config.email, &config.password) {
            api.token = Some(api.login(email, password).await?);
        }
        Ok(api)
    }

    async fn login(&self, email: &str, password: &str) -> ParkResult<String> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(to_api_error)?;
        let response = check_status(response).await?;
        let login: LoginResponse = response.json().await.map_err(to_api_error)?;
        debug!("Authenticated against {}", self.base_url);
        Ok(login.access_token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ParkResult<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(to_api_error)?;
        let response = check_status(response).await?;
        response.json().await.map_err(to_api_error)
    }
}

#[async_trait]
impl ParkingApi for HttpParkingApi {
    async fn list_spots(&self) -> ParkResult<Vec<ApiSpot>> {
        self.get_json("/parking").await
    }

    async fn spot_history(&self, spot_id: i64) -> ParkResult<Vec<Reservation>> {
        self.get_json(&format!("/reservations/spot-history/{spot_id}"))
            .await
    }

    async fn multi_spot_reservations(
        &self,
        spot_ids: Vec<i64>,
    ) -> ParkResult<HashMap<i64, Vec<Reservation>>> {
        let joined = spot_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.get_json(&format!("/reservations/multi-spot?spotIds={joined}"))
            .await
    }

    async fn my_reservations(&self) -> ParkResult<Vec<Reservation>> {
        self.get_json("/reservations/mine").await
    }

    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> ParkResult<Reservation> {
        let response = self
            .request(Method::POST, "/reservations")
            .json(&request)
            .send()
            .await
            .map_err(to_api_error)?;
        let response = check_status(response).await?;
        response.json().await.map_err(to_api_error)
    }

    async fn cancel_reservation(&self, id: i64) -> ParkResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/reservations/{id}"))
            .send()
            .await
            .map_err(to_api_error)?;
        check_status(response).await?;
        Ok(())
    }

    async fn force_cancel_reservation(&self, id: i64) -> ParkResult<()> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/reservations/admin/force-cancel/{id}"),
            )
            .send()
            .await
            .map_err(to_api_error)?;
        check_status(response).await?;
        Ok(())
    }
}

fn to_api_error(err: reqwest::Error) -> ParkError {
    ParkError::Api(eyre::Report::new(err))
}

/// Map non-success responses onto the domain error taxonomy.
async fn check_status(response: reqwest::Response) -> ParkResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::NOT_FOUND => ParkError::NotFound(body),
        StatusCode::UNAUTHORIZED => ParkError::Authentication(body),
        StatusCode::FORBIDDEN => ParkError::Authorization(body),
        s if s.is_client_error() => ParkError::Validation(body),
        _ => ParkError::Api(eyre::eyre!("{status}: {body}")),
    })
}
