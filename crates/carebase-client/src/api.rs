//! RPC stubs for the remote carebase backend.
//!
//! The backend is an opaque collaborator: every call is a JSON request
//! to `<base_url>/<path>` returning either the payload, a found/not-found
//! variant wrapper for lookups, or a non-2xx status surfaced as
//! [`ClientError::Api`]. No retry policy; a failed call is terminal for
//! that user action.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use carebase_core::models::{Appointment, Doctor, InventoryItem, Patient};
use carebase_core::session::{Role, Session};

/// Client-side RPC errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Variant wrapper the backend uses for single-record lookups; absence is
/// an empty state, not an error.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Lookup<T> {
    Found { record: T },
    NotFound,
}

impl<T> Lookup<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found { record } => Some(record),
            Lookup::NotFound => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration payload for credential signup.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login/register response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: Role,
    pub principal_id: String,
}

impl AuthResponse {
    /// Turn the auth result into the session object written at login.
    pub fn into_session(self, endpoint: impl Into<String>) -> Session {
        Session::new(endpoint, self.role, self.principal_id)
    }
}

/// HTTP client for one backend endpoint.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!("GET {}", path);
        let resp = self.http.get(self.url(path)).send().await?;
        Self::decode(path, resp).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!("POST {}", path);
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(path, resp).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            warn!("{} failed with {}: {}", path, status, text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    pub async fn list_patients(&self) -> ClientResult<Vec<Patient>> {
        self.get_json("patients").await
    }

    pub async fn add_patient(&self, patient: &Patient) -> ClientResult<Patient> {
        self.post_json("patients/add", patient).await
    }

    pub async fn update_patient(&self, patient: &Patient) -> ClientResult<Patient> {
        self.post_json("patients/update", patient).await
    }

    /// Look up a single patient; `Ok(None)` when the backend reports
    /// not-found.
    pub async fn get_patient(&self, id: &str) -> ClientResult<Option<Patient>> {
        let lookup: Lookup<Patient> = self.get_json(&format!("patients/{id}")).await?;
        Ok(lookup.into_option())
    }

    // =========================================================================
    // Doctor Operations
    // =========================================================================

    pub async fn list_doctors(&self) -> ClientResult<Vec<Doctor>> {
        self.get_json("doctors").await
    }

    pub async fn add_doctor(&self, doctor: &Doctor) -> ClientResult<Doctor> {
        self.post_json("doctors/add", doctor).await
    }

    pub async fn update_doctor(&self, doctor: &Doctor) -> ClientResult<Doctor> {
        self.post_json("doctors/update", doctor).await
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    pub async fn list_appointments(&self) -> ClientResult<Vec<Appointment>> {
        self.get_json("appointments").await
    }

    pub async fn add_appointment(&self, appointment: &Appointment) -> ClientResult<Appointment> {
        self.post_json("appointments/add", appointment).await
    }

    pub async fn update_appointment(&self, appointment: &Appointment) -> ClientResult<Appointment> {
        self.post_json("appointments/update", appointment).await
    }

    // =========================================================================
    // Inventory Operations
    // =========================================================================

    pub async fn list_inventory(&self) -> ClientResult<Vec<InventoryItem>> {
        self.get_json("inventory").await
    }

    pub async fn add_inventory_item(&self, item: &InventoryItem) -> ClientResult<InventoryItem> {
        self.post_json("inventory/add", item).await
    }

    pub async fn update_inventory_item(&self, item: &InventoryItem) -> ClientResult<InventoryItem> {
        self.post_json("inventory/update", item).await
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Credential login; on success the caller turns the response into a
    /// [`Session`] and persists it.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        self.post_json("auth/login", &LoginRequest { email, password })
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.post_json("auth/register", request).await
    }
}
