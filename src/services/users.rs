use crate::models::UserRecord;
use crate::services::error::{UpstreamError, UpstreamService};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use uuid::Uuid;

/// Client for the Users service
///
/// The composite service only ever reads from Users: a single lookup to
/// confirm a user exists before anything is done on its behalf.
pub struct UsersClient {
    base_url: String,
    client: Client,
}

impl UsersClient {
    /// Create a new Users client with a bounded request timeout
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch a user by id from `GET {base}/users/{id}`.
    ///
    /// Returns `Ok(None)` when the Users service answers 404, so callers can
    /// distinguish "no such user" from an upstream failure.
    pub async fn fetch_user(&self, user_id: Uuid) -> Result<Option<UserRecord>, UpstreamError> {
        let url = format!("{}/users/{}", self.base_url.trim_end_matches('/'), user_id);

        tracing::debug!("Fetching user from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(UpstreamService::Users, e))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status.is_client_error() || status.is_server_error() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Users service returned {} for {}: {}", status, user_id, body);
            return Err(UpstreamError::Status {
                service: UpstreamService::Users,
                status: status.as_u16(),
                body,
            });
        }

        let user = response
            .json::<UserRecord>()
            .await
            .map_err(|e| UpstreamError::decode(UpstreamService::Users, e))?;

        Ok(Some(user))
    }
}
