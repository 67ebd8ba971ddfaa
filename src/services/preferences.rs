use crate::config::CreateEndpoint;
use crate::models::{PreferenceCreate, PreferenceRecord};
use crate::services::error::{UpstreamError, UpstreamService};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use uuid::Uuid;

/// Client for the Preferences service
///
/// Handles both calls the composite service makes:
/// - creating a preference record for a verified user
/// - reading the stored record for a user (at most one upstream)
pub struct PreferencesClient {
    base_url: String,
    create_endpoint: CreateEndpoint,
    client: Client,
}

impl PreferencesClient {
    /// Create a new Preferences client with a bounded request timeout
    pub fn new(base_url: String, create_endpoint: CreateEndpoint, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            create_endpoint,
            client,
        }
    }

    /// The dialect this client was configured with.
    pub fn create_endpoint(&self) -> CreateEndpoint {
        self.create_endpoint
    }

    fn create_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        match self.create_endpoint {
            CreateEndpoint::Preferences => format!("{}/preferences", base),
            CreateEndpoint::Root => format!("{}/", base),
        }
    }

    /// Create (or replace) a preference record upstream.
    ///
    /// Callers must have verified the user id first; this client does not
    /// re-check it. Both 200 and 201 count as success since deployments
    /// differ on which they return.
    pub async fn create(
        &self,
        payload: &PreferenceCreate,
    ) -> Result<PreferenceRecord, UpstreamError> {
        let url = self.create_url();

        tracing::debug!("Creating preferences for {} at {}", payload.user_id, url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(UpstreamService::Preferences, e))?;

        let status = response.status();

        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!(
                "Preferences service returned {} creating for {}: {}",
                status,
                payload.user_id,
                body
            );
            return Err(UpstreamError::Status {
                service: UpstreamService::Preferences,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<PreferenceRecord>()
            .await
            .map_err(|e| UpstreamError::decode(UpstreamService::Preferences, e))
    }

    /// Fetch the stored preferences for a user from `GET {base}/{user_id}`.
    ///
    /// The upstream keeps at most one record per user and answers 404 when
    /// there is none. Absence is a valid state, so 404 maps to an empty
    /// sequence rather than an error.
    pub async fn fetch_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PreferenceRecord>, UpstreamError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), user_id);

        tracing::debug!("Fetching preferences from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(UpstreamService::Preferences, e))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(UpstreamError::Status {
                service: UpstreamService::Preferences,
                status: status.as_u16(),
                body,
            });
        }

        let record = response
            .json::<PreferenceRecord>()
            .await
            .map_err(|e| UpstreamError::decode(UpstreamService::Preferences, e))?;

        Ok(vec![record])
    }
}
