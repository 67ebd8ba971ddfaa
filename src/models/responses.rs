use crate::models::domain::{PreferenceRecord, UserRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relation name -> URL, included in composite responses for client
/// navigation.
pub type Links = BTreeMap<String, String>;

/// Combined response for the create flow: the verified user, the record the
/// Preferences service returned, and navigation links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeCreateResponse {
    pub user: UserRecord,
    pub preferences: PreferenceRecord,
    pub links: Links,
}

/// Combined response for the read flow. `preferences` is always a sequence:
/// empty means the user has no stored preferences, which is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeReadResponse {
    pub user: UserRecord,
    pub preferences: Vec<PreferenceRecord>,
    pub links: Links,
}

/// Service metadata returned from `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub users_base: String,
    pub prefs_base: String,
    pub create_endpoint: String,
    pub links: Links,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
