use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Attributes of a user as returned by the Users service.
///
/// The composite service never inspects individual fields beyond passing
/// them through, so the body stays an opaque JSON object.
pub type UserRecord = Map<String, Value>;

/// A preference record as returned by the Preferences service. Opaque for
/// the same reason as [`UserRecord`].
pub type PreferenceRecord = Map<String, Value>;

/// Outbound payload for creating a preference record upstream.
///
/// Only built after the user id has been confirmed to exist in the Users
/// service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceCreate {
    pub user_id: Uuid,
    pub max_budget: Option<i64>,
    pub min_size: Option<i64>,
    pub location_area: Option<Vec<String>>,
    pub rooms: Option<i64>,
}
