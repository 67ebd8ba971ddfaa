use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /users/{user_id}/preferences`: the user id comes from the
/// path, not from this body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PreferenceInput {
    #[validate(range(min = 0))]
    pub max_budget: Option<i64>,
    #[validate(range(min = 0))]
    pub min_size: Option<i64>,
    #[serde(default)]
    pub location_area: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub rooms: Option<i64>,
}

/// Body of `POST /user-preferences`: the user id travels in the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserPreferencesRequest {
    pub user_id: Uuid,
    #[validate(range(min = 0))]
    pub max_budget: Option<i64>,
    #[validate(range(min = 0))]
    pub min_size: Option<i64>,
    #[serde(default)]
    pub location_area: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub rooms: Option<i64>,
}

impl CreateUserPreferencesRequest {
    /// Split into the user id and the path-variant input shape.
    pub fn into_parts(self) -> (Uuid, PreferenceInput) {
        let input = PreferenceInput {
            max_budget: self.max_budget,
            min_size: self.min_size,
            location_area: self.location_area,
            rooms: self.rooms,
        };
        (self.user_id, input)
    }
}
