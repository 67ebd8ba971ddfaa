use crate::models::{PreferenceCreate, PreferenceInput};
use uuid::Uuid;

/// Build the canonical creation payload for the Preferences service.
///
/// The user id is injected here rather than trusted from the input shape:
/// depending on the inbound route it arrived via the path or the body, and
/// by this point it has been verified against the Users service.
pub fn build_create_payload(user_id: Uuid, input: PreferenceInput) -> PreferenceCreate {
    PreferenceCreate {
        user_id,
        max_budget: input.max_budget,
        min_size: input.min_size,
        location_area: input.location_area,
        rooms: input.rooms,
    }
}
