// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PreferenceCreate, PreferenceRecord, UserRecord};
pub use requests::{CreateUserPreferencesRequest, PreferenceInput};
pub use responses::{
    CompositeCreateResponse, CompositeReadResponse, ErrorResponse, HealthResponse, Links,
    ServiceInfoResponse,
};
