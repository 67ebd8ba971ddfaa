// Service exports
pub mod error;
pub mod preferences;
pub mod users;

pub use error::{UpstreamError, UpstreamService};
pub use preferences::PreferencesClient;
pub use users::UsersClient;
