//! User-Preferences Composite API
//!
//! Composite service that ties the Users and Preferences microservices
//! together: it verifies a user exists upstream before creating or reading
//! preference records, and assembles combined responses with hypermedia
//! links for the frontend.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::{CreateEndpoint, Settings};
pub use models::{
    CompositeCreateResponse, CompositeReadResponse, PreferenceCreate, PreferenceInput,
};
pub use services::{PreferencesClient, UpstreamError, UsersClient};
