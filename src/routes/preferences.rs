use crate::core::{build_create_payload, links};
use crate::models::{
    CompositeCreateResponse, CompositeReadResponse, CreateUserPreferencesRequest, ErrorResponse,
    HealthResponse, PreferenceInput, ServiceInfoResponse, UserRecord,
};
use crate::services::{PreferencesClient, UpstreamError, UsersClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UsersClient>,
    pub preferences: Arc<PreferencesClient>,
    pub users_base: String,
    pub prefs_base: String,
}

/// Configure all composite routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(service_info))
        .route("/health", web::get().to(health_check))
        .route("/users/{user_id}/preferences", web::post().to(create_for_user))
        .route("/user-preferences", web::post().to(create_composite))
        .route("/user-preferences/{user_id}", web::get().to(read_composite));
}

/// Service metadata endpoint
///
/// GET /
async fn service_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ServiceInfoResponse {
        message: "User-Preferences Composite API".to_string(),
        users_base: state.users_base.clone(),
        prefs_base: state.prefs_base.clone(),
        create_endpoint: state.preferences.create_endpoint().as_str().to_string(),
        links: links::entrypoints(),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create preferences with the user id in the path
///
/// POST /users/{user_id}/preferences
///
/// Responds 201 with the record the Preferences service returned, matching
/// the response shape this route has always had.
async fn create_for_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PreferenceInput>,
) -> impl Responder {
    let user_id = path.into_inner();
    let input = body.into_inner();

    if let Err(errors) = input.validate() {
        tracing::info!("Validation failed for user {}: {}", user_id, errors);
        return validation_failed(errors);
    }

    // Step 1: the user must exist before anything is sent to Preferences
    let _user = match verify_user(&state, user_id).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    // Step 2: build the outbound payload
    let payload = build_create_payload(user_id, input);

    // Step 3: create the record upstream
    let created = match state.preferences.create(&payload).await {
        Ok(record) => record,
        Err(e) => return bad_gateway(e),
    };

    tracing::info!("Created preferences for user {}", user_id);

    HttpResponse::Created().json(created)
}

/// Create preferences with the user id in the body
///
/// POST /user-preferences
///
/// Responds 201 with the combined {user, preferences, links} document.
async fn create_composite(
    state: web::Data<AppState>,
    body: web::Json<CreateUserPreferencesRequest>,
) -> impl Responder {
    let request = body.into_inner();

    if let Err(errors) = request.validate() {
        tracing::info!(
            "Validation failed for user {}: {}",
            request.user_id,
            errors
        );
        return validation_failed(errors);
    }

    let (user_id, input) = request.into_parts();

    let user = match verify_user(&state, user_id).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let payload = build_create_payload(user_id, input);

    let created = match state.preferences.create(&payload).await {
        Ok(record) => record,
        Err(e) => return bad_gateway(e),
    };

    tracing::info!("Created preferences for user {}", user_id);

    HttpResponse::Created().json(CompositeCreateResponse {
        user,
        preferences: created,
        links: links::for_user(user_id),
    })
}

/// Read a user together with their stored preferences
///
/// GET /user-preferences/{user_id}
///
/// `preferences` is a sequence of zero or one records; a user without
/// stored preferences is a 200 with an empty sequence, not an error.
async fn read_composite(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();

    let user = match verify_user(&state, user_id).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let preferences = match state.preferences.fetch_for_user(user_id).await {
        Ok(records) => records,
        Err(e) => return bad_gateway(e),
    };

    tracing::debug!(
        "Returning {} preference record(s) for user {}",
        preferences.len(),
        user_id
    );

    HttpResponse::Ok().json(CompositeReadResponse {
        user,
        preferences,
        links: links::for_user(user_id),
    })
}

/// Confirm the user exists in the Users service, or produce the terminal
/// response for this request.
async fn verify_user(state: &AppState, user_id: Uuid) -> Result<UserRecord, HttpResponse> {
    match state.users.fetch_user(user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            tracing::info!("User {} not found in Users service", user_id);
            Err(HttpResponse::NotFound().json(ErrorResponse {
                error: "User not found".to_string(),
                message: "User not found in Users service".to_string(),
                status_code: 404,
            }))
        }
        Err(e) => Err(bad_gateway(e)),
    }
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn bad_gateway(e: UpstreamError) -> HttpResponse {
    tracing::error!("{} service failure: {}", e.service(), e);
    HttpResponse::BadGateway().json(ErrorResponse {
        error: format!("{} service error", e.service()),
        message: e.to_string(),
        status_code: 502,
    })
}
