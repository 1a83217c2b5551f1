//! Handlers for the `/auth` resource (register, login, session check).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use tunebox_core::error::CoreError;
use tunebox_db::models::user::{CreateUser, UserResponse};
use tunebox_db::StoreError;
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const USER_EXISTS: &str = "User already exists";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub logged_in: bool,
}

/// Collapse validator output into one message, fields in a stable order.
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .min_by(|a, b| a.0.cmp(&b.0))
        .and_then(|(_, errs)| errs.first())
        .map(|err| match &err.message {
            Some(msg) => msg.to_string(),
            None => format!("Invalid value for {}", err.code),
        })
        .unwrap_or_else(|| "Invalid registration data".to_string())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create an account. The email must be unused and the password at least
/// eight characters.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(mut input) = payload?;
    input.name = input.name.trim().to_string();
    input.email = input.email.trim().to_lowercase();

    input
        .validate()
        .map_err(|e| AppError::BadRequest(first_validation_message(&e)))?;

    if state.users.find_user_by_email(&input.email).await?.is_some() {
        return Err(AppError::BadRequest(USER_EXISTS.into()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: input.name,
        email: input.email,
        password_hash,
    };

    // A concurrent registration can still win the race past the pre-check.
    let user = match state.users.create_user(&create).await {
        Ok(user) => user,
        Err(StoreError::Conflict(_)) => return Err(AppError::BadRequest(USER_EXISTS.into())),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user: UserResponse::from(&user),
        }),
    ))
}

/// POST /auth/login
///
/// Exchange email + password for a session token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(input) = payload?;
    let email = input.email.trim().to_lowercase();

    let unauthorized = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    if email.is_empty() || input.password.is_empty() {
        return Err(unauthorized());
    }

    let user = state
        .users
        .find_user_by_email(&email)
        .await?
        .ok_or_else(unauthorized)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected");
        return Err(unauthorized());
    }

    let token = generate_token(user.id, &user.name, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
    }))
}

/// GET /auth/check
///
/// Report whether the request carries a valid session. Never fails.
pub async fn check(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionStatus> {
    let logged_in = AuthUser::from_headers(&headers, &state.config.jwt).is_ok();
    Json(SessionStatus { logged_in })
}
