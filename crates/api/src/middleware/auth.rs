//! Session-identity extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use tunebox_core::error::CoreError;
use tunebox_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user, taken from a session token in the
/// `Authorization: Bearer <token>` header.
///
/// Use this as an extractor parameter in any handler that requires a session:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, name = %user.name, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// Display name carried by the session.
    pub name: String,
}

impl AuthUser {
    /// Resolve the session from request headers.
    pub fn from_headers(headers: &HeaderMap, config: &JwtConfig) -> Result<Self, AppError> {
        let auth_header = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, config).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            name: claims.name,
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_headers(&parts.headers, &state.config.jwt)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    use super::*;
    use crate::auth::jwt::generate_token;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "extractor-test-secret".to_string(),
            expiry_mins: 5,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn valid_bearer_token_resolves_user() {
        let token = generate_token(7, "Roger", &config()).unwrap();
        let user = AuthUser::from_headers(&headers_with(&format!("Bearer {token}")), &config())
            .expect("token should be accepted");
        assert_eq!(user.user_id, 7);
        assert_eq!(user.name, "Roger");
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert_matches!(
            AuthUser::from_headers(&HeaderMap::new(), &config()),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        assert_matches!(
            AuthUser::from_headers(&headers_with("Basic dXNlcjpwYXNz"), &config()),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        assert_matches!(
            AuthUser::from_headers(&headers_with("Bearer not.a.jwt"), &config()),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }
}
