use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::{MaybeSession, SESSION_COOKIE};
use crate::extractors::json::AppJson;
use crate::models::auth::{
    AccountResponse, AuthStatusResponse, LoginRequest, LoginResponse, LogoutResponse,
    validate_login_request,
};
use crate::state::AppState;
use crate::utils::hash;

/// Handle login: verify credentials, create a server-side session, and set
/// the session cookie.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Log in with username and password",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = LoginResponse),
        (status = 400, description = "Empty username or password (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Bad credentials (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_login_request(&payload)?;

    let username = payload.username.trim();

    // A missing account and a wrong password must be indistinguishable to
    // the caller.
    let account = state
        .store
        .account_by_username(username)
        .ok_or(AppError::InvalidCredentials)?;

    let is_valid = hash::verify_password(&payload.password, &account.password)
        .map_err(|e| AppError::Internal(format!("Password verify error: {}", e)))?;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.create(account.id);
    info!(account_id = account.id, "Login successful");

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(state.config.auth.session_ttl_hours))
        .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful".into(),
            user: AccountResponse::from(account),
        }),
    ))
}

/// Handle logout. Idempotent: succeeds with or without a valid session.
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Auth",
    operation_id = "logout",
    summary = "Log out and invalidate the session",
    responses(
        (status = 200, description = "Session invalidated (idempotent)", body = LogoutResponse),
    ),
)]
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    session: MaybeSession,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(session) = session.0 {
        state.sessions.remove(&session.token);
        info!(account_id = session.account_id, "Logged out");
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    (
        jar.remove(removal),
        Json(LogoutResponse {
            message: "Logout successful".into(),
        }),
    )
}

/// Report the current authentication state. Never fails.
#[utoipa::path(
    get,
    path = "/api/auth/status",
    tag = "Auth",
    operation_id = "authStatus",
    summary = "Current authentication state",
    responses(
        (status = 200, description = "Authentication state", body = AuthStatusResponse),
    ),
)]
#[instrument(skip_all)]
pub async fn status(session: MaybeSession) -> Json<AuthStatusResponse> {
    match session.0 {
        Some(session) => Json(AuthStatusResponse {
            authenticated: true,
            user: Some(AccountResponse {
                id: session.account_id,
                username: session.username,
                is_admin: session.is_admin,
            }),
        }),
        None => Json(AuthStatusResponse {
            authenticated: false,
            user: None,
        }),
    }
}
