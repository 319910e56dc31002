use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the session cookie issued on login.
pub const SESSION_COOKIE: &str = "pawfinder_session";

/// Authenticated principal extracted from the session cookie.
///
/// Add this as a handler parameter to require authentication. Admin-only
/// handlers additionally call [`AuthSession::require_admin`].
pub struct AuthSession {
    pub account_id: i32,
    pub username: String,
    pub is_admin: bool,
    /// The opaque token backing this session; logout invalidates it.
    pub token: String,
}

impl AuthSession {
    /// Returns `Ok(())` for administrators, `Err(PermissionDenied)` otherwise.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }
}

fn resolve_session(parts: &Parts, state: &AppState) -> Result<AuthSession, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);
    let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::SessionMissing)?;
    let token = cookie.value().to_string();

    let session = state.sessions.get(&token).ok_or(AppError::SessionInvalid)?;

    // A session outliving its account should not happen (nothing deletes
    // accounts); treat it as an invalid session rather than a panic.
    let account = state
        .store
        .account_by_id(session.account_id)
        .ok_or_else(|| {
            state.sessions.remove(&token);
            AppError::SessionInvalid
        })?;

    Ok(AuthSession {
        account_id: account.id,
        username: account.username,
        is_admin: account.is_admin,
        token,
    })
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_session(parts, state)
    }
}

/// Like [`AuthSession`], but anonymous or stale-session requests pass
/// through as `None` instead of being rejected. Used by the auth status
/// endpoint, which never fails.
pub struct MaybeSession(pub Option<AuthSession>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(resolve_session(parts, state).ok()))
    }
}
