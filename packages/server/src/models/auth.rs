use serde::{Deserialize, Serialize};

use crate::entity::account::Account;
use crate::error::AppError;

/// Request body for login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Username of the account to log into.
    #[schema(example = "admin")]
    pub username: String,
    /// Account password.
    #[schema(example = "password123")]
    pub password: String,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    if payload.username.trim().is_empty() {
        return Err(AppError::Validation("Username must not be empty".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".into()));
    }
    Ok(())
}

/// Public view of an account. The credential hash never leaves the server.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Account ID.
    #[schema(example = 1)]
    pub id: i32,
    /// Username.
    #[schema(example = "admin")]
    pub username: String,
    /// Whether the account may triage listing status.
    pub is_admin: bool,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            is_admin: account.is_admin,
        }
    }
}

/// Successful login response. The session itself travels in a cookie.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: AccountResponse,
}

/// Logout confirmation.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Logout successful")]
    pub message: String,
}

/// Current authentication state. Never an error response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountResponse>,
}
