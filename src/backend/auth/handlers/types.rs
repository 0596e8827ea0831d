/**
 * Authentication Handler Types
 *
 * Request and response bodies for register, login and the dashboard.
 */

use serde::{Deserialize, Serialize};

use crate::shared::models::{NewUser, User};

/// Register request
#[derive(Deserialize, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Plaintext; hashed before storage
    #[serde(default)]
    pub password: String,
}

impl From<RegisterRequest> for NewUser {
    /// Self-registration never chooses a role
    fn from(req: RegisterRequest) -> Self {
        NewUser::new(req.username, req.email, req.password)
    }
}

/// Login request
#[derive(Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by register and login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// User information that is safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Body of `GET /api/dashboard`
#[derive(Serialize, Deserialize, Debug)]
pub struct DashboardResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}
