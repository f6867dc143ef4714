use serde::{Deserialize, Serialize};

use crate::remote::models::User;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    pub is_admin: bool,
}

/// Registration form as the sign-up page submits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    /// `[lng, lat]` picked on the map.
    #[serde(default)]
    pub location: Option<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub name: String,
    pub username: String,
    pub location: [f64; 2],
    pub message: String,
}

/// The signed-in user.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
    pub is_admin: bool,
}
