use serde::{Deserialize, Serialize};

use crate::remote::models::User;

#[derive(Debug, Default, Deserialize)]
pub struct UserSearch {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct UserDetails {
    pub user: User,
    /// `[lng, lat]` for the map widget.
    pub location: Option<[f64; 2]>,
}
