use serde::{Deserialize, Serialize};

use crate::remote::models::User;

/// A navigation card on the welcome page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub link_text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub greeting: String,
    pub subtitle: &'static str,
    pub user: User,
    pub is_admin: bool,
    pub cards: Vec<Card>,
}

/// Profile fields editable from the settings page. Absent fields keep
/// their current value.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub user: User,
    pub is_admin: bool,
    pub message: &'static str,
}
