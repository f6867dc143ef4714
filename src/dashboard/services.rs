use super::dto::{Card, SettingsUpdate};
use crate::auth::services::is_valid_email;
use crate::error::{AppError, AppResult};
use crate::remote::models::User;

pub fn subtitle(is_admin: bool) -> &'static str {
    if is_admin {
        "You have admin access to all features and data."
    } else {
        "View your posts and user information."
    }
}

/// Welcome-page cards. The Users card is for admins only.
pub fn cards(is_admin: bool) -> Vec<Card> {
    let mut cards = Vec::with_capacity(3);
    if is_admin {
        cards.push(Card {
            title: "Users",
            description: "Browse VR/AR experts and tech professionals",
            link: "/dashboard/users",
            link_text: "View all users",
        });
    }
    cards.push(Card {
        title: "Tech Articles",
        description: if is_admin {
            "Access all articles on VR, AR and emerging tech"
        } else {
            "View your articles on VR, AR and emerging tech"
        },
        link: "/dashboard/posts",
        link_text: "View all articles",
    });
    cards.push(Card {
        title: "Comments",
        description: if is_admin {
            "Access all comments on tech articles"
        } else {
            "View comments on your tech articles"
        },
        link: "/dashboard/posts",
        link_text: "View all comments",
    });
    cards
}

fn non_blank(field: &str, value: String) -> AppResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(value)
}

/// Merges `update` into `user`. Nothing is applied if any field is invalid.
pub fn apply_settings(mut user: User, update: SettingsUpdate) -> AppResult<User> {
    if let Some(email) = update.email {
        let email = email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(AppError::Validation(
                "Please enter a valid email address".into(),
            ));
        }
        user.email = email;
    }
    if let Some(name) = update.name {
        user.name = non_blank("Name", name)?;
    }
    if let Some(username) = update.username {
        user.username = non_blank("Username", username)?;
    }
    if let Some(phone) = update.phone {
        user.phone = phone.trim().to_string();
    }
    if let Some(website) = update.website {
        user.website = website.trim().to_string();
    }
    if let Some(bio) = update.bio {
        let bio = bio.trim();
        user.bio = (!bio.is_empty()).then(|| bio.to_string());
    }
    if let Some(interests) = update.interests {
        let interests: Vec<String> = interests
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        user.interests = Some(interests);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fake;

    #[test]
    fn members_do_not_get_the_users_card() {
        let admin = cards(true);
        let member = cards(false);
        assert_eq!(admin.len(), 3);
        assert_eq!(admin[0].title, "Users");
        assert_eq!(member.len(), 2);
        assert!(member.iter().all(|c| c.title != "Users"));
        assert_ne!(admin[1].description, member[1].description);
    }

    #[test]
    fn settings_merge_only_present_fields() {
        let update = SettingsUpdate {
            name: Some("  Ada Lovelace ".into()),
            bio: Some("Engines".into()),
            interests: Some(vec!["VR".into(), " ".into()]),
            ..Default::default()
        };
        let user = apply_settings(fake::user(1), update).unwrap();
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "user1@example.com");
        assert_eq!(user.bio.as_deref(), Some("Engines"));
        assert_eq!(user.interests, Some(vec!["VR".to_string()]));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let bad_email = SettingsUpdate {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(matches!(
            apply_settings(fake::user(1), bad_email),
            Err(AppError::Validation(_))
        ));

        let blank_name = SettingsUpdate {
            name: Some("   ".into()),
            ..Default::default()
        };
        let err = apply_settings(fake::user(1), blank_name).unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty");
    }
}
