//! Accounts that exist outside the public directory.

use crate::remote::models::{Address, Company, Geo, User};

pub const ADMIN_ID: i64 = 0;
pub const ADMIN_EMAIL: &str = "admin@admin.com";

const ADMIN_IMAGE: &str = "/placeholder.svg?height=200&width=200&text=Admin";
const ADMIN_BIO: &str = "Technology enthusiast and VR/AR expert. Managing the latest developments in immersive technologies and exploring their applications across industries.";
const ADMIN_INTERESTS: [&str; 4] = [
    "Virtual Reality",
    "Augmented Reality",
    "Technology Management",
    "Digital Innovation",
];

fn admin_record(username: &str) -> User {
    User {
        id: ADMIN_ID,
        name: "Admin User".into(),
        username: username.into(),
        email: ADMIN_EMAIL.into(),
        address: Address {
            street: "Admin Street".into(),
            suite: "Admin Suite".into(),
            city: "Admin City".into(),
            zipcode: "00000".into(),
            geo: Geo {
                lat: "0".into(),
                lng: "0".into(),
            },
        },
        phone: "000-000-0000".into(),
        website: "admin.com".into(),
        company: Company {
            name: "Admin Company".into(),
            catch_phrase: "Admin Catchphrase".into(),
            bs: "Admin BS".into(),
        },
        profile_image: Some(ADMIN_IMAGE.into()),
        bio: Some(ADMIN_BIO.into()),
        interests: Some(ADMIN_INTERESTS.iter().map(|s| s.to_string()).collect()),
    }
}

/// The record stored for a signed-in admin.
pub fn admin_user() -> User {
    admin_record("admin123")
}

/// The admin profile as other users see it.
pub fn public_admin_profile() -> User {
    admin_record("admin")
}

/// Directory member that the upstream API does not know about; appended
/// after the fetched users when signing in.
pub fn extra_member() -> User {
    User {
        id: 999,
        name: "Mia Cabanza".into(),
        username: "macstar".into(),
        email: "cabanzamia@gmail.com".into(),
        address: Address {
            street: "Your Street".into(),
            suite: "Your Suite".into(),
            city: "Your City".into(),
            zipcode: "00000".into(),
            geo: Geo {
                lat: "0".into(),
                lng: "0".into(),
            },
        },
        phone: "123-456-7890".into(),
        website: "mia.dev".into(),
        company: Company {
            name: "Cabanza Tech".into(),
            catch_phrase: "Innovating Tomorrow".into(),
            bs: "Tech Solutions".into(),
        },
        profile_image: None,
        bio: None,
        interests: None,
    }
}
