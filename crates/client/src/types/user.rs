//! User wire types.

use chrono::{DateTime, Utc};
use marigold_core::{Email, UserId, UserRole};
use serde::{Deserialize, Serialize};

/// A user account.
///
/// The backend mixes naming styles on this row: name fields are camelCase,
/// activity columns are snake_case. `/auth/me` omits the activity columns
/// entirely, so they are optional here and one record serves both endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Display name: full name when present, else the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_auth_me_payload() {
        let user: User = serde_json::from_value(json!({
            "id": "7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21",
            "email": "meera@marigold.shop",
            "firstName": "Meera",
            "lastName": "Pillai",
            "phone": null,
            "role": "admin"
        }))
        .unwrap();

        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_active.is_none());
        assert_eq!(user.display_name(), "Meera Pillai");
    }

    #[test]
    fn test_user_from_users_listing() {
        let user: User = serde_json::from_value(json!({
            "id": "7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21",
            "email": "kavya@example.com",
            "firstName": null,
            "lastName": null,
            "phone": "+91-98470-00000",
            "role": "customer",
            "is_active": true,
            "created_at": "2026-01-05T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.is_active, Some(true));
        assert_eq!(user.display_name(), "kavya@example.com");
    }
}
