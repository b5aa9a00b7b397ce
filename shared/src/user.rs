use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Authenticated identity for the current browser session. Produced by the
/// OAuth callback redirect and persisted verbatim in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

/// Row in the admin user listing and the staff directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_id: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Discord role color as a CSS hex string, when the backend knows one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<StaffMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::{StaffMember, User, UsersResponse};
    use crate::role::Role;

    #[test]
    fn user_parses_callback_payload() {
        let json = r#"{
            "id": "66f0c1",
            "username": "darkwall",
            "email": "dw@example.com",
            "avatar": "https://cdn.example.com/a.png",
            "role": "main_admin",
            "joinedAt": "2025-11-02T10:15:30.000Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "darkwall");
        assert_eq!(user.role, Role::MainAdmin);
        assert!(user.role.can_access_admin());
    }

    #[test]
    fn user_accepts_mongo_id_alias_and_missing_role() {
        let json = r#"{"_id":"abc","username":"n","joinedAt":"2026-01-01T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "abc");
        assert_eq!(user.role, Role::Default);
        assert!(user.avatar.is_empty());
    }

    #[test]
    fn staff_listing_parses_without_pagination() {
        let json = r##"{"users":[{
            "_id":"1","username":"mod","role":"moderator",
            "color":"#2563eb","joinedAt":"2026-02-03T00:00:00Z"
        }]}"##;
        let resp: UsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.users.len(), 1);
        assert!(resp.pagination.is_none());
        let member: &StaffMember = &resp.users[0];
        assert_eq!(member.role, Role::Moderator);
        assert_eq!(member.color.as_deref(), Some("#2563eb"));
    }
}
