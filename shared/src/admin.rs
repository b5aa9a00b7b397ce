use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregate counts for the admin statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    /// Keys are raw role strings so unknown backend roles still display.
    #[serde(default)]
    pub users_by_role: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditActor {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub action: String,
    /// Acting admin; `None` for system-initiated entries.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<AuditActor>,
    #[serde(default)]
    pub target_type: String,
    #[serde(default)]
    pub details: Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogsResponse {
    #[serde(default)]
    pub logs: Vec<AuditLogEntry>,
}

/// The backend collections the database browser may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Applications,
    AuditLogs,
}

impl Collection {
    pub const ALL: [Collection; 3] =
        [Collection::Users, Collection::Applications, Collection::AuditLogs];

    /// Path segment used by the db update/delete endpoints.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Applications => "applications",
            Self::AuditLogs => "auditLogs",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Applications => "Applications",
            Self::AuditLogs => "Audit Logs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuditLogsResponse, Collection, DashboardStats};

    #[test]
    fn stats_parse_with_unknown_role_keys() {
        let json = r#"{"totalUsers": 42, "usersByRole": {"owner": 1, "grand_vizier": 3}}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_users, 42);
        assert_eq!(stats.users_by_role["grand_vizier"], 3);
    }

    #[test]
    fn audit_log_actor_is_optional() {
        let json = r#"{"logs":[
            {"_id":"l1","action":"role_update","userId":{"username":"dw"},
             "targetType":"user","details":{"role":"admin"},
             "timestamp":"2026-04-01T00:00:00Z"},
            {"_id":"l2","action":"cleanup","targetType":"applications",
             "timestamp":"2026-04-02T00:00:00Z"}
        ]}"#;
        let resp: AuditLogsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.logs[0].actor.as_ref().unwrap().username, "dw");
        assert!(resp.logs[1].actor.is_none());
    }

    #[test]
    fn collection_path_segments_match_the_backend() {
        assert_eq!(Collection::Users.as_str(), "users");
        assert_eq!(Collection::AuditLogs.as_str(), "auditLogs");
    }
}
