use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Application category. Wire form is kebab-case ("junior-helper").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    JuniorHelper,
    SlayerCarrier,
    DungeonCarrier,
}

impl Position {
    pub const ALL: [Position; 3] = [
        Position::JuniorHelper,
        Position::DungeonCarrier,
        Position::SlayerCarrier,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::JuniorHelper => "Junior Helper",
            Self::SlayerCarrier => "Slayer Carrier",
            Self::DungeonCarrier => "Dungeon Carrier",
        }
    }

    pub const fn category(self) -> &'static str {
        match self {
            Self::JuniorHelper => "Staff",
            Self::SlayerCarrier | Self::DungeonCarrier => "Carrier",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JuniorHelper => "junior-helper",
            Self::SlayerCarrier => "slayer-carrier",
            Self::DungeonCarrier => "dungeon-carrier",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "junior-helper" => Some(Self::JuniorHelper),
            "slayer-carrier" => Some(Self::SlayerCarrier),
            "dungeon-carrier" => Some(Self::DungeonCarrier),
            _ => None,
        }
    }
}

/// Review state. `Pending` is the only state a review action can leave;
/// both outcomes are terminal in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Declined => "Declined",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Declined => "declined",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pending => "\u{23F3}",
            Self::Approved => "\u{2713}",
            Self::Declined => "\u{2715}",
        }
    }

    /// Pill color as RGB bytes.
    pub const fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Pending => (202, 138, 4),
            Self::Approved => (22, 163, 74),
            Self::Declined => (220, 38, 38),
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub const fn can_transition_to(self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Declined)
        )
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }
}

/// Applicant identity embedded in admin listings (populated `userId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub position: Position,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    /// Present in admin listings, absent in the applicant's own view.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<Applicant>,
    #[serde(default)]
    pub form_data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Body of `POST /api/applications/submit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplication {
    pub position: Position,
    pub form_data: Map<String, Value>,
}

/// Body of `PUT /api/applications/:id/review`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRequest {
    pub status: ApplicationStatus,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::{Application, ApplicationStatus, Position};

    #[test]
    fn position_round_trips_kebab_case() {
        for position in Position::ALL {
            let json = serde_json::to_string(&position).unwrap();
            assert_eq!(json, format!("\"{}\"", position.as_str()));
            assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), position);
        }
        assert_eq!(Position::from_str("slayer-carrier"), Some(Position::SlayerCarrier));
        assert_eq!(Position::from_str("archer"), None);
    }

    #[test]
    fn only_pending_transitions_and_only_to_terminal_states() {
        use ApplicationStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Declined));
        assert!(!Pending.can_transition_to(Pending));
        for terminal in [Approved, Declined] {
            assert!(terminal.is_terminal());
            for next in [Pending, Approved, Declined] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn admin_listing_row_parses_with_populated_applicant() {
        let json = r#"{
            "_id": "app1",
            "position": "dungeon-carrier",
            "status": "pending",
            "submittedAt": "2026-03-01T12:00:00Z",
            "userId": {"_id": "u1", "username": "carry", "email": "c@x.y", "avatar": ""},
            "formData": {"inGameName": "Carry", "catacombsLevel": 31}
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.position, Position::DungeonCarrier);
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.applicant.as_ref().unwrap().username, "carry");
        assert_eq!(app.form_data["catacombsLevel"], 31);
        assert!(app.reviewed_at.is_none());
    }

    #[test]
    fn own_view_row_parses_without_applicant() {
        let json = r#"{
            "id": "app2",
            "position": "junior-helper",
            "status": "approved",
            "submittedAt": "2026-03-01T12:00:00Z",
            "reviewedAt": "2026-03-02T09:30:00Z",
            "reviewNotes": "welcome aboard"
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert!(app.applicant.is_none());
        assert_eq!(app.review_notes.as_deref(), Some("welcome aboard"));
        assert!(app.status.is_terminal());
    }
}
