use serde::{Deserialize, Serialize};

/// Server role. Backends occasionally grow new role strings; anything we
/// don't recognize deserializes to `Default` and sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    MainAdmin,
    Admin,
    Deputy,
    SrModerator,
    Moderator,
    Helper,
    JrHelper,
    BetaTester,
    #[default]
    #[serde(other)]
    Default,
}

/// Rank given to roles outside the fixed hierarchy (plain members, unknowns).
pub const UNRANKED: u16 = 999;

impl Role {
    /// Roles offered by the admin role-manager dialog.
    pub const ASSIGNABLE: [Role; 4] = [Role::Default, Role::Admin, Role::MainAdmin, Role::Owner];

    /// Display hierarchy: owner first, beta tester last, everyone else after.
    pub const fn rank(self) -> u16 {
        match self {
            Self::Owner => 0,
            Self::MainAdmin => 1,
            Self::Admin => 2,
            Self::Deputy => 3,
            Self::SrModerator => 4,
            Self::Moderator => 5,
            Self::Helper => 6,
            Self::JrHelper => 7,
            Self::BetaTester => 8,
            Self::Default => UNRANKED,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::MainAdmin => "Main Admin",
            Self::Admin => "Admin",
            Self::Deputy => "Deputy",
            Self::SrModerator => "Sr. Moderator",
            Self::Moderator => "Moderator",
            Self::Helper => "Helper",
            Self::JrHelper => "Jr. Helper",
            Self::BetaTester => "Beta Tester",
            Self::Default => "User (Normal)",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::MainAdmin => "main_admin",
            Self::Admin => "admin",
            Self::Deputy => "deputy",
            Self::SrModerator => "sr_moderator",
            Self::Moderator => "moderator",
            Self::Helper => "helper",
            Self::JrHelper => "jr_helper",
            Self::BetaTester => "beta_tester",
            Self::Default => "default",
        }
    }

    /// Badge color as RGB bytes.
    pub const fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Owner => (147, 51, 234),
            Self::MainAdmin => (220, 38, 38),
            Self::Admin => (234, 88, 12),
            Self::SrModerator => (202, 138, 4),
            Self::Moderator => (37, 99, 235),
            Self::Helper => (22, 163, 74),
            Self::JrHelper => (8, 145, 178),
            Self::Deputy | Self::BetaTester | Self::Default => (75, 85, 99),
        }
    }

    /// The admin portal is visible to owners and main admins only. The
    /// backend still authorizes every privileged request; this gates UI.
    pub const fn can_access_admin(self) -> bool {
        matches!(self, Self::Owner | Self::MainAdmin)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(Self::Owner),
            "main_admin" => Some(Self::MainAdmin),
            "admin" => Some(Self::Admin),
            "deputy" => Some(Self::Deputy),
            "sr_moderator" => Some(Self::SrModerator),
            "moderator" => Some(Self::Moderator),
            "helper" => Some(Self::Helper),
            "jr_helper" => Some(Self::JrHelper),
            "beta_tester" => Some(Self::BetaTester),
            "default" => Some(Self::Default),
            _ => None,
        }
    }
}

/// Order staff entries by the fixed hierarchy. Stable: entries with equal
/// rank keep their fetch order.
pub fn sort_by_hierarchy<T, F>(entries: &mut [T], role_of: F)
where
    F: Fn(&T) -> Role,
{
    entries.sort_by_key(|entry| role_of(entry).rank());
}

#[cfg(test)]
mod tests {
    use super::{Role, UNRANKED, sort_by_hierarchy};

    #[test]
    fn hierarchy_is_strictly_increasing() {
        let ordered = [
            Role::Owner,
            Role::MainAdmin,
            Role::Admin,
            Role::Deputy,
            Role::SrModerator,
            Role::Moderator,
            Role::Helper,
            Role::JrHelper,
            Role::BetaTester,
        ];
        for (i, role) in ordered.iter().enumerate() {
            assert_eq!(role.rank(), i as u16);
        }
        assert_eq!(Role::Default.rank(), UNRANKED);
    }

    #[test]
    fn admin_gate_accepts_only_owner_and_main_admin() {
        assert!(Role::Owner.can_access_admin());
        assert!(Role::MainAdmin.can_access_admin());
        for role in [
            Role::Admin,
            Role::Deputy,
            Role::SrModerator,
            Role::Moderator,
            Role::Helper,
            Role::JrHelper,
            Role::BetaTester,
            Role::Default,
        ] {
            assert!(!role.can_access_admin(), "{role:?} must not pass the gate");
        }
    }

    #[test]
    fn serde_uses_snake_case_strings() {
        assert_eq!(serde_json::to_string(&Role::MainAdmin).unwrap(), "\"main_admin\"");
        assert_eq!(serde_json::to_string(&Role::SrModerator).unwrap(), "\"sr_moderator\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"jr_helper\"").unwrap(),
            Role::JrHelper
        );
    }

    #[test]
    fn unknown_role_string_falls_back_to_default() {
        assert_eq!(
            serde_json::from_str::<Role>("\"grand_vizier\"").unwrap(),
            Role::Default
        );
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut entries = vec![
            ("a", Role::Helper),
            ("b", Role::Owner),
            ("c", Role::Helper),
            ("d", Role::Default),
            ("e", Role::MainAdmin),
        ];
        sort_by_hierarchy(&mut entries, |e| e.1);
        let names: Vec<&str> = entries.iter().map(|e| e.0).collect();
        assert_eq!(names, vec!["b", "e", "a", "c", "d"]);
    }
}
