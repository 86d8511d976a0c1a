use serde::{Deserialize, Serialize};
use std::fmt;

/// User role. Signup always produces a TeamMember; only an admin can
/// assign TechLead or Admin afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum UserRole {
    Admin = 0,
    TechLead = 1,
    #[default]
    TeamMember = 2,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "ADMIN",
            TechLead => "TECH_LEAD",
            TeamMember => "TEAM_MEMBER",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Kudos may only be created by tech leads and admins.
    #[inline]
    pub const fn can_give_kudos(&self) -> bool {
        use UserRole::*;
        matches!(self, Admin | TechLead)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use UserRole::*;
        match id {
            0 => Some(Admin),
            1 => Some(TechLead),
            2 => Some(TeamMember),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "ADMIN" => Some(Admin),
            "TECH_LEAD" => Some(TechLead),
            "TEAM_MEMBER" => Some(TeamMember),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
