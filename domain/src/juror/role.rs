//! Weighted juror roles
//!
//! Two bench roles carry override authority: the Archivist (grounded in
//! retrieved reference material) and the Community Watch (grounded in
//! accumulated human feedback). The base tally never looks at roles -
//! only the override rule does.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Tag identifying a juror with special override authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightedRole {
    /// Judges against curated reference documents.
    Archivist,
    /// Judges against the accumulated human feedback record.
    CommunityWatch,
}

impl WeightedRole {
    /// All roles that must concur for an override.
    pub const ALL: [WeightedRole; 2] = [WeightedRole::Archivist, WeightedRole::CommunityWatch];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightedRole::Archivist => "archivist",
            WeightedRole::CommunityWatch => "community-watch",
        }
    }
}

impl std::fmt::Display for WeightedRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WeightedRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "archivist" => Ok(WeightedRole::Archivist),
            "community-watch" | "community_watch" => Ok(WeightedRole::CommunityWatch),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!(
            "archivist".parse::<WeightedRole>().ok(),
            Some(WeightedRole::Archivist)
        );
        assert_eq!(
            "community-watch".parse::<WeightedRole>().ok(),
            Some(WeightedRole::CommunityWatch)
        );
        assert_eq!(
            "community_watch".parse::<WeightedRole>().ok(),
            Some(WeightedRole::CommunityWatch)
        );
        assert!("prosecutor".parse::<WeightedRole>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for role in WeightedRole::ALL {
            assert_eq!(role.to_string().parse::<WeightedRole>().ok(), Some(role));
        }
    }
}
