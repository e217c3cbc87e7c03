//! User roles.
//!
//! Two roles exist, named after the usual helpdesk support tiers: N1 users
//! file chamados, N2 users work the queue for a building and mark chamados
//! resolved. The wire and database representation is the lowercase tier name
//! (`"n1"` / `"n2"`).

use serde::{Deserialize, Serialize};

/// Helpdesk role attached to every user profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Requester: files chamados.
    N1,
    /// Resolver: lists chamados by building and closes them.
    N2,
}

impl Role {
    /// Wire/database value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::N1 => "n1",
            Role::N2 => "n2",
        }
    }

    /// Parse a stored role value. Anything but `"n1"`/`"n2"` is rejected.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "n1" => Some(Role::N1),
            "n2" => Some(Role::N2),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("n1"), Some(Role::N1));
        assert_eq!(Role::parse("n2"), Some(Role::N2));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("N1"), None);
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_as_str_round_trips() {
        for role in [Role::N1, Role::N2] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
