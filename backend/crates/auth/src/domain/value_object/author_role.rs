use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum AuthorRole {
    #[default]
    Author = 0,
    Admin = 1,
}

impl AuthorRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AuthorRole::Author => "author",
            AuthorRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, AuthorRole::Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => AuthorRole::Author,
            1 => AuthorRole::Admin,
            _ => {
                tracing::error!("Invalid AuthorRole id: {}", id);
                unreachable!("Invalid AuthorRole id: {}", id)
            }
        }
    }

    /// Parse a role code from API input (case-insensitive)
    #[inline]
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "author" => Some(AuthorRole::Author),
            "admin" => Some(AuthorRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for AuthorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_role_from_id() {
        assert_eq!(AuthorRole::from_id(0), AuthorRole::Author);
        assert_eq!(AuthorRole::from_id(1), AuthorRole::Admin);
    }

    #[test]
    fn test_author_role_parse() {
        assert_eq!(AuthorRole::parse("author"), Some(AuthorRole::Author));
        assert_eq!(AuthorRole::parse("Admin"), Some(AuthorRole::Admin));
        assert_eq!(AuthorRole::parse("ADMIN"), Some(AuthorRole::Admin));
        assert_eq!(AuthorRole::parse("superuser"), None);
    }

    #[test]
    fn test_author_role_default() {
        assert_eq!(AuthorRole::default(), AuthorRole::Author);
    }

    #[test]
    fn test_author_role_checks() {
        assert!(!AuthorRole::Author.is_admin());
        assert!(AuthorRole::Admin.is_admin());
    }

    #[test]
    fn test_author_role_display() {
        assert_eq!(AuthorRole::Author.to_string(), "author");
        assert_eq!(AuthorRole::Admin.to_string(), "admin");
    }
}
