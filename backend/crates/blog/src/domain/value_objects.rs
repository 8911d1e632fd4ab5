//! Blog domain value objects

use kernel::id::Id;
use serde::{Deserialize, Serialize};

use crate::error::BlogError;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostMarker;
pub type PostId = Id<PostMarker>;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewMarker;
pub type ReviewId = Id<ReviewMarker>;

/// Review rating, 1 to 5 stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(i16);

impl Rate {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    pub fn new(value: i16) -> Result<Self, BlogError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(BlogError::Validation(format!(
                "Rate must be between {} and {} (got {})",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: i16) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

/// Estimated reading time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadTime {
    pub value: i32,
    pub unit: String,
}

impl ReadTime {
    pub fn new(value: i32, unit: impl Into<String>) -> Result<Self, BlogError> {
        let unit = unit.into();
        if value <= 0 {
            return Err(BlogError::Validation(
                "Read time value must be positive".to_string(),
            ));
        }
        if unit.trim().is_empty() {
            return Err(BlogError::Validation(
                "Read time unit cannot be empty".to_string(),
            ));
        }
        Ok(Self { value, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_bounds() {
        assert!(Rate::new(0).is_err());
        assert!(Rate::new(1).is_ok());
        assert!(Rate::new(3).is_ok());
        assert!(Rate::new(5).is_ok());
        assert!(Rate::new(6).is_err());
        assert!(Rate::new(-1).is_err());
    }

    #[test]
    fn test_rate_value() {
        assert_eq!(Rate::new(4).unwrap().value(), 4);
    }

    #[test]
    fn test_read_time_validation() {
        assert!(ReadTime::new(5, "minutes").is_ok());
        assert!(ReadTime::new(0, "minutes").is_err());
        assert!(ReadTime::new(-2, "minutes").is_err());
        assert!(ReadTime::new(5, "  ").is_err());
    }
}
