//! Season type for the Sleeper stats feed.

use crate::error::{Result, SleeperError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_default() {
        assert_eq!(Season::default(), Season::new(2025));
        assert_eq!(Season::default().to_string(), "2025");
    }

    #[test]
    fn test_season_parse() {
        assert_eq!("2024".parse::<Season>().unwrap(), Season::new(2024));
        assert_eq!(" 2023 ".parse::<Season>().unwrap(), Season::new(2023));
        assert!(matches!(
            "twenty".parse::<Season>(),
            Err(SleeperError::InvalidNumber(_))
        ));
    }
}
