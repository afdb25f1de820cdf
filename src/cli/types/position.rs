//! Fantasy-relevant depth chart positions.

use std::fmt;

/// Depth chart positions that are kept in the local player store.
///
/// Sleeper reports dozens of depth chart positions (`LT`, `OLB`, `K`, ...);
/// only the four skill positions that score fantasy points in a standard
/// league are eligible. Anything else is dropped during ingest.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::Position;
///
/// assert_eq!(Position::from_depth_chart("WR"), Some(Position::WR));
/// assert_eq!(Position::from_depth_chart("K"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// Every eligible position, in depth chart order.
    pub const ELIGIBLE: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    /// Map a raw Sleeper `depth_chart_position` to an eligible position.
    ///
    /// Matching is exact: Sleeper always reports upper-case codes and a
    /// lower-case value is treated as unknown rather than guessed at.
    pub fn from_depth_chart(raw: &str) -> Option<Self> {
        Self::ELIGIBLE
            .into_iter()
            .find(|position| position.as_str() == raw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
