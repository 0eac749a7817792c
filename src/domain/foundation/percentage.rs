//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Rounds a loosely-typed score from the analysis service into range.
    ///
    /// NaN maps to zero; everything else is rounded and clamped.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Self::ZERO;
        }
        Self(score.round().clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_from_score_rounds_and_clamps() {
        assert_eq!(Percentage::from_score(72.4).value(), 72);
        assert_eq!(Percentage::from_score(72.5).value(), 73);
        assert_eq!(Percentage::from_score(-5.0), Percentage::ZERO);
        assert_eq!(Percentage::from_score(140.0).value(), 100);
        assert_eq!(Percentage::from_score(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::from_score(75.0)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }
}
