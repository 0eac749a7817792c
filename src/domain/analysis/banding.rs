//! Color bands for regret probability and severity.
//!
//! These thresholds are user-visible semantics: the same input must always
//! land in the same band.

use serde::Serialize;
use std::fmt;

/// Number of segments in a severity bar.
pub const SEVERITY_SEGMENTS: usize = 10;

/// Three-level severity classification, rendered green / yellow / red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// `<30` low, `30..60` medium, otherwise high.
    pub fn for_regret_probability(probability: f64) -> Band {
        if probability < 30.0 {
            Band::Low
        } else if probability < 60.0 {
            Band::Medium
        } else {
            Band::High
        }
    }

    /// `<=3` low, `<=6` medium, otherwise high.
    pub fn for_severity(severity: f64) -> Band {
        if severity <= 3.0 {
            Band::Low
        } else if severity <= 6.0 {
            Band::Medium
        } else {
            Band::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Medium => "medium",
            Band::High => "high",
        }
    }

    /// Color name used by renderers.
    pub fn color(&self) -> &'static str {
        match self {
            Band::Low => "green",
            Band::Medium => "yellow",
            Band::High => "red",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ten-segment bar; the first `filled` segments take the severity's band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityBar {
    pub filled: usize,
    pub band: Band,
}

impl SeverityBar {
    /// Segment `i` is filled when `i < severity`, so fractional severities
    /// round up and values outside 0..=10 saturate.
    pub fn new(severity: f64) -> Self {
        let filled = (0..SEVERITY_SEGMENTS)
            .filter(|i| (*i as f64) < severity)
            .count();
        Self {
            filled,
            band: Band::for_severity(severity),
        }
    }

    /// Per-segment fill color, `None` for empty segments.
    pub fn segments(&self) -> [Option<Band>; SEVERITY_SEGMENTS] {
        let mut segments = [None; SEVERITY_SEGMENTS];
        for segment in segments.iter_mut().take(self.filled) {
            *segment = Some(self.band);
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn regret_probability_band_boundaries() {
        let cases = [
            (0.0, Band::Low),
            (29.0, Band::Low),
            (30.0, Band::Medium),
            (59.0, Band::Medium),
            (60.0, Band::High),
            (100.0, Band::High),
        ];
        for (input, expected) in cases {
            assert_eq!(Band::for_regret_probability(input), expected, "input {input}");
        }
    }

    #[test]
    fn severity_band_boundaries() {
        let cases = [
            (0.0, Band::Low),
            (3.0, Band::Low),
            (4.0, Band::Medium),
            (6.0, Band::Medium),
            (7.0, Band::High),
            (10.0, Band::High),
        ];
        for (input, expected) in cases {
            assert_eq!(Band::for_severity(input), expected, "input {input}");
        }
    }

    #[test]
    fn fractional_values_fall_between_bands() {
        assert_eq!(Band::for_regret_probability(29.9), Band::Low);
        assert_eq!(Band::for_regret_probability(59.5), Band::Medium);
        assert_eq!(Band::for_severity(6.5), Band::High);
    }

    #[test]
    fn severity_bar_fills_severity_segments() {
        let bar = SeverityBar::new(7.0);
        assert_eq!(bar.filled, 7);
        assert_eq!(bar.band, Band::High);

        let segments = bar.segments();
        assert!(segments[..7].iter().all(|s| *s == Some(Band::High)));
        assert!(segments[7..].iter().all(Option::is_none));
    }

    #[test]
    fn severity_bar_saturates() {
        assert_eq!(SeverityBar::new(0.0).filled, 0);
        assert_eq!(SeverityBar::new(-2.0).filled, 0);
        assert_eq!(SeverityBar::new(10.0).filled, 10);
        assert_eq!(SeverityBar::new(14.0).filled, 10);
        assert_eq!(SeverityBar::new(3.5).filled, 4);
    }

    #[test]
    fn band_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Band::Medium).unwrap(), "\"medium\"");
    }

    proptest! {
        #[test]
        fn integer_severity_fills_exactly_that_many(severity in 0u8..=10) {
            let bar = SeverityBar::new(f64::from(severity));
            prop_assert_eq!(bar.filled, severity as usize);
        }

        #[test]
        fn probability_bands_are_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Band::for_regret_probability(lo) <= Band::for_regret_probability(hi));
        }
    }
}
