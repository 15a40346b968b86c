//! Common types used across the Craftbook catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};

/// Difficulty level of a craft project.
///
/// Unlike categories, difficulty is a controlled vocabulary: parsing an
/// unknown value is an error rather than an empty match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for beginners.
    Easy,
    /// Needs some practice.
    Medium,
    /// Needs patience and prior experience.
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The lowercase name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CraftError::InvalidArgument {
                field: "difficulty".to_string(),
                value: s.to_string(),
                message: "must be 'easy', 'medium', or 'hard'".to_string(),
            })
    }
}

/// Time needed to complete a craft, in minutes.
///
/// A fixed estimate behaves as a range whose bounds are equal, so consumers
/// can read [`TimeEstimate::min`] and [`TimeEstimate::max`] without matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeEstimate {
    /// A single duration.
    Fixed { minutes: u32 },
    /// A duration between two bounds, `min <= max`.
    Range { min: u32, max: u32 },
}

impl TimeEstimate {
    /// The zero-duration estimate.
    pub const ZERO: TimeEstimate = TimeEstimate::Fixed { minutes: 0 };

    /// Create a fixed estimate.
    pub fn fixed(minutes: u32) -> Self {
        TimeEstimate::Fixed { minutes }
    }

    /// Create a ranged estimate, rejecting `min > max`.
    pub fn range(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(CraftError::InvalidArgument {
                field: "time_estimate".to_string(),
                value: format!("{}-{}", min, max),
                message: "minimum must not exceed maximum".to_string(),
            });
        }
        Ok(Self::from_bounds(min, max))
    }

    /// Canonical form for a pair of bounds: equal bounds collapse to a fixed
    /// estimate. Ordering is not checked here.
    pub(crate) fn from_bounds(min: u32, max: u32) -> Self {
        if min == max {
            TimeEstimate::Fixed { minutes: min }
        } else {
            TimeEstimate::Range { min, max }
        }
    }

    /// Lower bound in minutes.
    pub fn min(&self) -> u32 {
        match *self {
            TimeEstimate::Fixed { minutes } => minutes,
            TimeEstimate::Range { min, .. } => min,
        }
    }

    /// Upper bound in minutes.
    pub fn max(&self) -> u32 {
        match *self {
            TimeEstimate::Fixed { minutes } => minutes,
            TimeEstimate::Range { max, .. } => max,
        }
    }

    /// Returns true if both bounds are equal.
    pub fn is_fixed(&self) -> bool {
        self.min() == self.max()
    }

    /// Returns true if the bounds are ordered.
    ///
    /// Deserialized values skip [`TimeEstimate::range`], so ingestion
    /// checks this explicitly.
    pub fn is_valid(&self) -> bool {
        self.min() <= self.max()
    }

    /// Sum of both bounds, or `None` if either overflows.
    pub fn checked_add(self, rhs: TimeEstimate) -> Option<TimeEstimate> {
        Some(TimeEstimate::from_bounds(
            self.min().checked_add(rhs.min())?,
            self.max().checked_add(rhs.max())?,
        ))
    }

    /// Pairwise sum of all bounds. An empty input is [`TimeEstimate::ZERO`].
    pub fn total(estimates: impl IntoIterator<Item = TimeEstimate>) -> Result<TimeEstimate> {
        estimates
            .into_iter()
            .try_fold(TimeEstimate::ZERO, TimeEstimate::checked_add)
            .ok_or(CraftError::TimeOverflow)
    }

    /// Upper bound in hours, rounded to two decimals.
    pub fn max_hours(&self) -> f64 {
        (f64::from(self.max()) / 60.0 * 100.0).round() / 100.0
    }
}

impl Default for TimeEstimate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = (self.min(), self.max());
        let whole_hours = min >= 60 && min % 60 == 0 && max % 60 == 0;

        let (lo, hi, unit) = if whole_hours {
            (min / 60, max / 60, "hour")
        } else {
            (min, max, "minute")
        };
        let plural = if hi == 1 { "" } else { "s" };

        if lo == hi {
            write!(f, "{} {}{}", lo, unit, plural)
        } else {
            write!(f, "{}-{} {}{}", lo, hi, unit, plural)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_case_insensitive() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_parse_rejects_unknown() {
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, CraftError::InvalidArgument { ref value, .. } if value == "extreme"));
    }

    #[test]
    fn test_difficulty_parse_is_exact() {
        for padded in [" easy ", "easy ", "\thard", ""] {
            let err = padded.parse::<Difficulty>().unwrap_err();
            assert!(matches!(err, CraftError::InvalidArgument { ref value, .. } if value == padded));
        }
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(TimeEstimate::range(20, 15).is_err());
        assert_eq!(TimeEstimate::range(10, 10).unwrap(), TimeEstimate::fixed(10));
    }

    #[test]
    fn test_total_of_fixed_stays_fixed() {
        let total = TimeEstimate::total([TimeEstimate::fixed(5), TimeEstimate::fixed(5)]).unwrap();
        assert_eq!(total, TimeEstimate::fixed(10));
    }

    #[test]
    fn test_total_of_mixed_is_range() {
        let total = TimeEstimate::total([
            TimeEstimate::fixed(5),
            TimeEstimate::range(15, 20).unwrap(),
            TimeEstimate::range(30, 45).unwrap(),
        ])
        .unwrap();
        assert_eq!(total, TimeEstimate::Range { min: 50, max: 70 });
    }

    #[test]
    fn test_empty_total_is_zero() {
        let total = TimeEstimate::total(std::iter::empty()).unwrap();
        assert_eq!(total, TimeEstimate::ZERO);
        assert!(total.is_fixed());
    }

    #[test]
    fn test_total_overflow_is_error() {
        let big = TimeEstimate::fixed(u32::MAX);
        assert_eq!(TimeEstimate::total([big, big]), Err(CraftError::TimeOverflow));
        assert_eq!(big.checked_add(TimeEstimate::fixed(1)), None);

        // Only the upper bound overflows.
        let wide = TimeEstimate::range(1, u32::MAX).unwrap();
        assert_eq!(
            TimeEstimate::total([wide, TimeEstimate::fixed(1)]),
            Err(CraftError::TimeOverflow)
        );
        assert_eq!(
            TimeEstimate::total([big, TimeEstimate::ZERO]),
            Ok(TimeEstimate::fixed(u32::MAX))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeEstimate::fixed(5).to_string(), "5 minutes");
        assert_eq!(TimeEstimate::fixed(1).to_string(), "1 minute");
        assert_eq!(TimeEstimate::range(15, 20).unwrap().to_string(), "15-20 minutes");
        assert_eq!(TimeEstimate::range(60, 120).unwrap().to_string(), "1-2 hours");
        assert_eq!(TimeEstimate::fixed(60).to_string(), "1 hour");
        assert_eq!(TimeEstimate::range(45, 120).unwrap().to_string(), "45-120 minutes");
    }

    #[test]
    fn test_max_hours() {
        assert_eq!(TimeEstimate::range(45, 65).unwrap().max_hours(), 1.08);
        assert_eq!(TimeEstimate::ZERO.max_hours(), 0.0);
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_value(TimeEstimate::range(15, 20).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "range", "min": 15, "max": 20}));

        let fixed: TimeEstimate =
            serde_json::from_value(serde_json::json!({"kind": "fixed", "minutes": 5})).unwrap();
        assert_eq!(fixed, TimeEstimate::fixed(5));
    }
}
