//! GPA calculation over a list of grade entries.
//!
//! The calculator is a pure function: it parses each entry's raw fields,
//! validates them in list order, and computes the credit-weighted mean of
//! the grade-points values. It never panics and always returns a definite
//! [`Ok`] or [`Err`] outcome.
//!
//! # Validation order
//!
//! Entries are checked one at a time, in list order, points before credits,
//! short-circuiting on the first violation. Only that first violation is
//! reported.
//!
//! # Permissive parsing
//!
//! Empty or unparsable fields parse to NaN. NaN is not greater than 5.0 and
//! not less than or equal to zero, so such fields pass both range checks and
//! flow into the weighted sum, where they propagate. A GPA computed from NaN
//! input renders as `NaN`. This is a documented permissive edge case, kept
//! deliberately rather than silently tightened.

use crate::error::CalcError;
use crate::types::GradeEntry;

/// Upper bound of the grade-points scale.
pub const SCALE_MAX: f64 = 5.0;

/// A computed grade-point average, rounded to two decimal places.
///
/// # Example
///
/// ```
/// use gradepoint_tui::gpa::{calculate, Gpa};
/// use gradepoint_tui::types::GradeEntry;
///
/// let entries = [
///     GradeEntry::with_values(1, "4", "3"),
///     GradeEntry::with_values(2, "3", "2"),
/// ];
/// let gpa = calculate(&entries).unwrap();
/// assert_eq!(gpa.value(), 3.6);
/// assert_eq!(gpa.to_string(), "3.60");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa(f64);

impl Gpa {
    /// Returns the rounded numeric value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Gpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Computes the credit-weighted GPA over `entries`.
///
/// Validates every entry in list order first, then computes
/// `Σ(points_i × credits_i) / Σ(credits_i)`. A zero credit total (which
/// includes the empty list) yields a GPA of `0` rather than dividing by
/// zero.
///
/// # Errors
///
/// - [`CalcError::PointsOutOfRange`] if any entry's points exceed 5.0
/// - [`CalcError::NonPositiveCredits`] if any entry's credits parse to a
///   number that is zero or negative
/// - [`CalcError::ResultOutOfRange`] if the computed average exceeds 5.0
///
/// # Example
///
/// ```
/// use gradepoint_tui::gpa::calculate;
/// use gradepoint_tui::types::GradeEntry;
///
/// let entries = [GradeEntry::with_values(1, "4", "3")];
/// assert_eq!(calculate(&entries).unwrap().to_string(), "4.00");
///
/// let entries = [GradeEntry::with_values(1, "6", "3")];
/// assert!(calculate(&entries).is_err());
/// ```
pub fn calculate(entries: &[GradeEntry]) -> Result<Gpa, CalcError> {
    for entry in entries {
        // NaN fails both comparisons, so empty fields pass through here.
        if entry.parsed_points() > SCALE_MAX {
            return Err(CalcError::PointsOutOfRange);
        }
        if entry.parsed_credits() <= 0.0 {
            return Err(CalcError::NonPositiveCredits);
        }
    }

    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    for entry in entries {
        let credits = entry.parsed_credits();
        total_points += entry.parsed_points() * credits;
        total_credits += credits;
    }

    let gpa = if total_credits == 0.0 {
        0.0
    } else {
        total_points / total_credits
    };

    if gpa > SCALE_MAX {
        return Err(CalcError::ResultOutOfRange);
    }

    Ok(Gpa(round2(gpa)))
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, points: &str, credits: &str) -> GradeEntry {
        GradeEntry::with_values(id, points, credits)
    }

    #[test]
    fn empty_list_yields_zero() {
        let gpa = calculate(&[]).unwrap();
        assert_eq!(gpa.value(), 0.0);
        assert_eq!(gpa.to_string(), "0.00");
    }

    #[test]
    fn single_entry() {
        let gpa = calculate(&[entry(1, "4", "3")]).unwrap();
        assert_eq!(gpa.value(), 4.0);
        assert_eq!(gpa.to_string(), "4.00");
    }

    #[test]
    fn weighted_average_of_two_entries() {
        // (4*3 + 3*2) / (3 + 2) = 18/5 = 3.6
        let gpa = calculate(&[entry(1, "4", "3"), entry(2, "3", "2")]).unwrap();
        assert_eq!(gpa.value(), 3.6);
        assert_eq!(gpa.to_string(), "3.60");
    }

    #[test]
    fn result_is_rounded_to_two_places() {
        // (4*1 + 3*2) / 3 = 10/3 = 3.3333...
        let gpa = calculate(&[entry(1, "4", "1"), entry(2, "3", "2")]).unwrap();
        assert_eq!(gpa.value(), 3.33);
    }

    #[test]
    fn points_above_scale_fail() {
        let err = calculate(&[entry(1, "5.1", "3")]).unwrap_err();
        assert_eq!(err, CalcError::PointsOutOfRange);
    }

    #[test]
    fn points_at_scale_max_pass() {
        let gpa = calculate(&[entry(1, "5.0", "3")]).unwrap();
        assert_eq!(gpa.value(), 5.0);
    }

    #[test]
    fn points_violation_reported_regardless_of_position() {
        let err = calculate(&[entry(1, "4", "3"), entry(2, "7", "1")]).unwrap_err();
        assert_eq!(err, CalcError::PointsOutOfRange);
    }

    #[test]
    fn zero_credits_fail() {
        let err = calculate(&[entry(1, "4", "0")]).unwrap_err();
        assert_eq!(err, CalcError::NonPositiveCredits);
    }

    #[test]
    fn negative_credits_fail() {
        let err = calculate(&[entry(1, "4", "-3")]).unwrap_err();
        assert_eq!(err, CalcError::NonPositiveCredits);
    }

    #[test]
    fn first_violation_in_list_order_wins() {
        // Entry 1 has bad credits, entry 2 has bad points. The credits
        // violation is reported because entry 1 is checked first.
        let err = calculate(&[entry(1, "4", "0"), entry(2, "9", "3")]).unwrap_err();
        assert_eq!(err, CalcError::NonPositiveCredits);
    }

    #[test]
    fn points_checked_before_credits_within_an_entry() {
        let err = calculate(&[entry(1, "9", "0")]).unwrap_err();
        assert_eq!(err, CalcError::PointsOutOfRange);
    }

    #[test]
    fn empty_points_pass_validation_and_propagate_nan() {
        // NaN > 5.0 is false, so empty points survive validation. The NaN
        // then propagates through the weighted sum.
        let result = calculate(&[entry(1, "", "3")]).unwrap();
        assert!(result.value().is_nan());
        assert_eq!(result.to_string(), "NaN");
    }

    #[test]
    fn empty_credits_pass_validation_and_propagate_nan() {
        // NaN <= 0.0 is false, so empty credits survive validation too.
        let result = calculate(&[entry(1, "4", "")]).unwrap();
        assert!(result.value().is_nan());
    }

    #[test]
    fn gpa_stays_in_range_for_valid_inputs() {
        let cases = [
            vec![entry(1, "0", "1")],
            vec![entry(1, "5", "1"), entry(2, "0", "4")],
            vec![entry(1, "2.5", "3"), entry(2, "3.7", "1"), entry(3, "1", "2")],
        ];
        for entries in cases {
            let gpa = calculate(&entries).unwrap().value();
            assert!((0.0..=5.0).contains(&gpa), "GPA {gpa} out of [0,5]");
        }
    }

    #[test]
    fn calculation_is_idempotent() {
        let entries = [entry(1, "4", "3"), entry(2, "2.5", "2")];
        let first = calculate(&entries).unwrap();
        let second = calculate(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn round2_rounds_to_two_places() {
        assert_eq!(round2(3.336), 3.34);
        assert_eq!(round2(3.333), 3.33);
        assert_eq!(round2(0.0), 0.0);
    }
}
