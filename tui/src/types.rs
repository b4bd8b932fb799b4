//! Core data types for GradePoint.
//!
//! A [`GradeEntry`] is one row of user input: a grade-points value and a
//! credit-hours value, both kept as raw strings so that partially typed or
//! empty input is valid transient state. Parsing happens only when a
//! calculation is requested.

/// Identifier for a field within a [`GradeEntry`].
///
/// Used by the list `update` operation and by focus tracking in the TUI to
/// name which of the two inputs of a row is being addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradeField {
    /// The grade-points input (0.0 to 5.0 scale).
    #[default]
    Points,

    /// The credit-hours input.
    Credits,
}

/// One row of user input representing a single course.
///
/// Both values are stored as the raw text the user typed. Empty fields are
/// valid until a calculation is requested; the calculator parses them
/// permissively (unparsable input becomes NaN).
///
/// The `id` is unique within the containing list and is used only for
/// identity when updating or removing rows. It carries no ordering meaning.
///
/// # Example
///
/// ```
/// use gradepoint_tui::types::{GradeEntry, GradeField};
///
/// let mut entry = GradeEntry::new(1);
/// assert!(entry.points.is_empty());
///
/// entry.set(GradeField::Points, "4.0".to_string());
/// entry.set(GradeField::Credits, "3".to_string());
/// assert_eq!(entry.parsed_points(), 4.0);
/// assert_eq!(entry.parsed_credits(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeEntry {
    /// Identifier unique within the containing list.
    pub id: u32,

    /// Raw grade-points input, possibly empty or unparsable.
    pub points: String,

    /// Raw credit-hours input, possibly empty or unparsable.
    pub credits: String,
}

impl GradeEntry {
    /// Creates an entry with the given id and empty fields.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            points: String::new(),
            credits: String::new(),
        }
    }

    /// Creates an entry with the given field values, mainly for tests.
    #[must_use]
    pub fn with_values(id: u32, points: &str, credits: &str) -> Self {
        Self {
            id,
            points: points.to_string(),
            credits: credits.to_string(),
        }
    }

    /// Returns a reference to the named field's raw value.
    #[must_use]
    pub fn get(&self, field: GradeField) -> &str {
        match field {
            GradeField::Points => &self.points,
            GradeField::Credits => &self.credits,
        }
    }

    /// Replaces the named field's raw value. No validation is performed.
    pub fn set(&mut self, field: GradeField, value: String) {
        match field {
            GradeField::Points => self.points = value,
            GradeField::Credits => self.credits = value,
        }
    }

    /// Parses the points field, yielding NaN for empty or unparsable input.
    #[must_use]
    pub fn parsed_points(&self) -> f64 {
        parse_decimal(&self.points)
    }

    /// Parses the credits field, yielding NaN for empty or unparsable input.
    #[must_use]
    pub fn parsed_credits(&self) -> f64 {
        parse_decimal(&self.credits)
    }
}

/// Permissive decimal parse: trims whitespace and maps any parse failure
/// (including the empty string) to NaN rather than an error.
///
/// NaN compares false against every threshold, so unparsable fields pass
/// the range checks. This mirrors the permissive behavior the validation
/// rules are specified against.
fn parse_decimal(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_has_empty_fields() {
        let entry = GradeEntry::new(7);
        assert_eq!(entry.id, 7);
        assert!(entry.points.is_empty());
        assert!(entry.credits.is_empty());
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut entry = GradeEntry::new(1);
        entry.set(GradeField::Points, "3.5".to_string());
        entry.set(GradeField::Credits, "2".to_string());
        assert_eq!(entry.get(GradeField::Points), "3.5");
        assert_eq!(entry.get(GradeField::Credits), "2");
    }

    #[test]
    fn parsed_points_valid_decimal() {
        let entry = GradeEntry::with_values(1, "4.25", "3");
        assert_eq!(entry.parsed_points(), 4.25);
    }

    #[test]
    fn parsed_fields_trim_whitespace() {
        let entry = GradeEntry::with_values(1, "  4.0 ", " 3\t");
        assert_eq!(entry.parsed_points(), 4.0);
        assert_eq!(entry.parsed_credits(), 3.0);
    }

    #[test]
    fn parsed_empty_field_is_nan() {
        let entry = GradeEntry::new(1);
        assert!(entry.parsed_points().is_nan());
        assert!(entry.parsed_credits().is_nan());
    }

    #[test]
    fn parsed_garbage_is_nan() {
        let entry = GradeEntry::with_values(1, "abc", "1.2.3");
        assert!(entry.parsed_points().is_nan());
        assert!(entry.parsed_credits().is_nan());
    }

    #[test]
    fn parsed_negative_credits() {
        let entry = GradeEntry::with_values(1, "4", "-2");
        assert_eq!(entry.parsed_credits(), -2.0);
    }

    #[test]
    fn grade_field_default_is_points() {
        assert_eq!(GradeField::default(), GradeField::Points);
    }
}
