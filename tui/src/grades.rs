//! Grade list state and mutation operations.
//!
//! [`GradeList`] owns the ordered sequence of [`GradeEntry`] rows plus the
//! outcome of the most recent calculation. All mutations go through the
//! operations defined here; the TUI layer holds exactly one list and never
//! shares it.

use crate::error::CalcError;
use crate::gpa::{self, Gpa};
use crate::types::{GradeEntry, GradeField};

/// Outcome of the most recent calculation: a GPA on success, a validation
/// failure otherwise. Mutually exclusive by construction.
pub type CalculationResult = Result<Gpa, CalcError>;

/// Ordered list of grade entries with add/remove/update/clear operations.
///
/// A new list contains a single empty entry for display purposes. Removal
/// is allowed to empty the list entirely; no replacement entry is forced.
///
/// # Example
///
/// ```
/// use gradepoint_tui::grades::GradeList;
/// use gradepoint_tui::types::GradeField;
///
/// let mut list = GradeList::new();
/// let id = list.entries()[0].id;
/// list.update(id, GradeField::Points, "4".to_string());
/// list.update(id, GradeField::Credits, "3".to_string());
///
/// let gpa = list.calculate().unwrap();
/// assert_eq!(gpa.to_string(), "4.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GradeList {
    entries: Vec<GradeEntry>,
    last_result: Option<CalculationResult>,
}

impl GradeList {
    /// Creates a list with a single empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![GradeEntry::new(1)],
            last_result: None,
        }
    }

    /// Returns the entries in list order.
    #[must_use]
    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the outcome of the most recent calculation, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }

    /// Appends a new entry with empty fields and returns its id.
    ///
    /// Ids are allocated as max(existing) + 1, so they stay unique within
    /// the list even after removals.
    pub fn add(&mut self) -> u32 {
        let id = self.next_id();
        self.entries.push(GradeEntry::new(id));
        id
    }

    /// Removes the entry with the given id.
    ///
    /// Removing the last remaining entry leaves the list empty. Returns
    /// `true` if an entry was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Replaces the named field of the entry with the given id.
    ///
    /// No validation is performed at update time; validation happens when a
    /// calculation is requested. Returns `true` if an entry matched.
    pub fn update(&mut self, id: u32, field: GradeField, value: String) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Resets the list to a single empty entry and clears any prior result.
    pub fn clear(&mut self) {
        self.entries = vec![GradeEntry::new(1)];
        self.last_result = None;
    }

    /// Runs the calculator over the current entries and records the outcome.
    pub fn calculate(&mut self) -> CalculationResult {
        let result = gpa::calculate(&self.entries);
        self.last_result = Some(result);
        result
    }

    /// Sum of the parsable credit values, for the footer display.
    ///
    /// Unparsable fields are skipped here rather than poisoning the total;
    /// this is display-only and has no effect on calculation semantics.
    #[must_use]
    pub fn credit_total(&self) -> f64 {
        self.entries
            .iter()
            .map(GradeEntry::parsed_credits)
            .filter(|credits| credits.is_finite())
            .sum()
    }

    fn next_id(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_has_one_empty_entry() {
        let list = GradeList::new();
        assert_eq!(list.len(), 1);
        assert!(list.entries()[0].points.is_empty());
        assert!(list.entries()[0].credits.is_empty());
        assert!(list.last_result().is_none());
    }

    #[test]
    fn add_appends_with_unique_id() {
        let mut list = GradeList::new();
        let first = list.entries()[0].id;
        let second = list.add();
        let third = list.add();

        assert_eq!(list.len(), 3);
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert!(list.entries()[2].points.is_empty());
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut list = GradeList::new();
        let a = list.entries()[0].id;
        let b = list.add();
        list.remove(a);

        // A naive length-based allocator would reuse `b` here.
        let c = list.add();
        assert_ne!(b, c);
    }

    #[test]
    fn remove_deletes_matching_entry() {
        let mut list = GradeList::new();
        let keep = list.entries()[0].id;
        let gone = list.add();

        assert!(list.remove(gone));
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].id, keep);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = GradeList::new();
        assert!(!list.remove(999));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_last_entry_leaves_list_empty() {
        let mut list = GradeList::new();
        let only = list.entries()[0].id;
        assert!(list.remove(only));
        assert!(list.is_empty());
    }

    #[test]
    fn update_replaces_named_field_only() {
        let mut list = GradeList::new();
        let id = list.entries()[0].id;

        assert!(list.update(id, GradeField::Points, "4.0".to_string()));
        assert_eq!(list.entries()[0].points, "4.0");
        assert!(list.entries()[0].credits.is_empty());
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut list = GradeList::new();
        assert!(!list.update(42, GradeField::Points, "4".to_string()));
    }

    #[test]
    fn clear_resets_to_single_empty_entry() {
        let mut list = GradeList::new();
        let id = list.entries()[0].id;
        list.update(id, GradeField::Points, "4".to_string());
        list.update(id, GradeField::Credits, "3".to_string());
        list.add();
        let _ = list.calculate();
        assert!(list.last_result().is_some());

        list.clear();
        assert_eq!(list.len(), 1);
        assert!(list.entries()[0].points.is_empty());
        assert!(list.entries()[0].credits.is_empty());
        assert!(list.last_result().is_none());
    }

    #[test]
    fn calculate_records_success() {
        let mut list = GradeList::new();
        let id = list.entries()[0].id;
        list.update(id, GradeField::Points, "4".to_string());
        list.update(id, GradeField::Credits, "3".to_string());

        let result = list.calculate();
        assert_eq!(result.unwrap().to_string(), "4.00");
        assert_eq!(list.last_result(), Some(&result));
    }

    #[test]
    fn calculate_records_failure() {
        let mut list = GradeList::new();
        let id = list.entries()[0].id;
        list.update(id, GradeField::Points, "6".to_string());
        list.update(id, GradeField::Credits, "3".to_string());

        let result = list.calculate();
        assert_eq!(result.unwrap_err(), CalcError::PointsOutOfRange);
        assert!(matches!(list.last_result(), Some(Err(_))));
    }

    #[test]
    fn calculate_on_empty_list_yields_zero() {
        let mut list = GradeList::new();
        let only = list.entries()[0].id;
        list.remove(only);

        let gpa = list.calculate().unwrap();
        assert_eq!(gpa.value(), 0.0);
    }

    #[test]
    fn repeated_calculation_is_stable() {
        let mut list = GradeList::new();
        let id = list.entries()[0].id;
        list.update(id, GradeField::Points, "3.5".to_string());
        list.update(id, GradeField::Credits, "2".to_string());

        let first = list.calculate();
        let second = list.calculate();
        assert_eq!(first, second);
    }

    #[test]
    fn credit_total_skips_unparsable() {
        let mut list = GradeList::new();
        let a = list.entries()[0].id;
        let b = list.add();
        let c = list.add();
        list.update(a, GradeField::Credits, "3".to_string());
        list.update(b, GradeField::Credits, "oops".to_string());
        list.update(c, GradeField::Credits, "2.5".to_string());

        assert_eq!(list.credit_total(), 5.5);
    }
}
