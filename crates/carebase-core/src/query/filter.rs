//! Filter predicate set: text search, field equality and date range,
//! combined conjunctively. There is no OR/NOT composition.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ListRecord;

/// Dropdown sentinel meaning "no constraint" (compared case-insensitively).
pub const ALL_SENTINEL: &str = "all";

/// Inclusive date range; a missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Inclusive containment check.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Current values of every filter input on a list view.
///
/// Absence (or empty string / the `"all"` sentinel) means "no constraint";
/// with every filter empty, all records pass in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring search over the record's designated fields
    pub search: String,
    /// Equality constraints keyed by field name (e.g. "gender", "status")
    pub fields: BTreeMap<String, String>,
    /// Date-range constraint on the record's designated date
    pub date_range: DateRange,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no filter constrains anything.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.fields.is_empty() && self.date_range.is_unbounded()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Set an equality constraint. Empty values and the `"all"` sentinel
    /// clear the constraint instead.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL) {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, value);
        }
    }

    pub fn clear_field(&mut self, key: &str) {
        self.fields.remove(key);
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    /// Conjunction of all active predicates.
    pub fn matches<R: ListRecord>(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_fields(record) && self.matches_date(record)
    }

    /// Filter a collection, preserving order.
    pub fn apply<'a, R: ListRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    fn matches_search<R: ListRecord>(&self, record: &R) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record
            .search_haystacks()
            .iter()
            .any(|hay| hay.to_lowercase().contains(&needle))
    }

    fn matches_fields<R: ListRecord>(&self, record: &R) -> bool {
        self.fields
            .iter()
            .all(|(key, want)| record.field(key).as_deref() == Some(want.as_str()))
    }

    fn matches_date<R: ListRecord>(&self, record: &R) -> bool {
        if self.date_range.is_unbounded() {
            return true;
        }
        // A record with no date fails any active date constraint.
        match record.date() {
            Some(date) => self.date_range.contains(date),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Patient};

    fn patients() -> Vec<Patient> {
        let mut a = Patient::new("Asha Rao".into(), Gender::Female);
        a.id = "10000001".into();
        let mut b = Patient::new("Vikram Iyer".into(), Gender::Male);
        b.id = "10000002".into();
        let mut c = Patient::new("Radha Nair".into(), Gender::Female);
        c.id = "10000003".into();
        vec![a, b, c]
    }

    #[test]
    fn test_empty_filter_passes_everything_in_order() {
        let records = patients();
        let filter = FilterState::new();
        let out = filter.apply(&records);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].id, "10000001");
        assert_eq!(out[2].id, "10000003");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = patients();
        let mut filter = FilterState::new();
        filter.set_search("rA");
        let out = filter.apply(&records);
        // "Asha Rao" and "Radha Nair" both contain "ra" case-insensitively.
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.name.to_lowercase().contains("ra")));
    }

    #[test]
    fn test_search_matches_id_field() {
        let records = patients();
        let mut filter = FilterState::new();
        filter.set_search("10000002");
        let out = filter.apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Vikram Iyer");
    }

    #[test]
    fn test_all_sentinel_clears_constraint() {
        let records = patients();
        let mut filter = FilterState::new();
        filter.set_field("gender", "Female");
        assert_eq!(filter.apply(&records).len(), 2);

        filter.set_field("gender", "All");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records).len(), 3);
    }

    #[test]
    fn test_unknown_field_key_excludes() {
        let records = patients();
        let mut filter = FilterState::new();
        filter.set_field("specialty", "Cardiology");
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let records = patients();
        let mut filter = FilterState::new();
        filter.set_field("gender", "Female");
        filter.set_search("nair");
        let out = filter.apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Radha Nair");
    }

    #[test]
    fn test_date_range_one_sided_bounds() {
        let day = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
        let range = DateRange::new(Some(day(10)), None);
        assert!(range.contains(day(10)));
        assert!(range.contains(day(25)));
        assert!(!range.contains(day(9)));

        let range = DateRange::new(None, Some(day(10)));
        assert!(range.contains(day(10)));
        assert!(!range.contains(day(11)));
    }
}
