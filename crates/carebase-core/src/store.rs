//! In-memory record store backing a single list view.
//!
//! One store instance is owned exclusively by one view; there is no
//! cross-view or cross-session synchronization. Population happens in
//! bulk from a remote fetch ([`RecordStore::replace_all`]) or record by
//! record from add forms.

use crate::models::Identified;

/// Ordered collection of domain records, addressed by id.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Identified> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Replace the whole collection (bulk fetch result).
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Append one record. Id uniqueness is caller-assigned and not
    /// validated here, mirroring the backend contract.
    pub fn add(&mut self, record: R) {
        self.records.push(record);
    }

    /// Replace the record with the same id. Returns whether one matched.
    pub fn update(&mut self, record: R) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
