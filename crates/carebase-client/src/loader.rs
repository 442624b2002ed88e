//! List loading with real pending state.
//!
//! The loading flag is derived from in-flight fetches, never simulated
//! with timers. Overlapping refreshes are sequenced with generation
//! tickets: only the newest refresh may write its result to the store,
//! so a slow older response cannot clobber a newer one.

use std::future::Future;

use log::{debug, warn};

use carebase_core::models::{Appointment, Doctor, Identified, InventoryItem, Patient};
use carebase_core::store::RecordStore;

use crate::api::{BackendClient, ClientResult};

/// Source of bulk record fetches; implemented by [`BackendClient`] per
/// record type.
pub trait RecordSource<R> {
    fn fetch_all(&self) -> impl Future<Output = ClientResult<Vec<R>>> + Send;
}

impl RecordSource<Patient> for BackendClient {
    async fn fetch_all(&self) -> ClientResult<Vec<Patient>> {
        self.list_patients().await
    }
}

impl RecordSource<Doctor> for BackendClient {
    async fn fetch_all(&self) -> ClientResult<Vec<Doctor>> {
        self.list_doctors().await
    }
}

impl RecordSource<Appointment> for BackendClient {
    async fn fetch_all(&self) -> ClientResult<Vec<Appointment>> {
        self.list_appointments().await
    }
}

impl RecordSource<InventoryItem> for BackendClient {
    async fn fetch_all(&self) -> ClientResult<Vec<InventoryItem>> {
        self.list_inventory().await
    }
}

/// Handed out per refresh; completions carrying a superseded ticket are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

/// Owns a record store and sequences refreshes into it.
#[derive(Debug)]
pub struct ListLoader<R> {
    store: RecordStore<R>,
    generation: u64,
    in_flight: usize,
}

impl<R: Identified> Default for ListLoader<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Identified> ListLoader<R> {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            generation: 0,
            in_flight: 0,
        }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    /// Mutable access for local add/edit submissions between refreshes.
    pub fn store_mut(&mut self) -> &mut RecordStore<R> {
        &mut self.store
    }

    /// True while any fetch is outstanding; drives the skeleton rows.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Start a refresh. A newer ticket supersedes every earlier one.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.in_flight += 1;
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Apply a completed fetch. Returns whether the store was updated:
    /// superseded tickets and failed fetches leave it at its pre-call
    /// contents.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: ClientResult<Vec<R>>,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket.generation != self.generation {
            debug!(
                "dropping superseded refresh (ticket {} < current {})",
                ticket.generation, self.generation
            );
            return false;
        }
        match result {
            Ok(records) => {
                self.store.replace_all(records);
                true
            }
            Err(err) => {
                warn!("refresh failed: {err}");
                false
            }
        }
    }

    /// Fetch from `source` and apply the result, subject to the same
    /// supersession rule.
    pub async fn refresh<S: RecordSource<R>>(&mut self, source: &S) -> bool {
        let ticket = self.begin_refresh();
        let result = source.fetch_all().await;
        self.complete_refresh(ticket, result)
    }
}
