//! Carebase Core Library
//!
//! Record-management core for the carebase clinic suite: domain models,
//! the shared list-query engine, in-memory record stores, add/edit draft
//! forms and the persisted login session.
//!
//! # Architecture
//!
//! ```text
//! Remote fetch ──▶ RecordStore (ordered, per-view)
//!                        │
//!    user edits filter   ▼
//!   ──────────────▶ FilterState ──▶ Paginator ──▶ visible Page
//!                   (AND-combined     (clamped
//!                    predicates)       cursor)
//!
//!   Add/edit form ──▶ Draft ──build()──▶ append / replace-by-id
//! ```
//!
//! Every list view (patients, doctors, appointments, inventory) drives
//! the same [`query::ListQuery`] engine; nothing is re-derived per page.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Doctor, Appointment, InventoryItem)
//! - [`query`]: Filter predicate set + paginator
//! - [`store`]: In-memory ordered record collections
//! - [`forms`]: Draft objects behind add/edit forms
//! - [`session`]: Persisted endpoint/role session

pub mod forms;
pub mod models;
pub mod query;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use forms::{
    submit_add, submit_edit, AppointmentDraft, DoctorDraft, DraftForm, InventoryDraft,
    PatientDraft,
};
pub use models::{
    Appointment, AppointmentStatus, Doctor, DoctorStatus, Gender, Identified, InventoryItem,
    ListRecord, MedicalHistoryEntry, Patient, StockStatus, TestReport,
};
pub use query::{DateRange, FilterState, ListQuery, Page, PageSize, Paginator};
pub use session::{Role, Session, SessionError};
pub use store::RecordStore;
