//! Add/edit draft forms.
//!
//! A draft is the transient object behind a form: every input lands in a
//! string field exactly as typed. `build()` coerces with lenient defaults
//! (numeric fields fall back to 0 on parse failure) — no validation errors
//! are ever raised. Submitting either appends the record or replaces the
//! one with the matching id.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    generate_record_id, Appointment, AppointmentStatus, Doctor, DoctorStatus, Gender, Identified,
    InventoryItem, MedicalHistoryEntry, Patient, StockStatus, TestReport,
};
use crate::store::RecordStore;

/// Parse a numeric form field, defaulting to zero on blank or bad input.
fn coerce_u32(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

fn coerce_f64(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

/// Parse a date input (`YYYY-MM-DD`); blank or malformed falls back to today.
fn coerce_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}

/// Parse an optional date input; blank or malformed means no date.
fn coerce_date_opt(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// A form draft that produces one record type on submit.
pub trait DraftForm {
    type Record: Identified;

    /// Coerce the captured fields into a record. Drafts without an id get
    /// a fresh one; drafts prefilled from an existing record keep its id
    /// and creation timestamp.
    fn build(self) -> Self::Record;
}

/// Append the draft's record to the store; returns the new record's id.
pub fn submit_add<D: DraftForm>(store: &mut RecordStore<D::Record>, draft: D) -> String {
    let record = draft.build();
    let id = record.id().to_string();
    store.add(record);
    id
}

/// Replace the record matching the draft's id. Returns whether a record
/// matched; when none does, the store is left untouched.
pub fn submit_edit<D: DraftForm>(store: &mut RecordStore<D::Record>, draft: D) -> bool {
    store.update(draft.build())
}

/// Draft behind the add/edit patient form.
#[derive(Debug, Clone, Default)]
pub struct PatientDraft {
    /// Present when editing; `None` assigns a fresh id on submit
    pub id: Option<String>,
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub location: String,
    pub blood_group: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub medical_history: Vec<MedicalHistoryEntry>,
    pub test_reports: Vec<TestReport>,
    /// Preserved across edits; set when prefilled from a record
    pub created_at: Option<DateTime<Utc>>,
}

impl PatientDraft {
    /// Prefill the form from an existing record (edit flow).
    pub fn from_record(patient: &Patient) -> Self {
        Self {
            id: Some(patient.id.clone()),
            name: patient.name.clone(),
            age: patient.age.to_string(),
            gender: Some(patient.gender),
            location: patient.location.clone(),
            blood_group: patient.blood_group.clone(),
            height_cm: patient.height_cm.to_string(),
            weight_kg: patient.weight_kg.to_string(),
            medical_history: patient.medical_history.clone(),
            test_reports: patient.test_reports.clone(),
            created_at: Some(patient.created_at),
        }
    }
}

impl DraftForm for PatientDraft {
    type Record = Patient;

    fn build(self) -> Patient {
        Patient {
            id: self.id.unwrap_or_else(generate_record_id),
            name: self.name,
            age: coerce_u32(&self.age),
            gender: self.gender.unwrap_or(Gender::Other),
            location: self.location,
            blood_group: self.blood_group,
            height_cm: coerce_f64(&self.height_cm),
            weight_kg: coerce_f64(&self.weight_kg),
            medical_history: self.medical_history,
            test_reports: self.test_reports,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Draft behind the add/edit doctor form.
#[derive(Debug, Clone, Default)]
pub struct DoctorDraft {
    pub id: Option<String>,
    pub name: String,
    pub specialty: String,
    pub gender: Option<Gender>,
    pub status: Option<DoctorStatus>,
    pub location: String,
    pub years_experience: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl DoctorDraft {
    pub fn from_record(doctor: &Doctor) -> Self {
        Self {
            id: Some(doctor.id.clone()),
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            gender: Some(doctor.gender),
            status: Some(doctor.status),
            location: doctor.location.clone(),
            years_experience: doctor.years_experience.to_string(),
            created_at: Some(doctor.created_at),
        }
    }
}

impl DraftForm for DoctorDraft {
    type Record = Doctor;

    fn build(self) -> Doctor {
        Doctor {
            id: self.id.unwrap_or_else(generate_record_id),
            name: self.name,
            specialty: self.specialty,
            gender: self.gender.unwrap_or(Gender::Other),
            status: self.status.unwrap_or(DoctorStatus::Available),
            location: self.location,
            years_experience: coerce_u32(&self.years_experience),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Draft behind the booking/edit appointment form.
#[derive(Debug, Clone, Default)]
pub struct AppointmentDraft {
    pub id: Option<String>,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub specialty: String,
    /// Date input as typed (`YYYY-MM-DD`)
    pub date: String,
    pub time_slot: String,
    pub status: Option<AppointmentStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

impl AppointmentDraft {
    pub fn from_record(appointment: &Appointment) -> Self {
        Self {
            id: Some(appointment.id.clone()),
            patient_id: appointment.patient_id.clone(),
            patient_name: appointment.patient_name.clone(),
            doctor_name: appointment.doctor_name.clone(),
            specialty: appointment.specialty.clone(),
            date: appointment.date.format("%Y-%m-%d").to_string(),
            time_slot: appointment.time_slot.clone(),
            status: Some(appointment.status),
            created_at: Some(appointment.created_at),
        }
    }
}

impl DraftForm for AppointmentDraft {
    type Record = Appointment;

    fn build(self) -> Appointment {
        Appointment {
            id: self.id.unwrap_or_else(generate_record_id),
            patient_id: self.patient_id,
            patient_name: self.patient_name,
            doctor_name: self.doctor_name,
            specialty: self.specialty,
            date: coerce_date(&self.date),
            time_slot: self.time_slot,
            status: self.status.unwrap_or(AppointmentStatus::Pending),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Draft behind the add/edit inventory form.
#[derive(Debug, Clone, Default)]
pub struct InventoryDraft {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit_price: String,
    /// Optional expiry date input (`YYYY-MM-DD`)
    pub expires_on: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl InventoryDraft {
    pub fn from_record(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
            expires_on: item
                .expires_on
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            created_at: Some(item.created_at),
        }
    }
}

impl DraftForm for InventoryDraft {
    type Record = InventoryItem;

    fn build(self) -> InventoryItem {
        let quantity = coerce_u32(&self.quantity);
        InventoryItem {
            id: self.id.unwrap_or_else(generate_record_id),
            name: self.name,
            category: self.category,
            quantity,
            unit_price: coerce_f64(&self.unit_price),
            // Stock status is always derived, never typed.
            status: StockStatus::for_quantity(quantity),
            expires_on: coerce_date_opt(&self.expires_on),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
