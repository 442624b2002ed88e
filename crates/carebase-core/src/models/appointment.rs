//! Appointment records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::{generate_record_id, Identified, ListRecord};

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// String form the equality filter matches against.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// A booked appointment between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Caller-assigned 8-digit id
    pub id: String,
    /// Patient record id
    pub patient_id: String,
    /// Patient display name (denormalized for list rendering)
    pub patient_name: String,
    /// Doctor display name
    pub doctor_name: String,
    /// Doctor specialty at booking time
    pub specialty: String,
    /// Appointment date; the date-range filter applies to this
    pub date: NaiveDate,
    /// Time slot label (e.g. "10:30 AM")
    pub time_slot: String,
    pub status: AppointmentStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Book a new appointment, starting in [`AppointmentStatus::Pending`].
    pub fn new(
        patient_id: String,
        patient_name: String,
        doctor_name: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: generate_record_id(),
            patient_id,
            patient_name,
            doctor_name,
            specialty: String::new(),
            date,
            time_slot: String::new(),
            status: AppointmentStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

impl Identified for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Appointment {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.patient_name, &self.id, &self.doctor_name]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.as_str().to_string()),
            "specialty" => Some(self.specialty.clone()),
            "doctor" => Some(self.doctor_name.clone()),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}
