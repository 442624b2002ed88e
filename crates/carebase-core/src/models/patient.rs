//! Patient records and their nested history/report entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::{generate_record_id, Identified, ListRecord};

/// Patient/doctor gender, as presented in the dashboard selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// String form the equality filter matches against.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// One entry in a patient's ordered medical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalHistoryEntry {
    /// Date of diagnosis or visit
    pub date: NaiveDate,
    /// Condition or diagnosis
    pub condition: String,
    /// Free-form clinician notes
    pub notes: Option<String>,
}

/// One entry in a patient's ordered test-report list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestReport {
    /// Date the test was taken
    pub date: NaiveDate,
    /// Test name (e.g. "CBC", "Lipid panel")
    pub title: String,
    /// Result summary
    pub result: String,
}

/// A patient record as held by the record store and the remote backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Caller-assigned 8-digit id
    pub id: String,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    pub gender: Gender,
    /// City or area
    pub location: String,
    /// Blood group (e.g. "O+", "AB-")
    pub blood_group: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Ordered medical history, oldest first
    pub medical_history: Vec<MedicalHistoryEntry>,
    /// Ordered test reports, oldest first
    pub test_reports: Vec<TestReport>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// Create a new patient with required fields and a fresh id.
    pub fn new(name: String, gender: Gender) -> Self {
        Self {
            id: generate_record_id(),
            name,
            age: 0,
            gender,
            location: String::new(),
            blood_group: String::new(),
            height_cm: 0.0,
            weight_kg: 0.0,
            medical_history: Vec::new(),
            test_reports: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a medical history entry.
    pub fn add_history_entry(&mut self, entry: MedicalHistoryEntry) {
        self.medical_history.push(entry);
    }

    /// Append a test report.
    pub fn add_test_report(&mut self, report: TestReport) {
        self.test_reports.push(report);
    }

    /// Body mass index, when both measurements are present.
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 || self.weight_kg <= 0.0 {
            return None;
        }
        let height_m = self.height_cm / 100.0;
        Some(self.weight_kg / (height_m * height_m))
    }
}

impl Identified for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Patient {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "gender" => Some(self.gender.as_str().to_string()),
            "blood_group" => Some(self.blood_group.clone()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }
}
