//! Doctor records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::patient::Gender;
use super::record::{generate_record_id, Identified, ListRecord};

/// Doctor availability as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoctorStatus {
    Available,
    Busy,
    OffDuty,
}

impl DoctorStatus {
    /// String form the equality filter matches against.
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorStatus::Available => "Available",
            DoctorStatus::Busy => "Busy",
            DoctorStatus::OffDuty => "Off Duty",
        }
    }
}

/// A doctor record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Caller-assigned 8-digit id
    pub id: String,
    /// Full name
    pub name: String,
    /// Medical specialty (e.g. "Cardiology")
    pub specialty: String,
    pub gender: Gender,
    pub status: DoctorStatus,
    /// City or clinic location
    pub location: String,
    /// Years of practice
    pub years_experience: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Doctor {
    /// Create a new doctor with required fields and a fresh id.
    pub fn new(name: String, specialty: String, gender: Gender) -> Self {
        Self {
            id: generate_record_id(),
            name,
            specialty,
            gender,
            status: DoctorStatus::Available,
            location: String::new(),
            years_experience: 0,
            created_at: Utc::now(),
        }
    }
}

impl Identified for Doctor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Doctor {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "specialty" => Some(self.specialty.clone()),
            "gender" => Some(self.gender.as_str().to_string()),
            "status" => Some(self.status.as_str().to_string()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_doctor_defaults_available() {
        let doctor = Doctor::new("Meera Shah".into(), "Cardiology".into(), Gender::Female);
        assert_eq!(doctor.status, DoctorStatus::Available);
        assert_eq!(doctor.field("specialty").as_deref(), Some("Cardiology"));
        assert_eq!(doctor.field("status").as_deref(), Some("Available"));
    }
}
