//! Doctor Data Structures
//!
//! Directory records for the clinic's medical staff.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::error::SharedError;
use crate::shared::models::{non_empty, parse_bounded, SortOrder};

/// Availability of a doctor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DoctorStatus {
    Active,
    OnLeave,
    Inactive,
}

impl Default for DoctorStatus {
    fn default() -> Self {
        DoctorStatus::Active
    }
}

impl DoctorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorStatus::Active => "active",
            DoctorStatus::OnLeave => "on_leave",
            DoctorStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for DoctorStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DoctorStatus::Active),
            "on_leave" => Ok(DoctorStatus::OnLeave),
            "inactive" => Ok(DoctorStatus::Inactive),
            other => Err(SharedError::unknown("doctor status", other)),
        }
    }
}

impl TryFrom<String> for DoctorStatus {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A stored doctor
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub experience: String,
    pub education: String,
    pub bio: String,
    pub avatar: String,
    pub license_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub gender: String,
    #[cfg_attr(feature = "ssr", sqlx(try_from = "String"))]
    pub status: DoctorStatus,
    pub certifications: String,
    /// Opaque schedule blob, usually JSON written by the admin UI
    pub working_hours: String,
    /// Minor currency units
    pub consultation_price: i64,
    pub patient_count: i64,
    pub appointment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create/update payload
///
/// There are no counter fields here: `patient_count` and
/// `appointment_count` belong to the server, and unknown JSON keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DoctorInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub experience: String,
    pub education: String,
    pub bio: String,
    pub avatar: String,
    pub license_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub gender: String,
    pub status: Option<String>,
    pub certifications: String,
    pub working_hours: String,
    pub consultation_price: i64,
}

/// Validated, and after sanitization persistable, doctor fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub experience: String,
    pub education: String,
    pub bio: String,
    pub avatar: String,
    pub license_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub gender: String,
    pub status: DoctorStatus,
    pub certifications: String,
    pub working_hours: String,
    pub consultation_price: i64,
}

/// Columns a doctor listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorSortField {
    Name,
    Specialty,
    CreatedAt,
    PatientCount,
    AppointmentCount,
}

impl DoctorSortField {
    pub fn column(&self) -> &'static str {
        match self {
            DoctorSortField::Name => "name",
            DoctorSortField::Specialty => "specialty",
            DoctorSortField::CreatedAt => "created_at",
            DoctorSortField::PatientCount => "patient_count",
            DoctorSortField::AppointmentCount => "appointment_count",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(DoctorSortField::Name),
            "specialty" => Some(DoctorSortField::Specialty),
            "created_at" => Some(DoctorSortField::CreatedAt),
            "patient_count" => Some(DoctorSortField::PatientCount),
            "appointment_count" => Some(DoctorSortField::AppointmentCount),
            _ => None,
        }
    }
}

/// Typed listing filter for doctors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<DoctorStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<DoctorSortField>,
    pub sort_order: Option<SortOrder>,
}

/// Doctor listing query string, exactly as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorQuery {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl DoctorQuery {
    pub fn into_filter(self, default_limit: i64) -> Result<DoctorFilter, SharedError> {
        let status = non_empty(self.status)
            .map(|s| s.trim().parse::<DoctorStatus>())
            .transpose()?;

        Ok(DoctorFilter {
            search: non_empty(self.search),
            specialty: non_empty(self.specialty),
            status,
            limit: parse_bounded(self.limit.as_deref(), 1).or(Some(default_limit)),
            offset: parse_bounded(self.offset.as_deref(), 0),
            sort_by: self.sort_by.as_deref().and_then(DoctorSortField::parse),
            sort_order: self.sort_order.as_deref().and_then(SortOrder::parse),
        })
    }
}
