//! Doctor HTTP Handlers
//!
//! Reads are open to any logged-in user; writes need an admin.

use axum::extract::{Path, Query, State};

use crate::backend::doctors::repository::DoctorRepository;
use crate::backend::error::BackendError;
use crate::backend::extract::{parse_id, ApiJson};
use crate::backend::middleware::{AdminUser, AuthUser};
use crate::backend::response::ApiResponse;
use crate::shared::models::{Doctor, DoctorInput, DoctorQuery};

/// Default page size for doctor listings
pub const DEFAULT_DOCTOR_LIMIT: i64 = 20;

/// `GET /api/doctors` - filtered listing with a `count` of returned rows
pub async fn list_doctors(
    _user: AuthUser,
    State(doctors): State<DoctorRepository>,
    Query(query): Query<DoctorQuery>,
) -> Result<ApiResponse<Vec<Doctor>>, BackendError> {
    let filter = query.into_filter(DEFAULT_DOCTOR_LIMIT)?;
    let list = doctors.list(&filter).await?;
    let count = list.len();
    Ok(ApiResponse::ok(list).with_count(count))
}

pub async fn list_specialties(
    _user: AuthUser,
    State(doctors): State<DoctorRepository>,
) -> Result<ApiResponse<Vec<String>>, BackendError> {
    Ok(ApiResponse::ok(doctors.list_specialties().await?))
}

pub async fn get_doctor(
    _user: AuthUser,
    State(doctors): State<DoctorRepository>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Doctor>, BackendError> {
    Ok(ApiResponse::ok(doctors.get_by_id(parse_id(&id)?).await?))
}

pub async fn create_doctor(
    _admin: AdminUser,
    State(doctors): State<DoctorRepository>,
    ApiJson(input): ApiJson<DoctorInput>,
) -> Result<ApiResponse<Doctor>, BackendError> {
    let doctor = doctors.create(input).await?;
    Ok(ApiResponse::created(doctor).with_message("Doctor created successfully"))
}

pub async fn update_doctor(
    _admin: AdminUser,
    State(doctors): State<DoctorRepository>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<DoctorInput>,
) -> Result<ApiResponse<Doctor>, BackendError> {
    let doctor = doctors.update(parse_id(&id)?, input).await?;
    Ok(ApiResponse::ok(doctor).with_message("Doctor updated successfully"))
}

pub async fn delete_doctor(
    _admin: AdminUser,
    State(doctors): State<DoctorRepository>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, BackendError> {
    doctors.delete(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Doctor deleted successfully"))
}
