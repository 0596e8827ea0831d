//! Doctor Repository
//!
//! Directory CRUD. `patient_count` and `appointment_count` are never written
//! from client input: they start at zero and are left alone by updates.

use chrono::Utc;

use crate::backend::db::{Conditions, Database};
use crate::backend::error::BackendError;
use crate::shared::models::{Doctor, DoctorFilter, DoctorInput, DoctorSortField, SortOrder};
use crate::shared::validation::{clean, Validate};

const DOCTOR_SELECT: &str = "SELECT id, name, email, phone, specialty, experience, education, bio, \
     avatar, license_number, address, date_of_birth, gender, status, certifications, \
     working_hours, consultation_price, patient_count, appointment_count, created_at, updated_at \
     FROM doctors";

#[derive(Debug, Clone)]
pub struct DoctorRepository {
    db: Database,
}

impl DoctorRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Validate, sanitize and insert a doctor
    ///
    /// # Errors
    ///
    /// * `Validation` - a required field is blank or the status is unknown
    /// * `DuplicateKey` - `email` or `license_number` already registered
    pub async fn create(&self, input: DoctorInput) -> Result<Doctor, BackendError> {
        let d = input.validate()?.sanitize().into_inner();
        let now = Utc::now();

        let mut stmt = self.db.statement();
        stmt.push(
            "INSERT INTO doctors (name, email, phone, specialty, experience, education, bio, \
             avatar, license_number, address, date_of_birth, gender, status, certifications, \
             working_hours, consultation_price, patient_count, appointment_count, created_at, \
             updated_at) VALUES (",
        )
        .push_bind_list([
            d.name,
            d.email,
            d.phone,
            d.specialty,
            d.experience,
            d.education,
            d.bio,
            d.avatar,
            d.license_number,
            d.address,
            d.date_of_birth,
            d.gender,
            d.status.as_str().to_string(),
            d.certifications,
            d.working_hours,
        ])
        .push(", ")
        .push_bind(d.consultation_price)
        .push(", 0, 0, ")
        .push_bind(now)
        .push(", ")
        .push_bind(now)
        .push(")")
        .push(self.db.dialect().returning_id());

        let id = self.db.insert(&stmt).await?;
        tracing::info!("Created doctor {}", id);
        self.get_by_id(id).await
    }

    /// Replace a doctor's editable fields
    pub async fn update(&self, id: i64, input: DoctorInput) -> Result<Doctor, BackendError> {
        let d = input.validate()?.sanitize().into_inner();

        let mut stmt = self.db.statement();
        stmt.push("UPDATE doctors SET name = ")
            .push_bind(d.name)
            .push(", email = ")
            .push_bind(d.email)
            .push(", phone = ")
            .push_bind(d.phone)
            .push(", specialty = ")
            .push_bind(d.specialty)
            .push(", experience = ")
            .push_bind(d.experience)
            .push(", education = ")
            .push_bind(d.education)
            .push(", bio = ")
            .push_bind(d.bio)
            .push(", avatar = ")
            .push_bind(d.avatar)
            .push(", license_number = ")
            .push_bind(d.license_number)
            .push(", address = ")
            .push_bind(d.address)
            .push(", date_of_birth = ")
            .push_bind(d.date_of_birth)
            .push(", gender = ")
            .push_bind(d.gender)
            .push(", status = ")
            .push_bind(d.status.as_str())
            .push(", certifications = ")
            .push_bind(d.certifications)
            .push(", working_hours = ")
            .push_bind(d.working_hours)
            .push(", consultation_price = ")
            .push_bind(d.consultation_price)
            .push(", updated_at = ")
            .push_bind(Utc::now())
            .push(" WHERE id = ")
            .push_bind(id);

        if self.db.execute(&stmt).await? == 0 {
            return Err(BackendError::NotFound("doctor"));
        }
        tracing::info!("Updated doctor {}", id);
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("DELETE FROM doctors WHERE id = ").push_bind(id);

        if self.db.execute(&stmt).await? == 0 {
            return Err(BackendError::NotFound("doctor"));
        }
        tracing::info!("Deleted doctor {}", id);
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Doctor, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push(DOCTOR_SELECT).push(" WHERE id = ").push_bind(id);

        self.db
            .fetch_optional(&stmt)
            .await?
            .ok_or(BackendError::NotFound("doctor"))
    }

    /// Filtered listing
    ///
    /// Search matches name, specialty or email, case-insensitively. Without a
    /// sort field the newest doctors come first; with one, the order defaults
    /// to ascending.
    pub async fn list(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push(DOCTOR_SELECT);

        let mut conds = Conditions::new();
        if let Some(search) = filter.search.as_deref().map(clean) {
            conds.next(&mut stmt).push("(");
            stmt.push_contains("name", &search)
                .push(" OR ")
                .push_contains("specialty", &search)
                .push(" OR ")
                .push_contains("email", &search)
                .push(")");
        }
        if let Some(specialty) = &filter.specialty {
            conds.next(&mut stmt).push("specialty = ").push_bind(clean(specialty));
        }
        if let Some(status) = filter.status {
            conds.next(&mut stmt).push("status = ").push_bind(status.as_str());
        }

        let (column, order) = match filter.sort_by {
            Some(field) => (field.column(), filter.sort_order.unwrap_or(SortOrder::Asc)),
            None => (
                DoctorSortField::CreatedAt.column(),
                filter.sort_order.unwrap_or(SortOrder::Desc),
            ),
        };
        let order = order.as_sql();
        stmt.push(&format!(" ORDER BY {} {}, id {}", column, order, order));

        if let Some(limit) = filter.limit {
            stmt.push(" LIMIT ").push_bind(limit);
            if let Some(offset) = filter.offset.filter(|o| *o > 0) {
                stmt.push(" OFFSET ").push_bind(offset);
            }
        }

        Ok(self.db.fetch_all(&stmt).await?)
    }

    /// Distinct, non-empty specialties in alphabetical order
    pub async fn list_specialties(&self) -> Result<Vec<String>, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("SELECT DISTINCT specialty FROM doctors WHERE specialty != '' ORDER BY specialty");

        Ok(self.db.fetch_strings(&stmt).await?)
    }
}
