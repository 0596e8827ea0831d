//! Doctor validation

use crate::shared::error::SharedError;
use crate::shared::models::{DoctorDraft, DoctorInput, DoctorStatus};
use crate::shared::validation::{clean, require, Sanitized, Validate, Validated};

impl Validate for DoctorInput {
    type Output = DoctorDraft;

    fn validate(self) -> Result<Validated<DoctorDraft>, SharedError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        require("specialty", &self.specialty)?;
        require("license_number", &self.license_number)?;

        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => DoctorStatus::default(),
            Some(s) => s
                .parse()
                .map_err(|_| SharedError::validation("status", format!("invalid status '{}'", s)))?,
        };

        Ok(Validated::new(DoctorDraft {
            name: self.name,
            email: self.email,
            phone: self.phone,
            specialty: self.specialty,
            experience: self.experience,
            education: self.education,
            bio: self.bio,
            avatar: self.avatar,
            license_number: self.license_number,
            address: self.address,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            status,
            certifications: self.certifications,
            working_hours: self.working_hours,
            consultation_price: self.consultation_price,
        }))
    }
}

impl Validated<DoctorDraft> {
    /// Clean every free-text field; the schedule blob is only trimmed
    pub fn sanitize(self) -> Sanitized<DoctorDraft> {
        let d = self.into_inner();

        Sanitized::new(DoctorDraft {
            name: clean(&d.name),
            email: clean(&d.email),
            phone: clean(&d.phone),
            specialty: clean(&d.specialty),
            experience: clean(&d.experience),
            education: clean(&d.education),
            bio: clean(&d.bio),
            avatar: clean(&d.avatar),
            license_number: clean(&d.license_number),
            address: clean(&d.address),
            date_of_birth: clean(&d.date_of_birth),
            gender: clean(&d.gender),
            status: d.status,
            certifications: clean(&d.certifications),
            working_hours: d.working_hours.trim().to_string(),
            consultation_price: d.consultation_price,
        })
    }
}
