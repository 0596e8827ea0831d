//! Doctor repository tests

use assert_matches::assert_matches;
use clinic_backend::backend::BackendError;
use clinic_backend::shared::models::{
    DoctorFilter, DoctorInput, DoctorSortField, DoctorStatus, SortOrder,
};
use pretty_assertions::assert_eq;

use crate::common::test_db;
use clinic_backend::backend::doctors::DoctorRepository;

fn doctor(name: &str, specialty: &str, license: &str) -> DoctorInput {
    DoctorInput {
        name: name.to_string(),
        email: format!("{}@clinic.vn", license.to_lowercase()),
        phone: "0901234567".to_string(),
        specialty: specialty.to_string(),
        license_number: license.to_string(),
        ..Default::default()
    }
}

async fn repo() -> DoctorRepository {
    DoctorRepository::new(test_db().await)
}

#[tokio::test]
async fn test_create_defaults() {
    let doctors = repo().await;

    let mut input = doctor("Dr. <Lan>", "Nhi khoa", "LIC-1");
    input.working_hours = r#" {"mon":"08:00-17:00"} "#.to_string();
    input.consultation_price = 300_000;
    let created = doctors.create(input).await.unwrap();

    assert_eq!(created.name, "Dr. &lt;Lan&gt;");
    assert_eq!(created.status, DoctorStatus::Active);
    assert_eq!(created.working_hours, r#"{"mon":"08:00-17:00"}"#);
    assert_eq!(created.consultation_price, 300_000);
    assert_eq!(created.patient_count, 0);
    assert_eq!(created.appointment_count, 0);
}

#[tokio::test]
async fn test_required_fields() {
    let doctors = repo().await;

    let err = doctors.create(doctor("  ", "Mắt", "LIC-1")).await.unwrap_err();
    assert_eq!(err.field(), Some("name"));

    let mut bad_status = doctor("Dr. A", "Mắt", "LIC-1");
    bad_status.status = Some("retired".into());
    let err = doctors.create(bad_status).await.unwrap_err();
    assert_eq!(err.field(), Some("status"));
}

#[tokio::test]
async fn test_duplicate_keys() {
    let doctors = repo().await;
    doctors.create(doctor("Dr. A", "Mắt", "LIC-1")).await.unwrap();

    let mut same_license = doctor("Dr. B", "Mắt", "LIC-1");
    same_license.email = "b@clinic.vn".into();
    assert_matches!(
        doctors.create(same_license).await,
        Err(BackendError::DuplicateKey { field }) if field == "license_number"
    );

    let mut same_email = doctor("Dr. C", "Mắt", "LIC-2");
    same_email.email = "lic-1@clinic.vn".into();
    assert_matches!(
        doctors.create(same_email).await,
        Err(BackendError::DuplicateKey { field }) if field == "email"
    );
}

#[tokio::test]
async fn test_update_and_delete() {
    let doctors = repo().await;
    let created = doctors.create(doctor("Dr. A", "Mắt", "LIC-1")).await.unwrap();

    let mut change = doctor("Dr. A", "Tim mạch", "LIC-1");
    change.status = Some("on_leave".into());
    let updated = doctors.update(created.id, change).await.unwrap();
    assert_eq!(updated.specialty, "Tim mạch");
    assert_eq!(updated.status, DoctorStatus::OnLeave);
    assert_eq!(updated.created_at, created.created_at);

    doctors.delete(created.id).await.unwrap();
    assert_matches!(doctors.get_by_id(created.id).await, Err(BackendError::NotFound(_)));
    assert_matches!(doctors.delete(created.id).await, Err(BackendError::NotFound(_)));
    assert_matches!(
        doctors.update(created.id, doctor("Dr. A", "Mắt", "LIC-1")).await,
        Err(BackendError::NotFound(_))
    );
}

#[tokio::test]
async fn test_list_and_specialties() {
    let doctors = repo().await;
    doctors.create(doctor("Dr. Binh", "Tim mạch", "LIC-1")).await.unwrap();
    doctors.create(doctor("Dr. An", "Mắt", "LIC-2")).await.unwrap();
    doctors.create(doctor("Dr. Chi", "Tim mạch", "LIC-3")).await.unwrap();

    let newest_first = doctors.list(&DoctorFilter::default()).await.unwrap();
    let names: Vec<_> = newest_first.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Dr. Chi", "Dr. An", "Dr. Binh"]);

    // A sort field without an order sorts ascending
    let by_name = doctors
        .list(&DoctorFilter {
            sort_by: Some(DoctorSortField::Name),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<_> = by_name.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Dr. An", "Dr. Binh", "Dr. Chi"]);

    let cardiology = doctors
        .list(&DoctorFilter {
            specialty: Some("Tim mạch".into()),
            sort_by: Some(DoctorSortField::Name),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<_> = cardiology.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Dr. Chi", "Dr. Binh"]);

    let searched = doctors
        .list(&DoctorFilter {
            search: Some("lic-2@".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].name, "Dr. An");

    let inactive = doctors
        .list(&DoctorFilter {
            status: Some(DoctorStatus::Inactive),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(inactive.is_empty());

    assert_eq!(
        doctors.list_specialties().await.unwrap(),
        vec!["Mắt".to_string(), "Tim mạch".to_string()]
    );
}

#[tokio::test]
async fn test_filters_match_stored_text_literally() {
    let doctors = repo().await;
    doctors.create(doctor("Dr. O'Neil", "Tai & Mũi", "LIC-1")).await.unwrap();
    doctors.create(doctor("Dr. Lan", "Mắt", "LIC_2")).await.unwrap();
    doctors.create(doctor("Dr. Minh", "Mắt", "LICX2")).await.unwrap();

    let specialty = doctors
        .list(&DoctorFilter {
            specialty: Some("Tai & Mũi".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(specialty.len(), 1);
    assert_eq!(specialty[0].name, "Dr. O&#x27;Neil");

    let apostrophe = doctors
        .list(&DoctorFilter {
            search: Some("O'Neil".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(apostrophe.len(), 1);

    let underscore = doctors
        .list(&DoctorFilter {
            search: Some("lic_2".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<_> = underscore.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Dr. Lan"]);
}
