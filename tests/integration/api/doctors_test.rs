//! Doctor API tests

use axum::http::{Method, StatusCode};
use clinic_backend::backend::routes::create_router;
use serde_json::{json, Value};

use crate::common::{create_admin, create_patient, get, post, send, test_state, token_for};

fn doctor(name: &str, specialty: &str, license: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@clinic.vn", license.to_lowercase()),
        "phone": "0901234567",
        "specialty": specialty,
        "license_number": license,
        "patient_count": 500
    })
}

#[tokio::test]
async fn test_doctor_directory() {
    let state = test_state().await;
    let admin = create_admin(&state).await;
    let patient = create_patient(&state, "alice").await;
    let admin_token = token_for(&state, &admin);
    let patient_token = token_for(&state, &patient);
    let app = create_router(state);

    let created = post(&app, "/api/doctors", Some(&admin_token), doctor("Dr. An", "Mắt", "LIC-1")).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Doctor created successfully");
    assert_eq!(created.body["data"]["patient_count"], 0);
    assert_eq!(created.body["data"]["status"], "active");
    let id = created.body["data"]["id"].as_i64().unwrap();

    post(&app, "/api/doctors", Some(&admin_token), doctor("Dr. Binh", "Tim mạch", "LIC-2")).await;

    let listed = get(&app, "/api/doctors", Some(&patient_token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["count"], 2);

    let none = get(&app, "/api/doctors?status=inactive", Some(&patient_token)).await;
    assert_eq!(none.body["count"], 0);
    assert_eq!(none.body["data"], json!([]));

    let specialties = get(&app, "/api/doctors/specialties", Some(&patient_token)).await;
    assert_eq!(specialties.body["data"], json!(["Mắt", "Tim mạch"]));

    let fetched = get(&app, &format!("/api/doctors/{}", id), Some(&patient_token)).await;
    assert_eq!(fetched.body["data"]["name"], "Dr. An");

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/doctors/{}", id),
        Some(&admin_token),
        Some(doctor("Dr. An", "Nhi khoa", "LIC-1")),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["specialty"], "Nhi khoa");

    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/api/doctors/{}", id),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = get(&app, &format!("/api/doctors/{}", id), Some(&patient_token)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_doctor_access_control() {
    let state = test_state().await;
    let patient = create_patient(&state, "alice").await;
    let token = token_for(&state, &patient);
    let app = create_router(state);

    assert_eq!(get(&app, "/api/doctors", None).await.status, StatusCode::UNAUTHORIZED);

    let forbidden = post(&app, "/api/doctors", Some(&token), doctor("Dr. An", "Mắt", "LIC-1")).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_duplicate_license_conflicts() {
    let state = test_state().await;
    let admin = create_admin(&state).await;
    let token = token_for(&state, &admin);
    let app = create_router(state);

    post(&app, "/api/doctors", Some(&token), doctor("Dr. An", "Mắt", "LIC-1")).await;

    let mut again = doctor("Dr. Other", "Mắt", "LIC-1");
    again["email"] = json!("other@clinic.vn");
    let conflict = post(&app, "/api/doctors", Some(&token), again).await;
    assert_eq!(conflict.status, StatusCode::CONFLICT);
    assert_eq!(conflict.body["field"], "license_number");
}
