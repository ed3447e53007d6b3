//! Handler-level coverage over a fixture-backed App.

use std::sync::Arc;

use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::Error;
use crate::domain::ports::{
    AdmissionCommand, AdmitPatientRequest, AdmitPatientResponse, FixtureAdmissionCommand,
    ProcessDischargeRequest, ProcessDischargeResponse,
};

use super::*;

/// Command stub that fails every operation with a fixed error.
struct FailingCommand {
    error: Error,
}

#[async_trait]
impl AdmissionCommand for FailingCommand {
    async fn admit_patient(
        &self,
        _request: AdmitPatientRequest,
    ) -> Result<AdmitPatientResponse, Error> {
        Err(self.error.clone())
    }

    async fn process_discharge(
        &self,
        _request: ProcessDischargeRequest,
    ) -> Result<ProcessDischargeResponse, Error> {
        Err(self.error.clone())
    }
}

async fn call(
    command: Arc<dyn AdmissionCommand>,
    uri: &str,
    body: Value,
) -> (actix_web::http::StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(command)))
            .service(
                web::scope("/api/v1")
                    .service(admit_patient)
                    .service(process_discharge),
            ),
    )
    .await;

    let request = test::TestRequest::post()
        .uri(uri)
        .set_json(&body)
        .to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status();
    let rendered: Value = test::read_body_json(response).await;
    (status, rendered)
}

fn admit_body() -> Value {
    json!({
        "patientId": 7,
        "doctorId": 3,
        "roomType": "ICU",
        "admissionDate": "2025-03-14",
    })
}

#[actix_web::test]
async fn admitting_returns_created_with_room_details() {
    let (status, body) = call(
        Arc::new(FixtureAdmissionCommand),
        "/api/v1/admissions",
        admit_body(),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["admissionId"], 1);
    assert_eq!(body["room"]["status"], "Occupied");
    assert_eq!(body["room"]["roomType"], "ICU");
}

#[actix_web::test]
async fn admitting_honours_an_operator_chosen_room() {
    let mut payload = admit_body();
    payload["roomId"] = json!(12);

    let (status, body) = call(
        Arc::new(FixtureAdmissionCommand),
        "/api/v1/admissions",
        payload,
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["room"]["id"], 12);
}

#[actix_web::test]
async fn admitting_rejects_an_unknown_room_type() {
    let mut payload = admit_body();
    payload["roomType"] = json!("Suite");

    let (status, body) = call(
        Arc::new(FixtureAdmissionCommand),
        "/api/v1/admissions",
        payload,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "roomType");
}

#[actix_web::test]
async fn admitting_rejects_a_malformed_date() {
    let mut payload = admit_body();
    payload["admissionDate"] = json!("14/03/2025");

    let (status, body) = call(
        Arc::new(FixtureAdmissionCommand),
        "/api/v1/admissions",
        payload,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["details"]["field"], "admissionDate");
}

#[actix_web::test]
async fn admitting_rejects_a_non_positive_patient_id() {
    let mut payload = admit_body();
    payload["patientId"] = json!(0);

    let (status, body) = call(
        Arc::new(FixtureAdmissionCommand),
        "/api/v1/admissions",
        payload,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["details"]["field"], "patientId");
}

#[actix_web::test]
async fn capacity_exhaustion_maps_to_conflict() {
    let command = Arc::new(FailingCommand {
        error: Error::no_capacity("no ICU rooms available"),
    });

    let (status, body) = call(command, "/api/v1/admissions", admit_body()).await;

    assert_eq!(status, 409);
    assert_eq!(body["code"], "no_capacity");
    assert_eq!(body["message"], "no ICU rooms available");
}

#[actix_web::test]
async fn unknown_references_map_to_not_found() {
    let command = Arc::new(FailingCommand {
        error: Error::not_found("patient 7 not found"),
    });

    let (status, body) = call(command, "/api/v1/admissions", admit_body()).await;

    assert_eq!(status, 404);
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn discharging_returns_the_outcome() {
    let (status, body) = call(
        Arc::new(FixtureAdmissionCommand),
        "/api/v1/admissions/50/discharge",
        json!({ "dischargeDate": "2025-03-20" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["outcome"], "discharged");
}

#[actix_web::test]
async fn discharging_rejects_a_non_positive_admission_id() {
    let (status, body) = call(
        Arc::new(FixtureAdmissionCommand),
        "/api/v1/admissions/0/discharge",
        json!({ "dischargeDate": "2025-03-20" }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["details"]["field"], "admissionId");
}

#[actix_web::test]
async fn store_outage_maps_to_service_unavailable() {
    let command = Arc::new(FailingCommand {
        error: Error::service_unavailable("record store unreachable"),
    });

    let (status, body) = call(
        command,
        "/api/v1/admissions/50/discharge",
        json!({ "dischargeDate": "2025-03-20" }),
    )
    .await;

    assert_eq!(status, 503);
    assert_eq!(body["code"], "service_unavailable");
}
