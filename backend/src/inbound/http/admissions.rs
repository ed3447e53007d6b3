//! Admission workflow endpoints.
//!
//! Two POST routes: create an admission (allocating a room atomically) and
//! process a discharge (releasing the room atomically). Request bodies carry
//! dates and enums as strings; validation happens here so the domain only
//! ever sees well-formed values.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{AdmitPatientRequest, AdmitPatientResponse, ProcessDischargeRequest};
use crate::domain::{AdmissionId, DoctorId, PatientId, Room, RoomId};

use super::error::ApiResult;
use super::state::HttpState;
use super::validation::{parse_date, parse_id, parse_room_type};

/// Body for `POST /api/v1/admissions`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmitPatientBody {
    /// Identifier of the patient being admitted.
    pub patient_id: i32,
    /// Identifier of the attending doctor.
    pub doctor_id: i32,
    /// Requested room category: `General`, `Private`, or `ICU`.
    pub room_type: String,
    /// Specific room to use; omitted means first available of the type.
    #[serde(default)]
    pub room_id: Option<i32>,
    /// Admission date as `YYYY-MM-DD`.
    pub admission_date: String,
    /// Optional admission notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Room details echoed back after allocation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomBody {
    /// Room identifier.
    pub id: i32,
    /// Human-facing room number.
    pub room_number: String,
    /// Room category spelling.
    pub room_type: String,
    /// Room status after the operation.
    pub status: String,
}

impl From<Room> for RoomBody {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.get(),
            room_number: room.room_number,
            room_type: room.room_type.as_str().to_owned(),
            status: room.status.as_str().to_owned(),
        }
    }
}

/// Response for a successful admission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionCreatedBody {
    /// Identifier of the new admission record.
    pub admission_id: i32,
    /// The room the patient now occupies.
    pub room: RoomBody,
}

impl From<AdmitPatientResponse> for AdmissionCreatedBody {
    fn from(response: AdmitPatientResponse) -> Self {
        Self {
            admission_id: response.admission_id.get(),
            room: response.room.into(),
        }
    }
}

/// Body for `POST /api/v1/admissions/{admission_id}/discharge`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDischargeBody {
    /// Discharge date as `YYYY-MM-DD`.
    pub discharge_date: String,
    /// Optional discharge notes, appended to the admission's notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response for a processed discharge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DischargeProcessedBody {
    /// `discharged` on a fresh transition, `already_discharged` on a repeat.
    pub outcome: String,
}

fn to_admit_request(body: AdmitPatientBody) -> ApiResult<AdmitPatientRequest> {
    let patient_id = PatientId::new(parse_id(body.patient_id, "patientId")?);
    let doctor_id = DoctorId::new(parse_id(body.doctor_id, "doctorId")?);
    let room_type = parse_room_type(&body.room_type, "roomType")?;
    let room_id = body
        .room_id
        .map(|id| parse_id(id, "roomId").map(RoomId::new))
        .transpose()?;
    let admission_date = parse_date(&body.admission_date, "admissionDate")?;

    Ok(AdmitPatientRequest {
        patient_id,
        doctor_id,
        room_type,
        room_id,
        admission_date,
        notes: body.notes,
    })
}

/// Admit a patient into an available room.
#[utoipa::path(
    post,
    path = "/api/v1/admissions",
    tag = "admissions",
    operation_id = "admitPatient",
    request_body = AdmitPatientBody,
    responses(
        (status = 201, description = "Patient admitted", body = AdmissionCreatedBody),
        (status = 400, description = "Malformed request"),
        (status = 404, description = "Unknown patient or doctor"),
        (status = 409, description = "No room of the requested type available"),
        (status = 503, description = "Record store unreachable"),
    )
)]
#[post("/admissions")]
pub async fn admit_patient(
    state: web::Data<HttpState>,
    body: web::Json<AdmitPatientBody>,
) -> ApiResult<HttpResponse> {
    let request = to_admit_request(body.into_inner())?;
    let response = state.admissions().admit_patient(request).await?;
    Ok(HttpResponse::Created().json(AdmissionCreatedBody::from(response)))
}

/// Discharge an admitted patient and release their room.
#[utoipa::path(
    post,
    path = "/api/v1/admissions/{admission_id}/discharge",
    tag = "admissions",
    operation_id = "processDischarge",
    params(
        ("admission_id" = i32, Path, description = "Admission to close out"),
    ),
    request_body = ProcessDischargeBody,
    responses(
        (status = 200, description = "Discharge processed", body = DischargeProcessedBody),
        (status = 400, description = "Malformed request or discharge date before admission"),
        (status = 404, description = "Unknown admission"),
        (status = 503, description = "Record store unreachable"),
    )
)]
#[post("/admissions/{admission_id}/discharge")]
pub async fn process_discharge(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Json<ProcessDischargeBody>,
) -> ApiResult<HttpResponse> {
    let admission_id = AdmissionId::new(parse_id(path.into_inner(), "admissionId")?);
    let body = body.into_inner();
    let request = ProcessDischargeRequest {
        admission_id,
        discharge_date: parse_date(&body.discharge_date, "dischargeDate")?,
        notes: body.notes,
    };

    let response = state.admissions().process_discharge(request).await?;
    Ok(HttpResponse::Ok().json(DischargeProcessedBody {
        outcome: response.outcome.as_str().to_owned(),
    }))
}

#[cfg(test)]
#[path = "admissions_tests.rs"]
mod tests;
