//! Driving port for the admission workflow.
//!
//! This is the whole surface the workflow exposes to its callers: admit a
//! patient and process a discharge. Both return a typed result; every
//! failure mode is a domain [`Error`](crate::domain::Error) with a stable
//! code.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    AdmissionId, DischargeOutcome, DoctorId, Error, PatientId, Room, RoomId, RoomStatus, RoomType,
};

/// Input for [`AdmissionCommand::admit_patient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmitPatientRequest {
    /// Patient to admit; must reference an existing record.
    pub patient_id: PatientId,
    /// Attending doctor; must reference an existing record.
    pub doctor_id: DoctorId,
    /// Category of room to allocate.
    pub room_type: RoomType,
    /// Specific room picked by the operator from the available list;
    /// `None` takes the first available room of the type.
    pub room_id: Option<RoomId>,
    /// Day the stay begins.
    pub admission_date: NaiveDate,
    /// Optional admission notes.
    pub notes: Option<String>,
}

/// Result of a successful admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmitPatientResponse {
    /// Identity of the admission row written by the transaction.
    pub admission_id: AdmissionId,
    /// The room the patient now occupies.
    pub room: Room,
}

/// Input for [`AdmissionCommand::process_discharge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDischargeRequest {
    /// Admission to close out.
    pub admission_id: AdmissionId,
    /// Day the stay ends; must not precede the admission date.
    pub discharge_date: NaiveDate,
    /// Optional discharge notes, appended to the admission's notes.
    pub notes: Option<String>,
}

/// Result of a discharge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessDischargeResponse {
    /// Whether this call performed the transition or found it already done.
    pub outcome: DischargeOutcome,
}

/// Driving port: the two entry points of the admission workflow.
#[async_trait]
pub trait AdmissionCommand: Send + Sync {
    /// Admit a patient into an available room of the requested type.
    async fn admit_patient(
        &self,
        request: AdmitPatientRequest,
    ) -> Result<AdmitPatientResponse, Error>;

    /// Discharge an admitted patient and release their room. Idempotent:
    /// repeating the call reports [`DischargeOutcome::AlreadyDischarged`].
    async fn process_discharge(
        &self,
        request: ProcessDischargeRequest,
    ) -> Result<ProcessDischargeResponse, Error>;
}

/// Fixture implementation returning canned successes for wiring tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdmissionCommand;

#[async_trait]
impl AdmissionCommand for FixtureAdmissionCommand {
    async fn admit_patient(
        &self,
        request: AdmitPatientRequest,
    ) -> Result<AdmitPatientResponse, Error> {
        Ok(AdmitPatientResponse {
            admission_id: AdmissionId::new(1),
            room: Room {
                id: request.room_id.unwrap_or(RoomId::new(101)),
                room_number: "101".to_owned(),
                room_type: request.room_type,
                status: RoomStatus::Occupied,
            },
        })
    }

    async fn process_discharge(
        &self,
        _request: ProcessDischargeRequest,
    ) -> Result<ProcessDischargeResponse, Error> {
        Ok(ProcessDischargeResponse {
            outcome: DischargeOutcome::Discharged,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_admits_into_the_requested_room() {
        let command = FixtureAdmissionCommand;
        let response = command
            .admit_patient(AdmitPatientRequest {
                patient_id: PatientId::new(7),
                doctor_id: DoctorId::new(3),
                room_type: RoomType::Icu,
                room_id: Some(RoomId::new(12)),
                admission_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                    .expect("valid date"),
                notes: None,
            })
            .await
            .expect("fixture admit succeeds");

        assert_eq!(response.room.id, RoomId::new(12));
        assert_eq!(response.room.status, RoomStatus::Occupied);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_discharge_reports_a_fresh_transition() {
        let command = FixtureAdmissionCommand;
        let response = command
            .process_discharge(ProcessDischargeRequest {
                admission_id: AdmissionId::new(50),
                discharge_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 10)
                    .expect("valid date"),
                notes: None,
            })
            .await
            .expect("fixture discharge succeeds");

        assert_eq!(response.outcome, DischargeOutcome::Discharged);
    }
}
