//! Admission lifecycle orchestration.
//!
//! Implements the workflow's driving port: `admit_patient` and
//! `process_discharge`. The service owns precondition checks, room choice,
//! and error mapping; the atomic write pairs themselves are delegated to
//! the admission store port, which commits or rolls back both sides
//! together.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    AdmissionCommand, AdmissionStore, AdmissionStoreError, AdmitPatientRequest,
    AdmitPatientResponse, Directory, DirectoryError, ProcessDischargeRequest,
    ProcessDischargeResponse, RoomRepository,
};
use crate::domain::room_allocator::RoomAllocator;
use crate::domain::{
    AdmissionStatus, DischargeOutcome, Error, NewAdmission, NewAdmissionDraft, Room, RoomStatus,
};

fn map_store_error(error: AdmissionStoreError) -> Error {
    match error {
        AdmissionStoreError::Connection { message } => {
            Error::service_unavailable(format!("admission store unavailable: {message}"))
        }
        AdmissionStoreError::Query { message } => {
            Error::internal(format!("admission store error: {message}"))
        }
        AdmissionStoreError::Transaction { message } => {
            Error::transaction_failed(format!("admission transaction rolled back: {message}"))
        }
        AdmissionStoreError::RoomUnavailable { room_id } => Error::no_capacity(format!(
            "room {room_id} was taken by a concurrent admission; pick another room"
        )),
        AdmissionStoreError::RoomMissing { room_id } => {
            Error::not_found(format!("room {room_id} does not exist"))
        }
        AdmissionStoreError::AdmissionMissing { admission_id } => {
            Error::not_found(format!("admission {admission_id} does not exist"))
        }
    }
}

fn map_directory_error(error: DirectoryError) -> Error {
    match error {
        DirectoryError::Connection { message } => {
            Error::service_unavailable(format!("directory unavailable: {message}"))
        }
        DirectoryError::Query { message } => {
            Error::internal(format!("directory error: {message}"))
        }
    }
}

/// Workflow service implementing the [`AdmissionCommand`] driving port.
#[derive(Clone)]
pub struct AdmissionLifecycleService<S, R, D> {
    store: Arc<S>,
    allocator: RoomAllocator<R>,
    directory: Arc<D>,
}

impl<S, R, D> AdmissionLifecycleService<S, R, D> {
    /// Create the service over its three driven ports.
    pub const fn new(store: Arc<S>, rooms: Arc<R>, directory: Arc<D>) -> Self {
        Self {
            store,
            allocator: RoomAllocator::new(rooms),
            directory,
        }
    }
}

impl<S, R, D> AdmissionLifecycleService<S, R, D>
where
    S: AdmissionStore,
    R: RoomRepository,
    D: Directory,
{
    async fn check_references(&self, request: &AdmitPatientRequest) -> Result<(), Error> {
        let patient_found = self
            .directory
            .patient_exists(request.patient_id)
            .await
            .map_err(map_directory_error)?;
        if !patient_found {
            return Err(Error::not_found(format!(
                "patient {} not found",
                request.patient_id
            )));
        }

        let doctor_found = self
            .directory
            .doctor_exists(request.doctor_id)
            .await
            .map_err(map_directory_error)?;
        if !doctor_found {
            return Err(Error::not_found(format!(
                "doctor {} not found",
                request.doctor_id
            )));
        }

        Ok(())
    }

    /// Pick the admission's room: the operator's choice when it is in the
    /// available set, otherwise the first available room of the type.
    fn choose_room(request: &AdmitPatientRequest, available: Vec<Room>) -> Result<Room, Error> {
        let room_type = request.room_type;
        if available.is_empty() {
            return Err(Error::no_capacity(format!(
                "no {room_type} rooms available"
            )));
        }

        match request.room_id {
            None => available
                .into_iter()
                .next()
                .ok_or_else(|| Error::internal("available room list vanished")),
            Some(room_id) => available
                .into_iter()
                .find(|room| room.id == room_id)
                .ok_or_else(|| {
                    Error::no_capacity(format!(
                        "room {room_id} is not an available {room_type} room"
                    ))
                }),
        }
    }
}

#[async_trait]
impl<S, R, D> AdmissionCommand for AdmissionLifecycleService<S, R, D>
where
    S: AdmissionStore,
    R: RoomRepository,
    D: Directory,
{
    async fn admit_patient(
        &self,
        request: AdmitPatientRequest,
    ) -> Result<AdmitPatientResponse, Error> {
        self.check_references(&request).await?;

        let available = self.allocator.find_available(request.room_type).await?;
        let room = Self::choose_room(&request, available)?;

        let admission = NewAdmission::new(NewAdmissionDraft {
            patient_id: request.patient_id,
            doctor_id: request.doctor_id,
            room_id: room.id,
            admission_date: request.admission_date,
            notes: request.notes,
        })
        .map_err(|err| Error::invalid_request(format!("invalid admission: {err}")))?;

        let admission_id = self
            .store
            .admit(admission)
            .await
            .map_err(map_store_error)?;

        info!(
            admission_id = admission_id.get(),
            room_id = room.id.get(),
            room_number = %room.room_number,
            "patient admitted"
        );

        Ok(AdmitPatientResponse {
            admission_id,
            room: Room {
                status: RoomStatus::Occupied,
                ..room
            },
        })
    }

    async fn process_discharge(
        &self,
        request: ProcessDischargeRequest,
    ) -> Result<ProcessDischargeResponse, Error> {
        let admission = self
            .store
            .find_by_id(request.admission_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| {
                Error::not_found(format!("admission {} not found", request.admission_id))
            })?;

        // Admission dates are immutable after insert, so this validation
        // cannot race with a concurrent writer.
        if request.discharge_date < admission.admission_date {
            return Err(Error::invalid_request(
                "discharge date must not precede admission date",
            )
            .with_details(json!({
                "field": "dischargeDate",
                "admissionDate": admission.admission_date.to_string(),
                "dischargeDate": request.discharge_date.to_string(),
            })));
        }

        // Cheap short-circuit only; the store re-checks the status under a
        // row lock so racing discharges cannot flip the room twice.
        if admission.status == AdmissionStatus::Discharged {
            debug!(
                admission_id = request.admission_id.get(),
                "discharge repeated on a closed admission"
            );
            return Ok(ProcessDischargeResponse {
                outcome: DischargeOutcome::AlreadyDischarged,
            });
        }

        let outcome = self
            .store
            .discharge(request.admission_id, request.discharge_date, request.notes)
            .await
            .map_err(map_store_error)?;

        info!(
            admission_id = request.admission_id.get(),
            room_id = admission.room_id.get(),
            outcome = outcome.as_str(),
            "discharge processed"
        );

        Ok(ProcessDischargeResponse { outcome })
    }
}

#[cfg(test)]
#[path = "admission_service_tests.rs"]
mod tests;
