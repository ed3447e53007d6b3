//! Port for the atomic admission/room write pairs.
//!
//! The central correctness guarantee of the workflow lives behind this
//! trait: an adapter must commit the admission write and the matching room
//! occupancy flip as one atomic unit, or roll both back. Callers never see
//! a state where only one side changed.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Admission, AdmissionId, DischargeOutcome, NewAdmission};

/// Errors raised by admission store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionStoreError {
    /// Store connection could not be established.
    #[error("admission store connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Read failed during execution.
    #[error("admission store query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
    /// A write inside the atomic unit failed; everything was rolled back.
    #[error("admission transaction rolled back: {message}")]
    Transaction {
        /// Adapter-level failure description.
        message: String,
    },
    /// The chosen room was not `Available` when the transaction locked it.
    /// A concurrent admission won the race; nothing was written.
    #[error("room {room_id} is no longer available")]
    RoomUnavailable {
        /// Raw identifier of the contested room.
        room_id: i32,
    },
    /// The referenced room row does not exist.
    #[error("room {room_id} does not exist")]
    RoomMissing {
        /// Raw identifier of the missing room.
        room_id: i32,
    },
    /// The referenced admission row does not exist.
    #[error("admission {admission_id} does not exist")]
    AdmissionMissing {
        /// Raw identifier of the missing admission.
        admission_id: i32,
    },
}

impl AdmissionStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for read failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for rolled-back writes.
    pub fn transaction(message: impl Into<String>) -> Self {
        Self::Transaction {
            message: message.into(),
        }
    }

    /// Helper for rooms lost to a concurrent admission.
    pub const fn room_unavailable(room_id: i32) -> Self {
        Self::RoomUnavailable { room_id }
    }

    /// Helper for missing room references.
    pub const fn room_missing(room_id: i32) -> Self {
        Self::RoomMissing { room_id }
    }

    /// Helper for missing admission references.
    pub const fn admission_missing(admission_id: i32) -> Self {
        Self::AdmissionMissing { admission_id }
    }
}

/// Port executing the workflow's atomic units against the record store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdmissionStore: Send + Sync {
    /// Insert the admission (`Admitted`, no discharge date) and flip its
    /// room `Available → Occupied` in one transaction. The adapter must
    /// lock the room row and re-check its status inside the transaction so
    /// concurrent admissions of the same room are serialized.
    async fn admit(&self, admission: NewAdmission) -> Result<AdmissionId, AdmissionStoreError>;

    /// Set the admission to `Discharged` with the given date and flip its
    /// room `Occupied → Available` in one transaction. The adapter must
    /// re-check the admission's status under a row lock inside the
    /// transaction: an already-discharged admission yields
    /// [`DischargeOutcome::AlreadyDischarged`] without touching the room,
    /// even when two discharge calls race.
    async fn discharge(
        &self,
        admission_id: AdmissionId,
        discharge_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<DischargeOutcome, AdmissionStoreError>;

    /// Read an admission by identity.
    async fn find_by_id(
        &self,
        admission_id: AdmissionId,
    ) -> Result<Option<Admission>, AdmissionStoreError>;
}
