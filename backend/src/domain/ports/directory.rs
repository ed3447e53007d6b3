//! Port for patient/doctor existence checks.
//!
//! The admission workflow references patients and doctors by foreign key
//! only; their own lifecycle belongs to the directory surface outside this
//! core. The workflow merely needs to know whether a referenced record
//! exists before it writes an admission.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DoctorId, PatientId};

/// Errors raised by directory adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Directory connection could not be established.
    #[error("directory connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Lookup failed during execution.
    #[error("directory query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl DirectoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for lookup failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port answering whether referenced directory records exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Directory: Send + Sync {
    /// Whether a patient record with this identity exists.
    async fn patient_exists(&self, patient_id: PatientId) -> Result<bool, DirectoryError>;

    /// Whether a doctor record with this identity exists.
    async fn doctor_exists(&self, doctor_id: DoctorId) -> Result<bool, DirectoryError>;
}

/// Fixture directory in which every referenced record exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectory;

#[async_trait]
impl Directory for FixtureDirectory {
    async fn patient_exists(&self, _patient_id: PatientId) -> Result<bool, DirectoryError> {
        Ok(true)
    }

    async fn doctor_exists(&self, _doctor_id: DoctorId) -> Result<bool, DirectoryError> {
        Ok(true)
    }
}
