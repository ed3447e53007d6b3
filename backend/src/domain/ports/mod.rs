//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports describe how the domain reaches the record store; the
//! driving port is the workflow surface offered to inbound adapters. Each
//! driven port exposes a strongly typed error enum so adapters map their
//! failures into predictable variants instead of returning `anyhow::Result`.

mod admission_command;
mod admission_store;
mod directory;
mod room_repository;

pub use admission_command::{
    AdmissionCommand, AdmitPatientRequest, AdmitPatientResponse, FixtureAdmissionCommand,
    ProcessDischargeRequest, ProcessDischargeResponse,
};
#[cfg(test)]
pub use admission_store::MockAdmissionStore;
pub use admission_store::{AdmissionStore, AdmissionStoreError};
#[cfg(test)]
pub use directory::MockDirectory;
pub use directory::{Directory, DirectoryError, FixtureDirectory};
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::{FixtureRoomRepository, RoomRepository, RoomRepositoryError};
