//! Domain layer of the admission workflow.
//!
//! Entities, the transport-agnostic error type, the hexagon's ports, and
//! the two services: the room allocator (read side) and the admission
//! lifecycle service (the workflow's atomic operations). Nothing in this
//! module performs I/O; every external effect goes through a port trait.

pub mod admission;
mod admission_service;
pub mod error;
pub mod ports;
mod room_allocator;

pub use self::admission::{
    Admission, AdmissionId, AdmissionStatus, AdmissionValidationError, DischargeOutcome, DoctorId,
    NewAdmission, NewAdmissionDraft, PatientId, Room, RoomId, RoomStatus, RoomType,
    UnknownValueError,
};
pub use self::admission_service::AdmissionLifecycleService;
pub use self::error::{Error, ErrorCode};
pub use self::room_allocator::RoomAllocator;

/// Convenient result alias for workflow operations.
pub type ApiResult<T> = Result<T, Error>;
