//! Admission workflow entities.
//!
//! The record store schema is fixed externally (integer identity columns,
//! text-valued status columns), so identifiers are `i32` newtypes and the
//! enums round-trip to the store's exact text spellings via
//! `FromStr`/`Display`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw store identifier.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw store identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Identity of a patient record.
    PatientId
}
define_id! {
    /// Identity of a doctor record.
    DoctorId
}
define_id! {
    /// Identity of a room record.
    RoomId
}
define_id! {
    /// Identity of an admission record.
    AdmissionId
}

/// Category of a hospital room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    /// Shared ward room.
    General,
    /// Single-occupancy room.
    Private,
    /// Intensive care unit room.
    Icu,
}

impl RoomType {
    /// Store spelling of the room type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Private => "Private",
            Self::Icu => "ICU",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = UnknownValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "General" => Ok(Self::General),
            "Private" => Ok(Self::Private),
            "ICU" => Ok(Self::Icu),
            other => Err(UnknownValueError::new("room type", other)),
        }
    }
}

/// Occupancy flag of a room.
///
/// Invariant: `Occupied` iff exactly one admission referencing the room is
/// in state [`AdmissionStatus::Admitted`]. Only the admission store flips
/// this flag, and only inside the admit/discharge transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomStatus {
    /// Free for a new admission.
    Available,
    /// Held by exactly one active admission.
    Occupied,
}

impl RoomStatus {
    /// Store spelling of the occupancy flag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = UnknownValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Available" => Ok(Self::Available),
            "Occupied" => Ok(Self::Occupied),
            other => Err(UnknownValueError::new("room status", other)),
        }
    }
}

/// Lifecycle state of an admission.
///
/// `Admitted → Discharged` is the only transition and it is terminal; there
/// is no cancellation or reversal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdmissionStatus {
    /// Patient currently occupies the admission's room.
    Admitted,
    /// Patient has left; the room has been released.
    Discharged,
}

impl AdmissionStatus {
    /// Store spelling of the lifecycle state.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admitted => "Admitted",
            Self::Discharged => "Discharged",
        }
    }
}

impl fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdmissionStatus {
    type Err = UnknownValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admitted" => Ok(Self::Admitted),
            "Discharged" => Ok(Self::Discharged),
            other => Err(UnknownValueError::new("admission status", other)),
        }
    }
}

/// Raised when a store text value does not match any known enum spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownValueError {
    kind: &'static str,
    value: String,
}

impl UnknownValueError {
    fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A hospital room as read from the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room identity.
    pub id: RoomId,
    /// Door/sign number shown to staff.
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Current occupancy flag.
    pub status: RoomStatus,
}

/// An admission record: a patient occupying a room under a doctor's care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    /// Admission identity.
    pub id: AdmissionId,
    /// Admitted patient.
    pub patient_id: PatientId,
    /// Attending doctor.
    pub doctor_id: DoctorId,
    /// Occupied room.
    pub room_id: RoomId,
    /// Day the stay began.
    pub admission_date: NaiveDate,
    /// Day the stay ended; absent while the patient is admitted.
    pub discharge_date: Option<NaiveDate>,
    /// Lifecycle state.
    pub status: AdmissionStatus,
    /// Free-text notes accumulated over the stay.
    pub notes: Option<String>,
}

/// Outcome of a discharge request.
///
/// `AlreadyDischarged` is the idempotent no-op: the admission was found in
/// the terminal state, so nothing was written and the room was not flipped
/// a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DischargeOutcome {
    /// The admission and its room were transitioned in this call.
    Discharged,
    /// The admission was already in the terminal state; no writes happened.
    AlreadyDischarged,
}

impl DischargeOutcome {
    /// Wire spelling used in API responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discharged => "discharged",
            Self::AlreadyDischarged => "already_discharged",
        }
    }
}

/// Unvalidated input for [`NewAdmission::new`].
#[derive(Debug, Clone)]
pub struct NewAdmissionDraft {
    /// Patient to admit.
    pub patient_id: PatientId,
    /// Attending doctor.
    pub doctor_id: DoctorId,
    /// Room chosen from the available set.
    pub room_id: RoomId,
    /// Day the stay begins.
    pub admission_date: NaiveDate,
    /// Optional admission notes.
    pub notes: Option<String>,
}

/// Validated draft of an admission about to be written.
///
/// Construction guarantees positive identifiers and normalised notes
/// (trimmed, `None` when blank).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmission {
    patient_id: PatientId,
    doctor_id: DoctorId,
    room_id: RoomId,
    admission_date: NaiveDate,
    notes: Option<String>,
}

/// Validation errors raised by [`NewAdmission::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionValidationError {
    /// An identifier was zero or negative.
    #[error("{field} must be a positive identifier")]
    NonPositiveId {
        /// Name of the offending identifier.
        field: &'static str,
    },
}

impl NewAdmission {
    /// Validate a draft into a writable admission.
    pub fn new(draft: NewAdmissionDraft) -> Result<Self, AdmissionValidationError> {
        let NewAdmissionDraft {
            patient_id,
            doctor_id,
            room_id,
            admission_date,
            notes,
        } = draft;

        for (field, raw) in [
            ("patient id", patient_id.get()),
            ("doctor id", doctor_id.get()),
            ("room id", room_id.get()),
        ] {
            if raw <= 0 {
                return Err(AdmissionValidationError::NonPositiveId { field });
            }
        }

        Ok(Self {
            patient_id,
            doctor_id,
            room_id,
            admission_date,
            notes: normalise_notes(notes),
        })
    }

    /// Patient to admit.
    pub const fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    /// Attending doctor.
    pub const fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    /// Room this admission will occupy.
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Day the stay begins.
    pub const fn admission_date(&self) -> NaiveDate {
        self.admission_date
    }

    /// Normalised admission notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Trim notes and collapse blank input to `None`.
pub(crate) fn normalise_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
