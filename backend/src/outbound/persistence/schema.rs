//! Diesel table definitions for the externally owned hospital schema.
//!
//! The schema is fixed outside this service (the record store predates it),
//! so these definitions mirror the live database rather than migrations
//! owned by this repository. Only the tables the workflow touches are
//! declared; the reporting and appointment surfaces read the rest.

diesel::table! {
    /// Patient directory. The workflow only checks existence.
    patients (id) {
        /// Primary key: integer identity.
        id -> Int4,
        /// Given name.
        first_name -> Varchar,
        /// Family name.
        last_name -> Varchar,
        /// Date of birth, when recorded.
        date_of_birth -> Nullable<Date>,
        /// Contact phone number.
        phone -> Nullable<Varchar>,
        /// Contact email address.
        email -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Doctor directory. The workflow only checks existence.
    doctors (id) {
        /// Primary key: integer identity.
        id -> Int4,
        /// Given name.
        first_name -> Varchar,
        /// Family name.
        last_name -> Varchar,
        /// Medical specialization label.
        specialization -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Rooms with their occupancy flag.
    rooms (id) {
        /// Primary key: integer identity.
        id -> Int4,
        /// Door/sign number shown to staff.
        room_number -> Varchar,
        /// Text-valued category: `General`, `Private`, or `ICU`.
        room_type -> Varchar,
        /// Text-valued occupancy flag: `Available` or `Occupied`.
        status -> Varchar,
    }
}

diesel::table! {
    /// Admission records; rows are never deleted.
    admissions (id) {
        /// Primary key: integer identity.
        id -> Int4,
        /// Admitted patient.
        patient_id -> Int4,
        /// Attending doctor.
        doctor_id -> Int4,
        /// Occupied room.
        room_id -> Int4,
        /// Day the stay began.
        admission_date -> Date,
        /// Day the stay ended; null while admitted.
        discharge_date -> Nullable<Date>,
        /// Text-valued lifecycle state: `Admitted` or `Discharged`.
        status -> Varchar,
        /// Free-text notes accumulated over the stay.
        notes -> Nullable<Text>,
    }
}

diesel::joinable!(admissions -> patients (patient_id));
diesel::joinable!(admissions -> doctors (doctor_id));
diesel::joinable!(admissions -> rooms (room_id));

diesel::allow_tables_to_appear_in_same_query!(admissions, doctors, patients, rooms);
