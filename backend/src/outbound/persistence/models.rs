//! Internal Diesel row structs for the admission workflow tables.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. Status columns are read as text and parsed into domain enums by
//! the repositories.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{admissions, rooms};

/// Row struct for reading from the rooms table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    pub status: String,
}

/// Row struct for reading from the admissions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = admissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AdmissionRow {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub room_id: i32,
    pub admission_date: NaiveDate,
    pub discharge_date: Option<NaiveDate>,
    pub status: String,
    pub notes: Option<String>,
}

/// Insertable struct for creating admission records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = admissions)]
pub(crate) struct NewAdmissionRow {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub room_id: i32,
    pub admission_date: NaiveDate,
    pub status: &'static str,
    pub notes: Option<String>,
}
