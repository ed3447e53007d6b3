//! PostgreSQL-backed [`AdmissionStore`] implementation using Diesel.
//!
//! This adapter owns the workflow's two atomic units. Each runs as a single
//! database transaction so the admission write and the room occupancy flip
//! commit or roll back together:
//!
//! - `admit` locks the room row (`SELECT ... FOR UPDATE`), re-checks that it
//!   is still `Available`, inserts the admission, and marks the room
//!   `Occupied`. A concurrent admit targeting the same room blocks on the
//!   lock and then observes `Occupied`, so it can never double-book.
//! - `discharge` locks the admission row, re-checks that it is still
//!   `Admitted`, stamps the discharge, and releases the room. A repeated or
//!   racing discharge observes `Discharged` under the lock and leaves the
//!   room untouched.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::admission::normalise_notes;
use crate::domain::ports::{AdmissionStore, AdmissionStoreError};
use crate::domain::{
    Admission, AdmissionId, AdmissionStatus, DischargeOutcome, DoctorId, NewAdmission, PatientId,
    RoomId, RoomStatus,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AdmissionRow, NewAdmissionRow};
use super::pool::{DbPool, PoolError};
use super::schema::{admissions, rooms};

/// Diesel-backed implementation of the admission store port.
#[derive(Clone)]
pub struct DieselAdmissionStore {
    pool: DbPool,
}

impl DieselAdmissionStore {
    /// Create a new store with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> AdmissionStoreError {
    map_pool_error(error, AdmissionStoreError::connection)
}

fn map_read(error: diesel::result::Error) -> AdmissionStoreError {
    map_diesel_error(
        error,
        |message| AdmissionStoreError::query(message),
        |message| AdmissionStoreError::connection(message),
    )
}

/// Failures inside a transaction have been rolled back in full, so they map
/// to the transaction variant rather than a plain query error.
fn map_write(error: diesel::result::Error) -> AdmissionStoreError {
    map_diesel_error(
        error,
        |message| AdmissionStoreError::transaction(message),
        |message| AdmissionStoreError::connection(message),
    )
}

/// Convert an admissions row into a validated domain admission.
pub(crate) fn row_to_admission(row: AdmissionRow) -> Result<Admission, AdmissionStoreError> {
    let AdmissionRow {
        id,
        patient_id,
        doctor_id,
        room_id,
        admission_date,
        discharge_date,
        status,
        notes,
    } = row;

    let status: AdmissionStatus = status
        .parse()
        .map_err(|err| AdmissionStoreError::query(format!("admission {id}: {err}")))?;

    Ok(Admission {
        id: AdmissionId::new(id),
        patient_id: PatientId::new(patient_id),
        doctor_id: DoctorId::new(doctor_id),
        room_id: RoomId::new(room_id),
        admission_date,
        discharge_date,
        status,
        notes,
    })
}

/// Append discharge notes to whatever the admission already carries.
pub(crate) fn merge_notes(existing: Option<&str>, discharge: Option<&str>) -> Option<String> {
    match (existing, discharge) {
        (None, None) => None,
        (Some(kept), None) => Some(kept.to_owned()),
        (None, Some(added)) => Some(added.to_owned()),
        (Some(kept), Some(added)) => Some(format!("{kept}\n{added}")),
    }
}

/// What the admit transaction observed under the room row lock.
enum AdmitTxOutcome {
    Admitted(i32),
    RoomUnavailable,
    RoomMissing,
}

/// What the discharge transaction observed under the admission row lock.
enum DischargeTxOutcome {
    Discharged,
    AlreadyDischarged,
    AdmissionMissing,
}

#[async_trait]
impl AdmissionStore for DieselAdmissionStore {
    async fn admit(&self, admission: NewAdmission) -> Result<AdmissionId, AdmissionStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let room_id = admission.room_id().get();
        let new_row = NewAdmissionRow {
            patient_id: admission.patient_id().get(),
            doctor_id: admission.doctor_id().get(),
            room_id,
            admission_date: admission.admission_date(),
            status: AdmissionStatus::Admitted.as_str(),
            notes: admission.notes().map(str::to_owned),
        };

        let outcome = conn
            .transaction::<AdmitTxOutcome, diesel::result::Error, _>(|conn| {
                async move {
                    let status: Option<String> = rooms::table
                        .find(room_id)
                        .for_update()
                        .select(rooms::status)
                        .first(conn)
                        .await
                        .optional()?;

                    let Some(status) = status else {
                        return Ok(AdmitTxOutcome::RoomMissing);
                    };
                    if status != RoomStatus::Available.as_str() {
                        return Ok(AdmitTxOutcome::RoomUnavailable);
                    }

                    let admission_id = diesel::insert_into(admissions::table)
                        .values(&new_row)
                        .returning(admissions::id)
                        .get_result::<i32>(conn)
                        .await?;

                    diesel::update(rooms::table.find(room_id))
                        .set(rooms::status.eq(RoomStatus::Occupied.as_str()))
                        .execute(conn)
                        .await?;

                    Ok(AdmitTxOutcome::Admitted(admission_id))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_write)?;

        match outcome {
            AdmitTxOutcome::Admitted(id) => Ok(AdmissionId::new(id)),
            AdmitTxOutcome::RoomUnavailable => Err(AdmissionStoreError::room_unavailable(room_id)),
            AdmitTxOutcome::RoomMissing => Err(AdmissionStoreError::room_missing(room_id)),
        }
    }

    async fn discharge(
        &self,
        admission_id: AdmissionId,
        discharge_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<DischargeOutcome, AdmissionStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let id = admission_id.get();
        let discharge_notes = normalise_notes(notes);

        let outcome = conn
            .transaction::<DischargeTxOutcome, diesel::result::Error, _>(|conn| {
                async move {
                    let row: Option<AdmissionRow> = admissions::table
                        .find(id)
                        .for_update()
                        .select(AdmissionRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;

                    let Some(row) = row else {
                        return Ok(DischargeTxOutcome::AdmissionMissing);
                    };
                    if row.status == AdmissionStatus::Discharged.as_str() {
                        return Ok(DischargeTxOutcome::AlreadyDischarged);
                    }

                    let merged = merge_notes(row.notes.as_deref(), discharge_notes.as_deref());

                    diesel::update(admissions::table.find(id))
                        .set((
                            admissions::status.eq(AdmissionStatus::Discharged.as_str()),
                            admissions::discharge_date.eq(Some(discharge_date)),
                            admissions::notes.eq(merged),
                        ))
                        .execute(conn)
                        .await?;

                    diesel::update(rooms::table.find(row.room_id))
                        .set(rooms::status.eq(RoomStatus::Available.as_str()))
                        .execute(conn)
                        .await?;

                    Ok(DischargeTxOutcome::Discharged)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_write)?;

        match outcome {
            DischargeTxOutcome::Discharged => Ok(DischargeOutcome::Discharged),
            DischargeTxOutcome::AlreadyDischarged => Ok(DischargeOutcome::AlreadyDischarged),
            DischargeTxOutcome::AdmissionMissing => {
                Err(AdmissionStoreError::admission_missing(id))
            }
        }
    }

    async fn find_by_id(
        &self,
        admission_id: AdmissionId,
    ) -> Result<Option<Admission>, AdmissionStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row = admissions::table
            .find(admission_id.get())
            .select(AdmissionRow::as_select())
            .first::<AdmissionRow>(&mut conn)
            .await
            .optional()
            .map_err(map_read)?;

        row.map(row_to_admission).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion, note merging, and error mapping coverage.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn admitted_row() -> AdmissionRow {
        AdmissionRow {
            id: 50,
            patient_id: 7,
            doctor_id: 3,
            room_id: 101,
            admission_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            discharge_date: None,
            status: "Admitted".to_owned(),
            notes: Some("observation".to_owned()),
        }
    }

    #[rstest]
    fn row_conversion_builds_a_domain_admission(admitted_row: AdmissionRow) {
        let admission = row_to_admission(admitted_row).expect("valid row converts");

        assert_eq!(admission.id, AdmissionId::new(50));
        assert_eq!(admission.status, AdmissionStatus::Admitted);
        assert_eq!(admission.discharge_date, None);
    }

    #[rstest]
    fn row_conversion_rejects_unknown_status(mut admitted_row: AdmissionRow) {
        admitted_row.status = "Pending".to_owned();

        let error = row_to_admission(admitted_row).expect_err("unknown status fails");
        assert!(matches!(error, AdmissionStoreError::Query { .. }));
        assert!(error.to_string().contains("admission 50"));
    }

    #[rstest]
    #[case(None, None, None)]
    #[case(Some("kept"), None, Some("kept"))]
    #[case(None, Some("added"), Some("added"))]
    #[case(Some("kept"), Some("added"), Some("kept\nadded"))]
    fn notes_merge_appends_on_a_new_line(
        #[case] existing: Option<&str>,
        #[case] discharge: Option<&str>,
        #[case] merged: Option<&str>,
    ) {
        assert_eq!(
            merge_notes(existing, discharge),
            merged.map(str::to_owned)
        );
    }

    #[rstest]
    fn write_failures_map_to_the_transaction_variant() {
        let mapped = map_write(diesel::result::Error::RollbackTransaction);
        assert!(matches!(mapped, AdmissionStoreError::Transaction { .. }));
    }

    #[rstest]
    fn pool_failures_map_to_the_connection_variant() {
        let mapped = map_pool(PoolError::checkout("exhausted"));
        assert!(matches!(mapped, AdmissionStoreError::Connection { .. }));
    }
}
