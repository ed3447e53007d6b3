//! PostgreSQL-backed [`Directory`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{Directory, DirectoryError};
use crate::domain::{DoctorId, PatientId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::{doctors, patients};

/// Diesel-backed implementation of the directory port.
#[derive(Clone)]
pub struct DieselDirectory {
    pool: DbPool,
}

impl DieselDirectory {
    /// Create a new directory adapter with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> DirectoryError {
    map_pool_error(error, DirectoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> DirectoryError {
    map_diesel_error(error, DirectoryError::query, DirectoryError::connection)
}

#[async_trait]
impl Directory for DieselDirectory {
    async fn patient_exists(&self, patient_id: PatientId) -> Result<bool, DirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let found: Option<i32> = patients::table
            .find(patient_id.get())
            .select(patients::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        Ok(found.is_some())
    }

    async fn doctor_exists(&self, doctor_id: DoctorId) -> Result<bool, DirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let found: Option<i32> = doctors::table
            .find(doctor_id.get())
            .select(doctors::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping coverage; lookups themselves need a live store.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let mapped = map_pool(PoolError::checkout("no connections"));
        assert!(matches!(mapped, DirectoryError::Connection { .. }));
    }

    #[rstest]
    fn diesel_errors_map_to_query_errors() {
        let mapped = map_diesel(diesel::result::Error::NotFound);
        assert!(matches!(mapped, DirectoryError::Query { .. }));
    }
}
