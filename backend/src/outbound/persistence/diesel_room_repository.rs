//! PostgreSQL-backed [`RoomRepository`] implementation using Diesel.
//!
//! Read-only adapter: availability queries never change a room's status.
//! Occupancy flips live in the admission store's transactions.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RoomRepository, RoomRepositoryError};
use crate::domain::{Room, RoomId, RoomStatus, RoomType};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::RoomRow;
use super::pool::{DbPool, PoolError};
use super::schema::rooms;

/// Diesel-backed implementation of the room repository port.
#[derive(Clone)]
pub struct DieselRoomRepository {
    pool: DbPool,
}

impl DieselRoomRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> RoomRepositoryError {
    map_pool_error(error, RoomRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> RoomRepositoryError {
    map_diesel_error(
        error,
        RoomRepositoryError::query,
        RoomRepositoryError::connection,
    )
}

/// Convert a rooms row into a domain room, rejecting unknown status text.
pub(crate) fn row_to_room(row: RoomRow) -> Result<Room, RoomRepositoryError> {
    let RoomRow {
        id,
        room_number,
        room_type,
        status,
    } = row;

    let room_type: RoomType = room_type
        .parse()
        .map_err(|err| RoomRepositoryError::query(format!("room {id}: {err}")))?;
    let status: RoomStatus = status
        .parse()
        .map_err(|err| RoomRepositoryError::query(format!("room {id}: {err}")))?;

    Ok(Room {
        id: RoomId::new(id),
        room_number,
        room_type,
        status,
    })
}

#[async_trait]
impl RoomRepository for DieselRoomRepository {
    async fn find_available(&self, room_type: RoomType) -> Result<Vec<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<RoomRow> = rooms::table
            .filter(
                rooms::room_type
                    .eq(room_type.as_str())
                    .and(rooms::status.eq(RoomStatus::Available.as_str())),
            )
            .order(rooms::room_number.asc())
            .select(RoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter().map(row_to_room).collect()
    }
}
