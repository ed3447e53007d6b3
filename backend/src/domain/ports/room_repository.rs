//! Port for read-only room availability queries.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Room, RoomType};

/// Errors raised by room repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomRepositoryError {
    /// Repository connection could not be established.
    #[error("room repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("room repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl RoomRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for listing rooms that can take a new admission.
///
/// Occupancy flips are deliberately absent here: a room's status only ever
/// changes inside the admission store's transactions, paired with the
/// matching admission write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Rooms of the given type with status `Available`, ordered by room
    /// number. An empty result means no capacity, not a failure.
    async fn find_available(&self, room_type: RoomType) -> Result<Vec<Room>, RoomRepositoryError>;
}

/// Fixture implementation for tests that never hit room availability.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRoomRepository;

#[async_trait]
impl RoomRepository for FixtureRoomRepository {
    async fn find_available(&self, _room_type: RoomType) -> Result<Vec<Room>, RoomRepositoryError> {
        Ok(Vec::new())
    }
}
