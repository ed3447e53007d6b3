//! Room allocation queries.
//!
//! The allocator answers "which rooms of type T are free". It is read only:
//! occupancy flips happen exclusively inside the admission store's
//! transactions, paired with the matching admission write, so the
//! one-active-admission-per-room invariant cannot be violated from here.

use std::sync::Arc;

use crate::domain::Error;
use crate::domain::ports::{RoomRepository, RoomRepositoryError};
use crate::domain::{Room, RoomType};

fn map_repository_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("room repository unavailable: {message}"))
        }
        RoomRepositoryError::Query { message } => {
            Error::internal(format!("room repository error: {message}"))
        }
    }
}

/// Read-side service over the room repository port.
#[derive(Clone)]
pub struct RoomAllocator<R> {
    rooms: Arc<R>,
}

impl<R> RoomAllocator<R> {
    /// Create an allocator over the given room repository.
    pub const fn new(rooms: Arc<R>) -> Self {
        Self { rooms }
    }
}

impl<R> RoomAllocator<R>
where
    R: RoomRepository,
{
    /// Available rooms of the given type, ordered by room number.
    ///
    /// An empty list is a valid result meaning "no capacity"; deciding
    /// whether that is an error belongs to the caller.
    pub async fn find_available(&self, room_type: RoomType) -> Result<Vec<Room>, Error> {
        self.rooms
            .find_available(room_type)
            .await
            .map_err(map_repository_error)
    }
}
