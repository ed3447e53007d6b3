//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementations of the domain's driven ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` connection pooling.
//!
//! Principles:
//!
//! - **Thin adapters**: repositories translate between Diesel rows and
//!   domain types; business rules stay in the domain services.
//! - **Internal models**: row structs and table definitions never leak out
//!   of this module.
//! - **Atomicity here**: the admit/discharge write pairs are single
//!   database transactions with row locks; see
//!   [`DieselAdmissionStore`].
//! - **Typed errors**: every database failure maps to a port error variant.

mod diesel_admission_store;
mod diesel_directory;
mod diesel_room_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_admission_store::DieselAdmissionStore;
pub use diesel_directory::DieselDirectory;
pub use diesel_room_repository::DieselRoomRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
