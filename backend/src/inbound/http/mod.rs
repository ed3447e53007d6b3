//! HTTP inbound adapter.
//!
//! Routes, request validation, shared handler state, probe endpoints, and
//! the mapping from domain errors to HTTP responses.

pub mod admissions;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
pub use health::HealthState;
pub use state::HttpState;
