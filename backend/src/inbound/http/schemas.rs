//! OpenAPI schema mirrors for domain types.
//!
//! The domain stays free of `utoipa` derives; these wrappers describe the
//! serialised shape of the domain error envelope for the generated document.

use serde::Serialize;
use utoipa::ToSchema;

/// Mirror of the domain error code spellings.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[schema(as = ErrorCode)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// A referenced patient, doctor, room, or admission does not exist.
    NotFound,
    /// No available room of the requested type.
    NoCapacity,
    /// A store-level write failed and was rolled back.
    TransactionFailed,
    /// The record store could not be reached.
    ServiceUnavailable,
    /// An unexpected internal error.
    InternalError,
}

/// Mirror of the domain error envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = Error)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable code.
    pub code: ErrorCodeSchema,
    /// Human-readable message.
    pub message: String,
    /// Supplementary structured details, such as the offending field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Correlation identifier echoed from the `x-trace-id` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}
