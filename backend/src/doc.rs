//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers the admission workflow paths, the health probes, and the schema
//! wrappers that describe domain types without coupling them to utoipa. The
//! generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admission workflow API",
        description = "HTTP interface for patient admission, discharge, and room allocation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::admissions::admit_patient,
        crate::inbound::http::admissions::process_discharge,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "admissions", description = "Patient admission and discharge operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
