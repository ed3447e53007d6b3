//! Liveness and readiness probes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared readiness flag flipped once the database pool is usable.
#[derive(Debug, Clone, Default)]
pub struct HealthState {
    ready: Arc<AtomicBool>,
}

impl HealthState {
    /// Create a state that reports not-ready until marked otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready to accept traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Whether the service is ready to accept traffic.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

/// Probe response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    /// `ok` when the probe passes, `unavailable` otherwise.
    pub status: String,
}

/// Liveness probe; succeeds whenever the process can serve requests.
#[utoipa::path(
    get,
    path = "/healthz/live",
    tag = "health",
    operation_id = "livenessProbe",
    responses((status = 200, description = "Process is alive", body = HealthBody))
)]
#[get("/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody {
        status: "ok".to_owned(),
    })
}

/// Readiness probe; fails until the database pool has been established.
#[utoipa::path(
    get,
    path = "/healthz/ready",
    tag = "health",
    operation_id = "readinessProbe",
    responses(
        (status = 200, description = "Service is ready", body = HealthBody),
        (status = 503, description = "Service is not ready", body = HealthBody),
    )
)]
#[get("/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if state.is_ready() {
        HttpResponse::Ok().json(HealthBody {
            status: "ok".to_owned(),
        })
    } else {
        HttpResponse::ServiceUnavailable().json(HealthBody {
            status: "unavailable".to_owned(),
        })
    }
}
