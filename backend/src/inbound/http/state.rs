//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::domain::ports::AdmissionCommand;

/// State injected into every handler via `web::Data`.
///
/// Handlers only see the driving port, never concrete services, so tests can
/// swap in fixtures or mocks without touching routing.
#[derive(Clone)]
pub struct HttpState {
    admissions: Arc<dyn AdmissionCommand>,
}

impl HttpState {
    /// Build state around an admission command implementation.
    pub fn new(admissions: Arc<dyn AdmissionCommand>) -> Self {
        Self { admissions }
    }

    /// The admission workflow driving port.
    pub fn admissions(&self) -> &dyn AdmissionCommand {
        self.admissions.as_ref()
    }
}
