//! Portal page interactions.
//!
//! Page startup and button handlers on the portal dashboard call into the
//! backend through [`PortalInteractions`]. Failures are logged and, for
//! recommendations, surfaced to the user through [`Alerts`]. Nothing here
//! ever touches the render loop, so a backend outage never stops the visuals.

use tracing::{error, info, warn};

use crate::api::{PortalApi, PortalBackend, PortalSummary, ServiceStatus};
use crate::error::{BackendError, BackendResult};

/// Alert shown when implementing a recommendation fails in transit.
pub const RECOMMENDATION_ALERT: &str = "Error implementing recommendation";

/// User-facing alert sink.
pub trait Alerts: Send + Sync {
    /// Shows `message` to the user.
    fn alert(&self, message: &str);
}

/// Alerts that only reach the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlerts;

impl Alerts for LogAlerts {
    fn alert(&self, message: &str) {
        warn!(alert = message, "User alert");
    }
}

/// A portal moved to a new evolution stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageChange {
    /// Portal that evolved, when the backend named it.
    pub portal: Option<String>,
    /// The new stage.
    pub new_stage: String,
}

/// What happened to a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationOutcome {
    /// Implemented; carries the evolution it caused, if any.
    Implemented(Option<StageChange>),
    /// Rejected or lost; the user has been alerted.
    Failed,
}

/// Backend-facing handlers for the portal page.
#[derive(Debug)]
pub struct PortalInteractions<B, A> {
    api: PortalApi<B>,
    alerts: A,
}

impl<B: PortalBackend> PortalInteractions<B, LogAlerts> {
    /// Handlers for headless hosts, where alerts go to the log.
    pub fn headless(api: PortalApi<B>) -> Self {
        Self::new(api, LogAlerts)
    }
}

impl<B: PortalBackend, A: Alerts> PortalInteractions<B, A> {
    /// Creates the handlers.
    pub fn new(api: PortalApi<B>, alerts: A) -> Self {
        Self { api, alerts }
    }

    /// The typed client.
    pub fn api(&self) -> &PortalApi<B> {
        &self.api
    }

    /// The alert sink.
    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    /// Checks the service status on page load. Failures are logged only.
    pub fn check_status(&self) -> Option<ServiceStatus> {
        match self.api.status() {
            Ok(status) => {
                info!(status = %status.status, version = %status.version, "API status");
                Some(status)
            }
            Err(e) => {
                error!(error = %e, "Error checking API status");
                None
            }
        }
    }

    /// Loads the portal list. Failures are logged and yield an empty list.
    pub fn load_portals(&self) -> Vec<PortalSummary> {
        match self.api.portals() {
            Ok(portals) => {
                info!(count = portals.len(), "Portals loaded");
                portals
            }
            Err(e) => {
                error!(error = %e, "Error loading portals");
                Vec::new()
            }
        }
    }

    /// Implements a recommendation. Any failure raises an alert.
    pub fn implement_recommendation(&self, recommendation_id: &str) -> RecommendationOutcome {
        match self.try_implement(recommendation_id) {
            Ok(change) => {
                info!(
                    recommendation_id,
                    evolved = change.is_some(),
                    "Recommendation implemented"
                );
                RecommendationOutcome::Implemented(change)
            }
            Err(BackendError::Rejected(reason)) => {
                error!(recommendation_id, %reason, "Error implementing recommendation");
                self.alerts.alert(&format!("{RECOMMENDATION_ALERT}: {reason}"));
                RecommendationOutcome::Failed
            }
            Err(e) => {
                error!(recommendation_id, error = %e, "Error implementing recommendation");
                self.alerts.alert(RECOMMENDATION_ALERT);
                RecommendationOutcome::Failed
            }
        }
    }

    fn try_implement(&self, recommendation_id: &str) -> BackendResult<Option<StageChange>> {
        let response = self.api.implement_recommendation(recommendation_id)?;
        if !response.is_ok() {
            return Err(BackendError::Rejected(
                response.error.unwrap_or_else(|| "unknown error".to_owned()),
            ));
        }
        Ok(response.result.and_then(|result| {
            result.new_stage.map(|new_stage| StageChange {
                portal: result.portal,
                new_stage,
            })
        }))
    }

    /// Records portal activity. Failures are logged only.
    ///
    /// Returns whether the backend stored it.
    pub fn record_activity(&self, portal_name: &str, activity: &str) -> bool {
        match self.api.record_activity(portal_name, activity) {
            Ok(response) if response.is_ok() => {
                info!(portal_name, activity = ?response.activity, "Activity recorded");
                true
            }
            Ok(response) => {
                error!(portal_name, error = ?response.error, "Error recording activity");
                false
            }
            Err(e) => {
                error!(portal_name, error = %e, "Error recording activity");
                false
            }
        }
    }
}
