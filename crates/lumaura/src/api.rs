//! # Portal Backend API
//!
//! Typed requests and responses for the portal endpoints the page consumes.
//! The HTTP client itself is the host's business: it plugs in through
//! [`PortalBackend`], which moves raw JSON text in both directions.
//!
//! ```text
//! GET  /api/status                                   → {status, version}
//! GET  /api/portals                                  → [{name, level, activity}]
//! POST /api/portal-evolution/implement-recommendation {recommendation_id}
//!                                                    → {status, result?, error?}
//! POST /api/portal-evolution/record-activity          {portal_name, activity}
//!                                                    → {status, activity?, error?}
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BackendError, BackendResult};

/// Service status endpoint.
pub const STATUS_PATH: &str = "/api/status";
/// Portal listing endpoint.
pub const PORTALS_PATH: &str = "/api/portals";
/// Recommendation implementation endpoint.
pub const IMPLEMENT_RECOMMENDATION_PATH: &str = "/api/portal-evolution/implement-recommendation";
/// Activity recording endpoint.
pub const RECORD_ACTIVITY_PATH: &str = "/api/portal-evolution/record-activity";

/// Status value of a successful response.
pub const STATUS_OK: &str = "ok";

/// Transport to the portal backend.
pub trait PortalBackend: Send + Sync {
    /// Issues a GET and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] when no response arrives.
    fn get(&self, path: &str) -> BackendResult<String>;

    /// POSTs a JSON body and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] when no response arrives.
    fn post_json(&self, path: &str, body: &str) -> BackendResult<String>;
}

/// `GET /api/status` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// `"ok"` when healthy.
    pub status: String,
    /// Backend version string.
    #[serde(default)]
    pub version: String,
}

/// One entry of `GET /api/portals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalSummary {
    /// Portal identifier, e.g. `xuvebanker`.
    pub name: String,
    /// Evolution level.
    #[serde(default)]
    pub level: u32,
    /// Recent activity score.
    #[serde(default)]
    pub activity: f64,
}

/// `POST .../implement-recommendation` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementRecommendationRequest {
    /// Recommendation to implement.
    pub recommendation_id: String,
}

/// Evolution result carried by a successful implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Portal the recommendation applied to.
    #[serde(default)]
    pub portal: Option<String>,
    /// Stage the portal evolved to, when it evolved.
    #[serde(default)]
    pub new_stage: Option<String>,
}

/// `POST .../implement-recommendation` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementRecommendationResponse {
    /// `"ok"` or `"error"`. Some rejections carry only `error`.
    #[serde(default)]
    pub status: String,
    /// Present on success.
    #[serde(default)]
    pub result: Option<RecommendationResult>,
    /// Present on failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST .../record-activity` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordActivityRequest {
    /// Portal the activity happened on.
    pub portal_name: String,
    /// Free-form description.
    pub activity: String,
}

/// `POST .../record-activity` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordActivityResponse {
    /// `"ok"` or `"error"`. Some rejections carry only `error`.
    #[serde(default)]
    pub status: String,
    /// The stored activity record, shape owned by the backend.
    #[serde(default)]
    pub activity: Option<serde_json::Value>,
    /// Present on failure.
    #[serde(default)]
    pub error: Option<String>,
}

fn is_ok(status: &str) -> bool {
    status == STATUS_OK
}

impl ImplementRecommendationResponse {
    /// Whether the backend reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        is_ok(&self.status)
    }
}

impl RecordActivityResponse {
    /// Whether the backend reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        is_ok(&self.status)
    }
}

/// Typed client over a [`PortalBackend`].
///
/// Non-`ok` statuses are returned as decoded responses, not errors, so the
/// caller can surface the backend's own message.
#[derive(Debug)]
pub struct PortalApi<B> {
    backend: B,
}

impl<B: PortalBackend> PortalApi<B> {
    /// Wraps a transport.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying transport.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetches the service status.
    ///
    /// # Errors
    ///
    /// Transport failure or an undecodable body.
    pub fn status(&self) -> BackendResult<ServiceStatus> {
        let body = self.backend.get(STATUS_PATH)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches the portal list in backend order.
    ///
    /// # Errors
    ///
    /// Transport failure or an undecodable body.
    pub fn portals(&self) -> BackendResult<Vec<PortalSummary>> {
        let body = self.backend.get(PORTALS_PATH)?;
        let portals: Vec<PortalSummary> = serde_json::from_str(&body)?;
        debug!(count = portals.len(), "Fetched portal list");
        Ok(portals)
    }

    /// Asks the backend to implement a recommendation.
    ///
    /// # Errors
    ///
    /// Transport failure or an undecodable body.
    pub fn implement_recommendation(
        &self,
        recommendation_id: &str,
    ) -> BackendResult<ImplementRecommendationResponse> {
        let request = ImplementRecommendationRequest {
            recommendation_id: recommendation_id.to_owned(),
        };
        self.post(IMPLEMENT_RECOMMENDATION_PATH, &request)
    }

    /// Records an activity against a portal.
    ///
    /// # Errors
    ///
    /// Transport failure or an undecodable body.
    pub fn record_activity(
        &self,
        portal_name: &str,
        activity: &str,
    ) -> BackendResult<RecordActivityResponse> {
        let request = RecordActivityRequest {
            portal_name: portal_name.to_owned(),
            activity: activity.to_owned(),
        };
        self.post(RECORD_ACTIVITY_PATH, &request)
    }

    fn post<Req, Resp>(&self, path: &str, request: &Req) -> BackendResult<Resp>
    where
        Req: Serialize,
        Resp: for<'de> Deserialize<'de>,
    {
        let body = serde_json::to_string(request)?;
        let response = self.backend.post_json(path, &body)?;
        serde_json::from_str(&response).map_err(BackendError::from)
    }
}
