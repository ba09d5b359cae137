//! User Data Service
//!
//! Produces a fully assembled [`User`] aggregate for a numeric user id by
//! issuing four lookups (user info, activity, average sessions, performance)
//! against a [`Backend`] and merging the results.
//!
//! The backend is an explicit dependency passed in at construction: the HTTP
//! implementation talks to the network, the fixture implementation serves
//! the bundled dataset, and tests substitute their own. There is no hidden
//! singleton.

mod fixtures;
mod http;

pub use fixtures::FixtureBackend;
pub use http::HttpBackend;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use crate::config::EndpointTemplates;
use crate::models::{
    ActivityPayload, AverageSessionsPayload, ModelError, PerformancePayload, User,
    UserPayload,
};

/// The four dashboard endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    User,
    Activity,
    AverageSessions,
    Performance,
}

impl Endpoint {
    /// Stable key, used for fixture-table lookups
    pub fn key(self) -> &'static str {
        match self {
            Endpoint::User => "user",
            Endpoint::Activity => "activity",
            Endpoint::AverageSessions => "average-sessions",
            Endpoint::Performance => "performance",
        }
    }

    /// Path template for this endpoint
    pub fn template(self, templates: &EndpointTemplates) -> &str {
        match self {
            Endpoint::User => &templates.user,
            Endpoint::Activity => &templates.activity,
            Endpoint::AverageSessions => &templates.average_sessions,
            Endpoint::Performance => &templates.performance,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors that can occur while fetching user data
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Backend unreachable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status} for {url}")]
    Api { status: u16, url: String },

    #[error("No fixture entry for endpoint {endpoint}, user {user_id}")]
    MissingFixture { endpoint: Endpoint, user_id: u32 },

    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Model construction failed: {0}")]
    Model(#[from] ModelError),
}

/// Source of raw endpoint payloads
///
/// Implementations return the inner `data` payload of the response envelope
/// as raw JSON; decoding into typed payloads happens in the service.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the payload for one endpoint and user id
    async fn fetch(&self, endpoint: Endpoint, user_id: u32) -> Result<Value, ServiceError>;
}

/// Service assembling complete user profiles from a backend
#[derive(Clone)]
pub struct UserService {
    backend: Arc<dyn Backend>,
}

impl UserService {
    /// Create a service over the given backend
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Fetch and decode one endpoint payload
    async fn fetch_payload<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        user_id: u32,
    ) -> Result<T, ServiceError> {
        let value = self.backend.fetch(endpoint, user_id).await.map_err(|e| {
            tracing::error!(%endpoint, user_id, error = %e, "Fetch failed");
            e
        })?;

        serde_json::from_value(value).map_err(|e| {
            tracing::error!(%endpoint, user_id, error = %e, "Payload decode failed");
            ServiceError::Decode(e)
        })
    }

    /// Fetch the complete profile for one user
    ///
    /// The four lookups run one after another; any failure aborts the whole
    /// fetch with the first error and no partial aggregate is returned.
    /// Idempotent per id for a given backend state. No caching, no retries.
    pub async fn fetch_user_profile(&self, user_id: u32) -> Result<User, ServiceError> {
        tracing::debug!(user_id, "Fetching user profile");

        let user: UserPayload = self.fetch_payload(Endpoint::User, user_id).await?;
        let activity: ActivityPayload =
            self.fetch_payload(Endpoint::Activity, user_id).await?;
        let average_sessions: AverageSessionsPayload = self
            .fetch_payload(Endpoint::AverageSessions, user_id)
            .await?;
        let performance: PerformancePayload =
            self.fetch_payload(Endpoint::Performance, user_id).await?;

        let user = User::assemble(user, activity, average_sessions, performance)
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "Model construction failed");
                ServiceError::Model(e)
            })?;

        tracing::debug!(user_id, name = %user.full_name(), "Profile assembled");
        Ok(user)
    }

    /// Best-effort existence probe
    ///
    /// Same lookup as the user-info fetch, with every error kind reduced to
    /// `false` instead of propagating.
    pub async fn user_exists(&self, user_id: u32) -> bool {
        match self.backend.fetch(Endpoint::User, user_id).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(user_id, error = %e, "Existence probe failed");
                false
            }
        }
    }
}
