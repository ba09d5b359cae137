//! Fixture backend
//!
//! Serves the bundled sample dataset instead of calling the network.
//! The table is keyed by endpoint category, then by user id, and holds the
//! same payload shapes the HTTP backend returns. A missing entry is the
//! fixture-mode equivalent of a 404.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use super::{Backend, Endpoint, ServiceError};

/// Dataset embedded at compile time; two sample users, ids 12 and 18
const BUNDLED_DATASET: &str = include_str!("../../fixtures/users.json");

/// Backend answering from an in-memory fixture table
#[derive(Debug)]
pub struct FixtureBackend {
    table: HashMap<String, HashMap<String, Value>>,
}

impl FixtureBackend {
    /// Load the dataset bundled with the crate
    pub fn bundled() -> Result<Self, ServiceError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a custom dataset from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let table = serde_json::from_str(json)?;
        Ok(Self { table })
    }

    /// User ids present for the user-info endpoint
    pub fn user_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .table
            .get(Endpoint::User.key())
            .map(|entries| entries.keys().filter_map(|k| k.parse().ok()).collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }
}

#[async_trait]
impl Backend for FixtureBackend {
    async fn fetch(&self, endpoint: Endpoint, user_id: u32) -> Result<Value, ServiceError> {
        self.table
            .get(endpoint.key())
            .and_then(|entries| entries.get(&user_id.to_string()))
            .cloned()
            .ok_or(ServiceError::MissingFixture { endpoint, user_id })
    }
}
