//! Profile loading lifecycle
//!
//! Tracks the three observable states a profile view cares about: loading,
//! loaded, and errored. Requesting a new id resets the state to loading and
//! then settles on exactly one of the other two based on the service call.
//!
//! Each load attempt carries a generation token. In-flight requests are not
//! cancelled when a newer id is requested; instead, a completing fetch
//! applies its result only if its token still matches the latest requested
//! generation, so an older response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::service::{ServiceError, UserService};
use crate::models::User;

/// Observable state of the profile view's data
#[derive(Debug, Clone)]
pub enum LoadState {
    /// No profile has been requested yet
    Idle,
    /// A fetch for this id is in flight
    Loading { user_id: u32 },
    /// The latest requested profile, fully assembled
    Loaded { user_id: u32, user: Arc<User> },
    /// The latest requested fetch failed
    Errored { user_id: u32, error: Arc<ServiceError> },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    /// The loaded user, if any
    pub fn user(&self) -> Option<&Arc<User>> {
        match self {
            LoadState::Loaded { user, .. } => Some(user),
            _ => None,
        }
    }
}

/// Loads user profiles and exposes the current [`LoadState`]
pub struct ProfileLoader {
    service: UserService,
    generation: AtomicU64,
    state: RwLock<LoadState>,
}

impl ProfileLoader {
    /// Create a loader over the given service
    pub fn new(service: UserService) -> Self {
        Self {
            service,
            generation: AtomicU64::new(0),
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LoadState {
        self.state.read().unwrap().clone()
    }

    /// Load the profile for an id
    ///
    /// Resets the shared state to `Loading`, fetches, and settles it on
    /// `Loaded` or `Errored` unless a newer load has been requested in the
    /// meantime. The outcome of this attempt is always returned to the
    /// caller, stale or not.
    pub async fn load(&self, user_id: u32) -> LoadState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply(generation, LoadState::Loading { user_id });

        let outcome = match self.service.fetch_user_profile(user_id).await {
            Ok(user) => LoadState::Loaded {
                user_id,
                user: Arc::new(user),
            },
            Err(error) => LoadState::Errored {
                user_id,
                error: Arc::new(error),
            },
        };

        if !self.apply(generation, outcome.clone()) {
            tracing::debug!(user_id, generation, "Discarding stale load result");
        }
        outcome
    }

    /// Write `next` into the shared state if `generation` is still current
    fn apply(&self, generation: u64, next: LoadState) -> bool {
        let mut state = self.state.write().unwrap();
        if self.generation.load(Ordering::SeqCst) == generation {
            *state = next;
            true
        } else {
            false
        }
    }
}
