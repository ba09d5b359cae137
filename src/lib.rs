//! # Pulseboard
//!
//! Fitness dashboard data layer: fetches a user's profile, daily activity,
//! session-length, and performance data from a backend API (or the bundled
//! fixture dataset), normalizes it into typed models, and exposes
//! chart-ready shapes for display.
//!
//! ## Modules
//!
//! - [`service`]: backend abstraction (HTTP or fixtures) and the user data
//!   service that assembles complete profiles
//! - [`models`]: the `User` aggregate and its four data slices, each with a
//!   `chart_data()` accessor
//! - [`loader`]: loading/loaded/errored lifecycle with stale-response
//!   protection
//! - [`charts`]: presentational text rendering of the chart shapes
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulseboard::service::{FixtureBackend, UserService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(FixtureBackend::bundled()?);
//!     let service = UserService::new(backend);
//!
//!     let user = service.fetch_user_profile(12).await?;
//!     println!("{}: {}%", user.full_name(), user.score().percent());
//!
//!     for point in user.activity_chart_data() {
//!         println!("day {}: {} kcal", point.label, point.calories_burned);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod config;
pub mod loader;
pub mod models;
pub mod service;

// Re-export top-level types for convenience
pub use config::{ApiConfig, Config, ConfigError, EndpointTemplates, LoggingConfig};

pub use models::{
    Activity, ActivityPoint, AverageSessions, KeyData, ModelError, Performance,
    PerformanceEntry, PerformanceKind, Score, ScoreSlice, SessionPoint, User,
};

pub use loader::{LoadState, ProfileLoader};

pub use service::{Backend, Endpoint, FixtureBackend, HttpBackend, ServiceError, UserService};
