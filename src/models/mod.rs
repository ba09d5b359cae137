//! Domain Models
//!
//! Typed models for the dashboard data, built from raw API payloads:
//! - [`User`]: aggregate of one user's profile and the four data slices
//! - [`Activity`]: daily weight and calories-burned records
//! - [`AverageSessions`]: average session length per weekday
//! - [`Performance`]: per-category performance values
//! - [`Score`]: today's goal-completion score
//!
//! All models are immutable value holders created fresh on every fetch.
//! Each exposes a `chart_data()` accessor returning a display-ready shape;
//! the chart shapes are fabricated on access and never fed back as input.

mod activity;
mod performance;
mod score;
mod sessions;
mod user;

pub use activity::{
    Activity, ActivityPayload, ActivityPoint, ActivitySession, ActivitySessionPayload,
};
pub use performance::{
    Performance, PerformanceEntry, PerformanceKind, PerformancePayload,
    PerformanceValuePayload,
};
pub use score::{Score, ScoreSlice, BACKGROUND_FILL, SCORE_FILL};
pub use sessions::{
    AverageSessions, AverageSessionsPayload, SessionLength, SessionLengthPayload,
    SessionPoint,
};
pub use user::{KeyData, User, UserInfosPayload, UserPayload};

use thiserror::Error;

/// Errors raised while constructing models from a payload
#[derive(Debug, Error)]
pub enum ModelError {
    /// Activity day label could not be parsed as an integer
    #[error("Invalid activity day label: {0:?}")]
    InvalidDay(String),

    /// Performance kind id is absent from both the payload map and the
    /// default category set
    #[error("Unknown performance kind id: {0}")]
    UnknownPerformanceKind(u8),
}
