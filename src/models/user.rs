//! User aggregate
//!
//! Identity, nutritional key data, and the four data slices the dashboard
//! renders. Constructed only from a fully populated set of payloads: if any
//! sub-model fails to build, the whole aggregate fails and nothing partial
//! is handed out.

use serde::Deserialize;

use super::activity::{Activity, ActivityPayload, ActivityPoint};
use super::performance::{Performance, PerformanceEntry, PerformancePayload};
use super::score::{Score, ScoreSlice};
use super::sessions::{AverageSessions, AverageSessionsPayload, SessionPoint};
use super::ModelError;

/// Raw payload from `/user/:id`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: u32,
    pub user_infos: UserInfosPayload,
    /// Goal-completion score; the backend uses either this field or
    /// `todayScore`
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub today_score: Option<f64>,
    pub key_data: KeyData,
}

/// Identity block inside [`UserPayload`]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfosPayload {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

/// Daily nutritional counts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    pub calorie_count: f64,
    pub protein_count: f64,
    pub carbohydrate_count: f64,
    pub lipid_count: f64,
}

/// A user with all associated fitness and nutritional data
///
/// Immutable once built; a fresh instance is assembled on every fetch and
/// discarded when the profile view goes away. There is no caching layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: u32,
    first_name: String,
    last_name: String,
    age: u32,
    key_data: KeyData,
    activity: Activity,
    average_sessions: AverageSessions,
    performance: Performance,
    score: Score,
}

impl User {
    /// Assemble the aggregate from the four endpoint payloads
    pub fn assemble(
        user: UserPayload,
        activity: ActivityPayload,
        average_sessions: AverageSessionsPayload,
        performance: PerformancePayload,
    ) -> Result<Self, ModelError> {
        let score = Score::from_payload(user.score, user.today_score);
        let activity = Activity::from_payload(activity)?;
        let average_sessions = AverageSessions::from_payload(average_sessions);
        let performance = Performance::from_payload(performance)?;

        Ok(Self {
            id: user.id,
            first_name: user.user_infos.first_name,
            last_name: user.user_infos.last_name,
            age: user.user_infos.age,
            key_data: user.key_data,
            activity,
            average_sessions,
            performance,
            score,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// First and last name concatenated
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Daily nutritional counts
    pub fn key_data(&self) -> &KeyData {
        &self.key_data
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn average_sessions(&self) -> &AverageSessions {
        &self.average_sessions
    }

    pub fn performance(&self) -> &Performance {
        &self.performance
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Data shaped for the daily activity bar chart
    pub fn activity_chart_data(&self) -> Vec<ActivityPoint> {
        self.activity.chart_data()
    }

    /// Data shaped for the session-length line chart
    pub fn average_sessions_chart_data(&self) -> Vec<SessionPoint> {
        self.average_sessions.chart_data()
    }

    /// Data shaped for the performance radar chart
    pub fn performance_chart_data(&self) -> &[PerformanceEntry] {
        self.performance.chart_data()
    }

    /// Data shaped for the radial score chart
    pub fn score_chart_data(&self) -> [ScoreSlice; 2] {
        self.score.chart_data()
    }
}
