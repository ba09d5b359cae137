//! Daily activity model
//!
//! Weight and calories burned per day, feeding the dashboard's bar chart.

use serde::Deserialize;

use super::ModelError;

/// Raw payload from `/user/:id/activity`
///
/// The backend sends day labels as strings; they are parsed to integers
/// during model construction.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityPayload {
    pub sessions: Vec<ActivitySessionPayload>,
}

/// One raw daily record inside [`ActivityPayload`]
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySessionPayload {
    pub day: String,
    pub kilogram: f64,
    pub calories: f64,
}

/// One normalized daily activity record
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySession {
    pub day: u32,
    pub weight_kg: f64,
    pub calories_burned: f64,
}

/// Daily activity for one user, ordered as provided by the backend
///
/// Day values are assumed sortable ascending as delivered; gaps are not
/// validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    sessions: Vec<ActivitySession>,
}

/// Chart-ready activity data point
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPoint {
    /// Day number rendered as the x-axis label
    pub label: String,
    pub weight_kg: f64,
    pub calories_burned: f64,
}

impl Activity {
    /// Build the model from a raw payload, parsing string day labels
    pub fn from_payload(payload: ActivityPayload) -> Result<Self, ModelError> {
        let sessions = payload
            .sessions
            .into_iter()
            .map(|s| {
                let day = s
                    .day
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ModelError::InvalidDay(s.day.clone()))?;
                Ok(ActivitySession {
                    day,
                    weight_kg: s.kilogram,
                    calories_burned: s.calories,
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(Self { sessions })
    }

    /// Normalized daily records
    pub fn sessions(&self) -> &[ActivitySession] {
        &self.sessions
    }

    /// Data shaped for the daily activity bar chart
    pub fn chart_data(&self) -> Vec<ActivityPoint> {
        self.sessions
            .iter()
            .map(|s| ActivityPoint {
                label: s.day.to_string(),
                weight_kg: s.weight_kg,
                calories_burned: s.calories_burned,
            })
            .collect()
    }
}
