//! Score model
//!
//! Today's goal-completion score, feeding the dashboard's radial chart.

/// Fill color for the full-scale background slice
pub const BACKGROUND_FILL: &str = "#f0f0f0";

/// Fill color for the actual score slice
pub const SCORE_FILL: &str = "#FF0000";

/// One slice of the radial score chart
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSlice {
    /// Percentage value, 0..=100
    pub value: f64,
    /// Display color, hex format
    pub fill: &'static str,
}

/// Goal-completion score for one user, as a percentage
///
/// The backend names the source field either `score` or `todayScore`; a
/// present `score` wins (including an explicit 0), then `todayScore`, then 0.
/// Source values are fractions of 1 and are scaled to 0..=100 here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    percent: f64,
}

impl Score {
    /// Build the score from the two candidate payload fields
    pub fn from_payload(score: Option<f64>, today_score: Option<f64>) -> Self {
        let fraction = score.or(today_score).unwrap_or(0.0);
        Self {
            percent: fraction * 100.0,
        }
    }

    /// The score as a percentage
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Data shaped for the radial score chart
    ///
    /// Always two slices: the fixed full-scale background first, then the
    /// actual score, each carrying its display color.
    pub fn chart_data(&self) -> [ScoreSlice; 2] {
        [
            ScoreSlice {
                value: 100.0,
                fill: BACKGROUND_FILL,
            },
            ScoreSlice {
                value: self.percent,
                fill: SCORE_FILL,
            },
        ]
    }
}
