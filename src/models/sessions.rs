//! Average session length model
//!
//! Average workout duration per weekday (1 = Monday .. 7 = Sunday),
//! feeding the dashboard's line chart.

use serde::Deserialize;

/// Raw payload from `/user/:id/average-sessions`
#[derive(Debug, Clone, Deserialize)]
pub struct AverageSessionsPayload {
    pub sessions: Vec<SessionLengthPayload>,
}

/// One raw weekday record inside [`AverageSessionsPayload`]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLengthPayload {
    pub day: u8,
    pub session_length: f64,
}

/// One normalized weekday session-length record
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLength {
    /// Weekday, 1..=7
    pub day: u8,
    pub duration_minutes: f64,
}

/// Average session lengths for one user, ordered by weekday as provided
#[derive(Debug, Clone, PartialEq)]
pub struct AverageSessions {
    sessions: Vec<SessionLength>,
}

/// Chart-ready session data point
///
/// Days 0 and 8 are synthetic padding points that only exist in the chart
/// shape; they are fabricated on every `chart_data()` call and must never
/// be persisted or fed back in as real data.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPoint {
    pub day: u8,
    pub duration_minutes: f64,
}

impl AverageSessions {
    /// Build the model from a raw payload
    pub fn from_payload(payload: AverageSessionsPayload) -> Self {
        let sessions = payload
            .sessions
            .into_iter()
            .map(|s| SessionLength {
                day: s.day,
                duration_minutes: s.session_length,
            })
            .collect();

        Self { sessions }
    }

    /// Normalized weekday records
    pub fn sessions(&self) -> &[SessionLength] {
        &self.sessions
    }

    /// Data shaped for the session-length line chart
    ///
    /// Pads the real sequence with one synthetic point on each side so the
    /// rendered line enters and leaves the frame smoothly: day 0 carries the
    /// first duration minus 5, day 8 the last duration plus 10. An empty
    /// input yields an empty chart.
    pub fn chart_data(&self) -> Vec<SessionPoint> {
        let (first, last) = match (self.sessions.first(), self.sessions.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Vec::new(),
        };

        let mut points = Vec::with_capacity(self.sessions.len() + 2);
        points.push(SessionPoint {
            day: 0,
            duration_minutes: first.duration_minutes - 5.0,
        });
        points.extend(self.sessions.iter().map(|s| SessionPoint {
            day: s.day,
            duration_minutes: s.duration_minutes,
        }));
        points.push(SessionPoint {
            day: 8,
            duration_minutes: last.duration_minutes + 10.0,
        });

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(durations: [f64; 7]) -> AverageSessions {
        AverageSessions::from_payload(AverageSessionsPayload {
            sessions: durations
                .iter()
                .enumerate()
                .map(|(i, d)| SessionLengthPayload {
                    day: i as u8 + 1,
                    session_length: *d,
                })
                .collect(),
        })
    }

    #[test]
    fn test_chart_data_pads_both_ends() {
        let sessions = week([30.0, 40.0, 45.0, 50.0, 35.0, 60.0, 55.0]);
        let chart = sessions.chart_data();

        assert_eq!(chart.len(), 9);
        assert_eq!(chart[0], SessionPoint { day: 0, duration_minutes: 25.0 });
        assert_eq!(chart[8], SessionPoint { day: 8, duration_minutes: 65.0 });
    }

    #[test]
    fn test_chart_data_keeps_real_points_unchanged() {
        let sessions = week([30.0, 40.0, 45.0, 50.0, 35.0, 60.0, 55.0]);
        let chart = sessions.chart_data();

        for (i, session) in sessions.sessions().iter().enumerate() {
            assert_eq!(chart[i + 1].day, session.day);
            assert_eq!(chart[i + 1].duration_minutes, session.duration_minutes);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_chart() {
        let sessions =
            AverageSessions::from_payload(AverageSessionsPayload { sessions: vec![] });
        assert!(sessions.chart_data().is_empty());
    }

    #[test]
    fn test_padding_is_not_persisted() {
        let sessions = week([30.0, 40.0, 45.0, 50.0, 35.0, 60.0, 55.0]);
        // The model itself keeps only the real 7 records no matter how many
        // times the chart shape is fabricated.
        let _ = sessions.chart_data();
        let _ = sessions.chart_data();
        assert_eq!(sessions.sessions().len(), 7);
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{"sessions": [{"day": 1, "sessionLength": 30}]}"#;
        let payload: AverageSessionsPayload = serde_json::from_str(json).unwrap();
        let sessions = AverageSessions::from_payload(payload);

        assert_eq!(
            sessions.sessions(),
            &[SessionLength { day: 1, duration_minutes: 30.0 }]
        );
    }
}
