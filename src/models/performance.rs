//! Performance model
//!
//! Per-category performance values, feeding the dashboard's radar chart.
//! Category ids are resolved to labels through the per-payload `kind` map
//! when it names the id, otherwise through the fixed category set.

use serde::Deserialize;
use std::collections::HashMap;

use super::ModelError;

/// Raw payload from `/user/:id/performance`
#[derive(Debug, Clone, Deserialize)]
pub struct PerformancePayload {
    /// Per-payload mapping of category ids to labels; may be absent
    #[serde(default)]
    pub kind: HashMap<u8, String>,
    pub data: Vec<PerformanceValuePayload>,
}

/// One raw measurement inside [`PerformancePayload`]
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceValuePayload {
    pub value: f64,
    pub kind: u8,
}

/// The fixed performance category set
///
/// Total mapping: every category has a defined label. Ids outside this set
/// that the payload map does not name are a declared error, never a silent
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceKind {
    Cardio,
    Energy,
    Endurance,
    Strength,
    Speed,
    Intensity,
}

impl PerformanceKind {
    /// Resolve a numeric category id
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Cardio),
            2 => Some(Self::Energy),
            3 => Some(Self::Endurance),
            4 => Some(Self::Strength),
            5 => Some(Self::Speed),
            6 => Some(Self::Intensity),
            _ => None,
        }
    }

    /// Display label for this category
    pub fn label(self) -> &'static str {
        match self {
            Self::Cardio => "Cardio",
            Self::Energy => "Energy",
            Self::Endurance => "Endurance",
            Self::Strength => "Strength",
            Self::Speed => "Speed",
            Self::Intensity => "Intensity",
        }
    }
}

/// One labeled performance value
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceEntry {
    pub label: String,
    pub value: f64,
}

/// Performance values for one user, in payload order
#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    entries: Vec<PerformanceEntry>,
}

impl Performance {
    /// Build the model from a raw payload, resolving category labels
    ///
    /// Label precedence is per id: the payload `kind` map wins when it names
    /// the id; ids it does not name fall back to [`PerformanceKind`]; an id
    /// in neither is [`ModelError::UnknownPerformanceKind`].
    pub fn from_payload(payload: PerformancePayload) -> Result<Self, ModelError> {
        let entries = payload
            .data
            .into_iter()
            .map(|item| {
                let label = match payload.kind.get(&item.kind) {
                    Some(label) => label.clone(),
                    None => PerformanceKind::from_id(item.kind)
                        .ok_or(ModelError::UnknownPerformanceKind(item.kind))?
                        .label()
                        .to_string(),
                };
                Ok(PerformanceEntry {
                    label,
                    value: item.value,
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(Self { entries })
    }

    /// Data shaped for the performance radar chart
    pub fn chart_data(&self) -> &[PerformanceEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(kind: u8, value: f64) -> PerformanceValuePayload {
        PerformanceValuePayload { value, kind }
    }

    #[test]
    fn test_payload_map_wins() {
        let payload = PerformancePayload {
            kind: HashMap::from([(1, "cardio".to_string())]),
            data: vec![value(1, 80.0)],
        };

        let performance = Performance::from_payload(payload).unwrap();
        assert_eq!(performance.chart_data()[0].label, "cardio");
    }

    #[test]
    fn test_missing_map_entry_falls_back_to_default_labels() {
        // Payload map exists but only names id 1; id 4 resolves through the
        // fixed category set.
        let payload = PerformancePayload {
            kind: HashMap::from([(1, "cardio".to_string())]),
            data: vec![value(1, 80.0), value(4, 50.0)],
        };

        let performance = Performance::from_payload(payload).unwrap();
        assert_eq!(performance.chart_data()[1].label, "Strength");
    }

    #[test]
    fn test_absent_map_uses_all_default_labels() {
        let payload = PerformancePayload {
            kind: HashMap::new(),
            data: (1..=6).map(|id| value(id, id as f64 * 10.0)).collect(),
        };

        let performance = Performance::from_payload(payload).unwrap();
        let labels: Vec<&str> = performance
            .chart_data()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["Cardio", "Energy", "Endurance", "Strength", "Speed", "Intensity"]
        );
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let payload = PerformancePayload {
            kind: HashMap::new(),
            data: vec![value(9, 10.0)],
        };

        let err = Performance::from_payload(payload).unwrap_err();
        assert!(matches!(err, ModelError::UnknownPerformanceKind(9)));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "kind": {"1": "cardio", "2": "energy"},
            "data": [{"value": 120, "kind": 1}, {"value": 90, "kind": 2}]
        }"#;
        let payload: PerformancePayload = serde_json::from_str(json).unwrap();
        let performance = Performance::from_payload(payload).unwrap();

        assert_eq!(performance.chart_data().len(), 2);
        assert_eq!(performance.chart_data()[0].value, 120.0);
    }

    #[test]
    fn test_kind_map_absent_on_wire() {
        let json = r#"{"data": [{"value": 120, "kind": 1}]}"#;
        let payload: PerformancePayload = serde_json::from_str(json).unwrap();
        let performance = Performance::from_payload(payload).unwrap();

        assert_eq!(performance.chart_data()[0].label, "Cardio");
    }
}
