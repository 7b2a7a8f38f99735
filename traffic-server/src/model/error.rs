//! Scoring error types.

use crate::domain::FieldError;

/// A route in the result set could not be scored.
///
/// One bad record fails the whole query; there are no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to compute {operation} for route {road_name:?}: {source}")]
pub struct ScoreError {
    /// What was being computed, e.g. "predicted time"
    pub operation: &'static str,

    /// Road whose record held the bad value
    pub road_name: String,

    #[source]
    pub source: FieldError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScoreError {
            operation: "predicted time",
            road_name: "NH48".into(),
            source: FieldError::Missing {
                field: "recent_congestion_min",
            },
        };
        assert_eq!(
            err.to_string(),
            "failed to compute predicted time for route \"NH48\": missing value for recent_congestion_min"
        );
    }
}
