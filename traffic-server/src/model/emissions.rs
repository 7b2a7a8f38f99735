//! CO2 emissions estimate for a trip.

/// kg of CO2 emitted per km by an average car.
pub const AVERAGE_EMISSION_PER_KM: f64 = 0.12;

/// Minutes of congestion that double a trip's emissions.
pub const CONGESTION_DOUBLING_MINS: f64 = 30.0;

/// Estimates trip emissions from distance and congestion.
///
/// Congestion inflates emissions linearly to account for idling and
/// stop-go driving: 30 minutes of congestion doubles the base figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionsEstimator {
    /// kg CO2 per km with no congestion
    pub emission_per_km: f64,
}

impl Default for EmissionsEstimator {
    fn default() -> Self {
        Self {
            emission_per_km: AVERAGE_EMISSION_PER_KM,
        }
    }
}

impl EmissionsEstimator {
    /// Estimated kg of CO2 for the trip.
    ///
    /// Returns 0.0 when the distance is unknown or not positive.
    pub fn estimate(&self, distance_km: Option<f64>, congestion_mins: f64) -> f64 {
        let Some(distance_km) = distance_km.filter(|d| *d > 0.0) else {
            return 0.0;
        };

        let congestion_factor = 1.0 + congestion_mins / CONGESTION_DOUBLING_MINS;
        distance_km * self.emission_per_km * congestion_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_congestion() {
        let estimator = EmissionsEstimator::default();
        assert_eq!(estimator.estimate(Some(10.0), 0.0), 1.2);
    }

    #[test]
    fn thirty_minutes_doubles() {
        let estimator = EmissionsEstimator::default();
        let base = estimator.estimate(Some(50.0), 0.0);
        let congested = estimator.estimate(Some(50.0), 30.0);
        assert!((congested - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn zero_or_unknown_distance() {
        let estimator = EmissionsEstimator::default();
        assert_eq!(estimator.estimate(Some(0.0), 10.0), 0.0);
        assert_eq!(estimator.estimate(Some(-5.0), 10.0), 0.0);
        assert_eq!(estimator.estimate(None, 10.0), 0.0);
    }

    #[test]
    fn custom_factor() {
        let estimator = EmissionsEstimator {
            emission_per_km: 0.2,
        };
        assert!((estimator.estimate(Some(10.0), 15.0) - 3.0).abs() < 1e-9);
    }
}
