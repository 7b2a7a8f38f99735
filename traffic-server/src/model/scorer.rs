//! Scoring a set of candidate routes.
//!
//! Every route gets a current and future travel time, an emissions
//! estimate, and text recommendations. The set as a whole then marks the
//! route that is best after the forecast horizon and the one that emits the
//! least CO2.

use tracing::debug;

use crate::domain::{Amenity, FieldError, RouteRecord, Tolls, pair_amenities};

use super::emissions::EmissionsEstimator;
use super::error::ScoreError;
use super::travel_time::{
    GOOD_NOW_THRESHOLD_MINS, TravelSample, forecast_horizon, format_decimal, round_to,
};

/// Recommendation for routes predicted under the threshold.
pub const GOOD_NOW: &str = "Good within 15 min";
/// Recommendation for all other routes.
pub const NOT_IDEAL_NOW: &str = "Not ideal now";
/// Appended to the future recommendation of the best route after the horizon.
pub const BEST_FUTURE_SUFFIX: &str = " (Best option after 2 hours)";
/// Environmental impact of the route with the least CO2.
pub const GREENEST: &str = "Most environmentally friendly route";

/// A route record with its estimates and annotations.
///
/// Built fresh for every query and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRoute {
    pub road_name: String,
    pub route_cls: String,
    pub distance_km: Option<f64>,
    pub complexity_score: f64,

    /// Current travel time estimate (minutes)
    pub predicted_time_min: f64,
    /// Travel time estimate after the forecast horizon (minutes)
    pub future_time_min: f64,
    pub recommendation: String,
    pub future_recommendation: String,
    /// True for the route with the lowest future time
    pub is_best_future: bool,

    /// Estimated emissions (kg CO2, 2 decimals)
    pub co2_emissions_kg: f64,
    /// Emissions above the greenest route in the set (kg CO2, 2 decimals)
    pub extra_co2_kg: f64,
    pub environmental_impact: String,
    /// True for the route with the lowest emissions
    pub is_greenest: bool,

    pub tolls: Tolls,
    pub petrol_pumps: Vec<Amenity>,
    pub hotels: Vec<Amenity>,
    pub image_url: String,
}

/// Turns matched route records into scored, annotated routes.
#[derive(Debug, Clone, Default)]
pub struct RouteScorer {
    emissions: EmissionsEstimator,
}

impl RouteScorer {
    /// Create a scorer with the given emissions estimator.
    pub fn new(emissions: EmissionsEstimator) -> Self {
        Self { emissions }
    }

    /// Score every record and annotate the set.
    ///
    /// Returns `Ok(None)` for an empty input. Output order follows input
    /// order. When several routes tie for the lowest future time or the
    /// lowest emissions, the first of them gets the mark.
    pub fn score(&self, records: &[&RouteRecord]) -> Result<Option<Vec<ScoredRoute>>, ScoreError> {
        if records.is_empty() {
            return Ok(None);
        }

        let mut routes = records
            .iter()
            .map(|record| self.score_one(record))
            .collect::<Result<Vec<_>, _>>()?;

        mark_best_future(&mut routes);
        mark_greenest(&mut routes);

        Ok(Some(routes))
    }

    fn score_one(&self, record: &RouteRecord) -> Result<ScoredRoute, ScoreError> {
        let fail = |operation: &'static str| {
            move |source: FieldError| ScoreError {
                operation,
                road_name: record.road_name.clone(),
                source,
            }
        };

        let sample = TravelSample {
            live_update_time: record
                .live_update_time_min
                .require("live_update_time_min")
                .map_err(fail("predicted time"))?,
            historical_avg_time: record
                .historical_avg_time_min
                .require("historical_avg_time_min")
                .map_err(fail("predicted time"))?,
            recent_congestion: record
                .recent_congestion_min
                .require("recent_congestion_min")
                .map_err(fail("predicted time"))?,
        };
        let distance_km = record
            .distance_km
            .optional("distance_km")
            .map_err(fail("emissions"))?;
        let complexity_score = record
            .complexity_score
            .require("complexity_score")
            .map_err(fail("complexity score"))?;

        let predicted_time_min = sample.predicted_time();
        let future_time_min = sample.future_time();
        let co2_emissions_kg = round_to(
            self.emissions
                .estimate(distance_km, sample.recent_congestion),
            2,
        );

        let recommendation = if predicted_time_min <= GOOD_NOW_THRESHOLD_MINS {
            GOOD_NOW
        } else {
            NOT_IDEAL_NOW
        };
        let future_recommendation = format!(
            "After {} hours: {} min",
            forecast_horizon().num_hours(),
            format_decimal(future_time_min)
        );

        debug!(
            road = %record.road_name,
            predicted_time_min,
            future_time_min,
            co2_emissions_kg,
            "scored route"
        );

        Ok(ScoredRoute {
            road_name: record.road_name.clone(),
            route_cls: record.route_cls.clone(),
            distance_km,
            complexity_score,
            predicted_time_min,
            future_time_min,
            recommendation: recommendation.to_string(),
            future_recommendation,
            is_best_future: false,
            co2_emissions_kg,
            extra_co2_kg: 0.0,
            environmental_impact: GREENEST.to_string(),
            is_greenest: false,
            tolls: record.tolls.clone(),
            petrol_pumps: pair_amenities(
                record.petrol_pumps.as_deref(),
                record.petrol_pump_coordinates.as_deref(),
            ),
            hotels: pair_amenities(record.hotels.as_deref(), record.hotel_coordinates.as_deref()),
            image_url: record.image_url().to_string(),
        })
    }
}

/// Index of the first route with the smallest key.
fn first_min_by(routes: &[ScoredRoute], key: impl Fn(&ScoredRoute) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, route) in routes.iter().enumerate() {
        let value = key(route);
        if best.is_none_or(|(_, min)| value < min) {
            best = Some((idx, value));
        }
    }
    best.map(|(idx, _)| idx)
}

fn mark_best_future(routes: &mut [ScoredRoute]) {
    if let Some(idx) = first_min_by(routes, |r| r.future_time_min) {
        let best = &mut routes[idx];
        best.is_best_future = true;
        best.future_recommendation.push_str(BEST_FUTURE_SUFFIX);
    }
}

fn mark_greenest(routes: &mut [ScoredRoute]) {
    let Some(idx) = first_min_by(routes, |r| r.co2_emissions_kg) else {
        return;
    };
    let min_co2 = routes[idx].co2_emissions_kg;

    for (i, route) in routes.iter_mut().enumerate() {
        if i == idx {
            route.is_greenest = true;
            route.extra_co2_kg = 0.0;
            route.environmental_impact = GREENEST.to_string();
        } else {
            route.extra_co2_kg = round_to(route.co2_emissions_kg - min_co2, 2);
            route.environmental_impact = format!(
                "{} kg more CO2 than the most environmentally friendly route",
                format_decimal(route.extra_co2_kg)
            );
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::table::fixtures::record;
    use proptest::prelude::*;

    fn timings() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (1.0f64..300.0, 1.0f64..300.0, 1.0f64..300.0, 0.0f64..90.0)
    }

    proptest! {
        /// Exactly one route is greenest, and every other route reports its
        /// excess over it
        #[test]
        fn greenest_and_deltas(routes in prop::collection::vec(timings(), 2..8)) {
            let records: Vec<RouteRecord> = routes
                .iter()
                .enumerate()
                .map(|(i, (d, l, h, c))| record(&format!("Road {i}"), *d, *l, *h, *c))
                .collect();
            let refs: Vec<&RouteRecord> = records.iter().collect();
            let scored = RouteScorer::default().score(&refs).unwrap().unwrap();

            let greenest: Vec<_> = scored.iter().filter(|r| r.is_greenest).collect();
            prop_assert_eq!(greenest.len(), 1);
            let min_co2 = greenest[0].co2_emissions_kg;

            for route in &scored {
                prop_assert!(route.co2_emissions_kg >= min_co2);
                if !route.is_greenest {
                    prop_assert_eq!(
                        route.extra_co2_kg,
                        round_to(route.co2_emissions_kg - min_co2, 2)
                    );
                }
            }
        }

        /// Exactly one route is best after the horizon, and nothing beats it
        #[test]
        fn single_best_future(routes in prop::collection::vec(timings(), 2..8)) {
            let records: Vec<RouteRecord> = routes
                .iter()
                .enumerate()
                .map(|(i, (d, l, h, c))| record(&format!("Road {i}"), *d, *l, *h, *c))
                .collect();
            let refs: Vec<&RouteRecord> = records.iter().collect();
            let scored = RouteScorer::default().score(&refs).unwrap().unwrap();

            let best: Vec<_> = scored.iter().filter(|r| r.is_best_future).collect();
            prop_assert_eq!(best.len(), 1);
            for route in &scored {
                prop_assert!(route.future_time_min >= best[0].future_time_min);
            }
        }
    }
}
