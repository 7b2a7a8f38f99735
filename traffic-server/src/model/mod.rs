//! Route scoring.
//!
//! This module turns the route records matched for a query into scored
//! routes: a weighted estimate of the current travel time, a projection
//! after congestion has partly cleared, an emissions estimate, and the
//! cross-route marks for the best future option and the greenest route.
//!
//! Everything here is a pure function of the records passed in.

mod emissions;
mod error;
mod scorer;
mod travel_time;

pub use emissions::{AVERAGE_EMISSION_PER_KM, EmissionsEstimator};
pub use error::ScoreError;
pub use scorer::{BEST_FUTURE_SUFFIX, GOOD_NOW, GREENEST, NOT_IDEAL_NOW, RouteScorer, ScoredRoute};
pub use travel_time::{TravelSample, forecast_horizon, format_decimal, format_minutes, round_to};
