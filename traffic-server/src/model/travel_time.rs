//! Travel time estimates.
//!
//! The current estimate is a fixed blend of three signals a route record
//! already carries: the live update time, the historical average and the
//! recent congestion delay. The future estimate assumes congestion halves
//! over the forecast horizon.

use chrono::Duration;

/// Weight of the live update time.
pub const LIVE_WEIGHT: f64 = 0.5;
/// Weight of the historical average time.
pub const HISTORICAL_WEIGHT: f64 = 0.3;
/// Weight of the recent congestion delay.
pub const CONGESTION_WEIGHT: f64 = 0.2;

/// Fraction of congestion left after the forecast horizon.
pub const CONGESTION_DECAY: f64 = 0.5;
/// Live time never drops below this fraction of the historical average.
pub const BASELINE_FLOOR: f64 = 0.9;

/// Routes predicted at or under this many minutes are recommended now.
pub const GOOD_NOW_THRESHOLD_MINS: f64 = 15.0;

/// How far ahead the future estimate looks.
pub fn forecast_horizon() -> Duration {
    Duration::hours(2)
}

/// The three timing signals of a route, in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelSample {
    pub live_update_time: f64,
    pub historical_avg_time: f64,
    pub recent_congestion: f64,
}

impl TravelSample {
    /// Weighted estimate of the current travel time, rounded to 2 decimals.
    pub fn predicted_time(&self) -> f64 {
        round_to(
            blend(
                self.live_update_time,
                self.historical_avg_time,
                self.recent_congestion,
            ),
            2,
        )
    }

    /// Estimated travel time once the forecast horizon has passed, rounded
    /// to 2 decimals.
    ///
    /// The congestion contribution decays, and the live time improves by
    /// the congestion that cleared, but never below [`BASELINE_FLOOR`] of
    /// the historical average.
    pub fn future_time(&self) -> f64 {
        let future_congestion = (self.recent_congestion * CONGESTION_DECAY).max(0.0);
        let future_live_time = (self.historical_avg_time * BASELINE_FLOOR)
            .max(self.live_update_time - future_congestion);

        round_to(
            blend(
                future_live_time,
                self.historical_avg_time,
                future_congestion,
            ),
            2,
        )
    }
}

fn blend(live: f64, historical: f64, congestion: f64) -> f64 {
    LIVE_WEIGHT * live + HISTORICAL_WEIGHT * historical + CONGESTION_WEIGHT * congestion
}

/// Round to `places` decimal places.
///
/// Rounds the exact binary value, so `0.235` (stored just below the
/// half-cent) becomes `0.23`. Exact ties go to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Render a decimal with at least one fractional digit (`31.0`, `28.35`).
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Render a duration in minutes for display.
///
/// Under an hour this is `"<minutes> min"`. From an hour up it is
/// `"<hours> hrs"` where the fraction is the leftover minutes as a share of
/// an hour, to one decimal: 75 minutes is `"1.2 hrs"`.
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 60.0 {
        return format!("{} min", format_decimal(minutes));
    }

    let hours = (minutes / 60.0).floor();
    let remainder = minutes - hours * 60.0;
    format!("{:.1} hrs", hours + round_to(remainder / 60.0, 1))
}
