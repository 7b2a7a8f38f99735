//! Plain-text rendering of route options.

use std::fmt;

use crate::model::{ScoredRoute, format_decimal, format_minutes};

const SEPARATOR_WIDTH: usize = 70;

/// A human-readable listing of scored routes.
pub struct RouteListing<'a>(pub &'a [ScoredRoute]);

impl fmt::Display for RouteListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No routes found for the given start point and destination.");
        }

        let separator = "-".repeat(SEPARATOR_WIDTH);
        writeln!(f, "Available Routes:")?;
        writeln!(f, "{separator}")?;
        for (i, route) in self.0.iter().enumerate() {
            writeln!(f, "Route {}: {}", i + 1, route.road_name)?;
            match route.distance_km {
                Some(d) => writeln!(f, "  Distance: {} km", format_decimal(d))?,
                None => writeln!(f, "  Distance: unknown")?,
            }
            writeln!(
                f,
                "  Predicted Travel Time (Now): {}",
                format_minutes(route.predicted_time_min)
            )?;
            writeln!(
                f,
                "  Complexity Score: {} (0-1)",
                format_decimal(route.complexity_score)
            )?;
            writeln!(f, "  Recommendation: {}", route.recommendation)?;
            writeln!(f, "  Future Prediction: {}", route.future_recommendation)?;
            writeln!(
                f,
                "  CO2 Emissions: {} kg ({})",
                format_decimal(route.co2_emissions_kg),
                route.environmental_impact
            )?;
            if !route.tolls.count.is_empty() {
                writeln!(
                    f,
                    "  Tolls: {} (total {})",
                    route.tolls.count, route.tolls.total
                )?;
            }
            writeln!(f, "  Image: {}", route.image_url)?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

/// Render scored routes as a human-readable listing.
pub fn render_routes(routes: &[ScoredRoute]) -> String {
    RouteListing(routes).to_string()
}
