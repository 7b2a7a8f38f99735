//! Data transfer objects for web requests and responses.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::domain::Amenity;
use crate::model::{ScoredRoute, format_minutes};

/// Request to predict routes between two places.
#[derive(Debug, Deserialize)]
pub struct PredictRoutesRequest {
    /// Origin place name (any capitalization)
    pub start_point: String,

    /// Destination place name (any capitalization)
    pub destination: String,
}

/// A scored route option.
#[derive(Debug, Serialize)]
pub struct RouteOption {
    pub road_name: String,

    /// Road class (e.g. "Expressway")
    pub route_cls: String,

    /// Route length, when known
    pub distance_km: Option<f64>,

    /// Current travel time estimate in minutes
    pub predicted_time_min: f64,

    /// Current travel time estimate for display
    pub predicted_time: String,

    /// Travel time estimate after two hours, in minutes
    pub future_time_min: f64,

    /// Future travel time estimate for display
    pub future_time: String,

    /// Route difficulty, 0 to 1
    pub complexity_score: f64,

    pub recommendation: String,
    pub future_recommendation: String,

    /// Estimated emissions in kg CO2
    pub co2_emissions_kg: f64,
    pub environmental_impact: String,

    /// Emissions above the greenest option, in kg CO2
    pub extra_co2_kg: f64,

    pub no_of_tolls: String,
    pub cost_of_each_tolls: String,
    pub sum_of_cost_of_each_tolls: String,

    /// Petrol pump name → coordinates
    pub petrol_pumps: AmenityMap,

    /// Hotel name → coordinates
    pub hotels: AmenityMap,

    pub image_url: String,
}

/// Amenities serialized as a JSON object keyed by name, in route order.
#[derive(Debug, Clone, Default)]
pub struct AmenityMap(pub Vec<Amenity>);

impl Serialize for AmenityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (&a.name, &a.coordinates)))
    }
}

/// Greeting returned from the root endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}

// Conversion implementations

impl RouteOption {
    /// Create from a scored route.
    pub fn from_scored(route: &ScoredRoute) -> Self {
        Self {
            road_name: route.road_name.clone(),
            route_cls: route.route_cls.clone(),
            distance_km: route.distance_km,
            predicted_time_min: route.predicted_time_min,
            predicted_time: format_minutes(route.predicted_time_min),
            future_time_min: route.future_time_min,
            future_time: format_minutes(route.future_time_min),
            complexity_score: route.complexity_score,
            recommendation: route.recommendation.clone(),
            future_recommendation: route.future_recommendation.clone(),
            co2_emissions_kg: route.co2_emissions_kg,
            environmental_impact: route.environmental_impact.clone(),
            extra_co2_kg: route.extra_co2_kg,
            no_of_tolls: route.tolls.count.clone(),
            cost_of_each_tolls: route.tolls.costs.clone(),
            sum_of_cost_of_each_tolls: route.tolls.total.clone(),
            petrol_pumps: AmenityMap(route.petrol_pumps.clone()),
            hotels: AmenityMap(route.hotels.clone()),
            image_url: route.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteScorer;
    use crate::table::fixtures::sample_table;

    fn expressway() -> RouteOption {
        let table = sample_table();
        let record = &table.records()[0];
        let routes = RouteScorer::default().score(&[record]).unwrap().unwrap();
        RouteOption::from_scored(&routes[0])
    }

    #[test]
    fn display_times() {
        let option = expressway();
        assert_eq!(option.predicted_time_min, 71.0);
        assert_eq!(option.predicted_time, "1.2 hrs");
        assert_eq!(option.future_time, "1.2 hrs");
    }

    #[test]
    fn fields_serialize_in_order() {
        let json = serde_json::to_string(&expressway()).unwrap();

        let position = |key: &str| json.find(&format!("\"{key}\":")).unwrap();
        assert!(position("road_name") < position("distance_km"));
        assert!(position("predicted_time_min") < position("future_time_min"));
        assert!(position("recommendation") < position("co2_emissions_kg"));
        assert!(position("sum_of_cost_of_each_tolls") < position("petrol_pumps"));
        assert!(position("hotels") < position("image_url"));
    }

    #[test]
    fn amenities_serialize_as_object() {
        let json = serde_json::to_value(expressway()).unwrap();

        assert_eq!(
            json["petrol_pumps"],
            serde_json::json!({
                "HP Lonavala": "18.7546,73.4062",
                "Indian Oil Khopoli": "18.7890,73.3420",
            })
        );
        assert_eq!(
            json["hotels"],
            serde_json::json!({ "Fariyas Resort": "18.7500,73.4000" })
        );
    }

    #[test]
    fn missing_distance_is_null() {
        let mut route = RouteScorer::default()
            .score(&[&sample_table().records()[0]])
            .unwrap()
            .unwrap()
            .remove(0);
        route.distance_km = None;

        let json = serde_json::to_value(RouteOption::from_scored(&route)).unwrap();
        assert!(json["distance_km"].is_null());
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse {
            detail: "nope".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "detail": "nope" }));
    }
}
