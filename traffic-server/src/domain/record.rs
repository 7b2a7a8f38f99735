//! Route records as stored in the route table.

use std::str::FromStr;

use super::error::FieldError;

/// Image shown for routes that have no `image_url` of their own.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// A numeric cell from the route table.
///
/// Cells are not validated at load time: a malformed value only matters
/// once a query actually touches the record, at which point it fails the
/// whole query.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Value(f64),
    Missing,
    Malformed(String),
}

impl Numeric {
    /// Interpret a raw cell. Empty cells and `NaN` are missing.
    pub fn from_cell(cell: Option<&str>) -> Self {
        let Some(raw) = cell.map(str::trim).filter(|s| !s.is_empty()) else {
            return Numeric::Missing;
        };

        match f64::from_str(raw) {
            Ok(v) if v.is_nan() => Numeric::Missing,
            Ok(v) => Numeric::Value(v),
            Err(_) => Numeric::Malformed(raw.to_string()),
        }
    }

    /// The value of a cell that must be present.
    pub fn require(&self, field: &'static str) -> Result<f64, FieldError> {
        match self.optional(field)? {
            Some(v) => Ok(v),
            None => Err(FieldError::Missing { field }),
        }
    }

    /// The value of a cell that may be absent. Malformed cells are still
    /// an error.
    pub fn optional(&self, field: &'static str) -> Result<Option<f64>, FieldError> {
        match self {
            Numeric::Value(v) => Ok(Some(*v)),
            Numeric::Missing => Ok(None),
            Numeric::Malformed(value) => Err(FieldError::NotNumeric {
                field,
                value: value.clone(),
            }),
        }
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Value(v)
    }
}

/// Toll metadata, carried through as display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tolls {
    /// `no_of_tolls`
    pub count: String,

    /// `cost_of_each_tolls`
    pub costs: String,

    /// `sum_of_cost_of_each_tolls`
    pub total: String,
}

/// One stored road option between two named places.
///
/// Several records may share the same origin and destination when distinct
/// roads connect them.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    pub start_point: String,
    pub destination: String,
    pub road_name: String,
    pub route_cls: String,

    pub distance_km: Numeric,
    pub live_update_time_min: Numeric,
    pub historical_avg_time_min: Numeric,
    pub recent_congestion_min: Numeric,
    pub complexity_score: Numeric,

    pub tolls: Tolls,

    /// `;`-separated petrol pump names
    pub petrol_pumps: Option<String>,
    /// `;`-separated petrol pump coordinates, paired with `petrol_pumps`
    pub petrol_pump_coordinates: Option<String>,
    /// `;`-separated hotel names
    pub hotels: Option<String>,
    /// `;`-separated hotel coordinates, paired with `hotels`
    pub hotel_coordinates: Option<String>,

    pub image_url: Option<String>,
}

impl RouteRecord {
    /// The record's image, or the placeholder when it has none.
    pub fn image_url(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}
