//! Loading the route table from CSV.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{Numeric, RouteRecord, Tolls};

use super::error::TableError;

/// Columns every route table must have.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "start_point",
    "destination",
    "road_name",
    "route_cls",
    "distance_km",
    "live_update_time_min",
    "historical_avg_time_min",
    "recent_congestion_min",
    "complexity_score",
    "no_of_tolls",
    "cost_of_each_tolls",
    "sum_of_cost_of_each_tolls",
];

/// One CSV row before its numeric cells are interpreted.
#[derive(Debug, Deserialize)]
struct RawRoute {
    start_point: String,
    destination: String,
    road_name: String,
    route_cls: String,
    distance_km: Option<String>,
    live_update_time_min: Option<String>,
    historical_avg_time_min: Option<String>,
    recent_congestion_min: Option<String>,
    complexity_score: Option<String>,
    no_of_tolls: String,
    cost_of_each_tolls: String,
    sum_of_cost_of_each_tolls: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    petrolpump: Option<String>,
    #[serde(default)]
    petrolpump_coordinates: Option<String>,
    #[serde(default)]
    hotels: Option<String>,
    #[serde(default)]
    hotel_coordinates: Option<String>,
}

impl From<RawRoute> for RouteRecord {
    fn from(raw: RawRoute) -> Self {
        RouteRecord {
            start_point: raw.start_point,
            destination: raw.destination,
            road_name: raw.road_name,
            route_cls: raw.route_cls,
            distance_km: Numeric::from_cell(raw.distance_km.as_deref()),
            live_update_time_min: Numeric::from_cell(raw.live_update_time_min.as_deref()),
            historical_avg_time_min: Numeric::from_cell(raw.historical_avg_time_min.as_deref()),
            recent_congestion_min: Numeric::from_cell(raw.recent_congestion_min.as_deref()),
            complexity_score: Numeric::from_cell(raw.complexity_score.as_deref()),
            tolls: Tolls {
                count: raw.no_of_tolls,
                costs: raw.cost_of_each_tolls,
                total: raw.sum_of_cost_of_each_tolls,
            },
            petrol_pumps: raw.petrolpump,
            petrol_pump_coordinates: raw.petrolpump_coordinates,
            hotels: raw.hotels,
            hotel_coordinates: raw.hotel_coordinates,
            image_url: raw.image_url,
        }
    }
}

/// The read-only table of route records.
///
/// Loaded once at startup and shared by every request. Records keep the
/// order they had in the file.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    /// Build a table from records already in memory.
    pub fn from_records(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    /// Load the table from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            routes = table.len(),
            "route table loaded"
        );
        Ok(table)
    }

    /// Read the table from any CSV source.
    ///
    /// Fails with [`TableError::MissingColumns`] before reading any row if
    /// the header lacks a required column.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingColumns {
                missing,
                available: headers.iter().map(str::to_string).collect(),
            });
        }
        info!(columns = ?headers.iter().collect::<Vec<_>>(), "route table header");

        let records = rdr
            .deserialize::<RawRoute>()
            .map(|row| row.map(RouteRecord::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// All records, in file order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
