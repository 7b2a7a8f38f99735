//! Route table used by unit tests across the crate.

use crate::domain::{RouteRecord, Tolls};

use super::RouteTable;

/// Three routes between Mumbai and Pune, one Delhi to Agra, and one short
/// city hop.
pub const SAMPLE_CSV: &str = "\
start_point,destination,road_name,route_cls,distance_km,live_update_time_min,historical_avg_time_min,recent_congestion_min,complexity_score,no_of_tolls,cost_of_each_tolls,sum_of_cost_of_each_tolls,image_url,petrolpump,petrolpump_coordinates,hotels,hotel_coordinates
Mumbai,Pune,Mumbai-Pune Expressway,Expressway,94,80,90,20,0.35,2,120;200,320,https://example.com/expressway.jpg,HP Lonavala;Indian Oil Khopoli,\"18.7546,73.4062;18.7890,73.3420\",Fariyas Resort,\"18.7500,73.4000\"
Mumbai,Pune,Old Mumbai-Pune Highway,National Highway,97,95,100,35,0.6,1,60,60,,Bharat Petroleum Talegaon,\"18.7350,73.6750\",,
Mumbai,Pune,Tamhini Ghat Road,State Highway,130,150,140,10,0.8,0,,0,,,,Tamhini Retreat;Mulshi Lodge,\"18.4500,73.4300\"
Delhi,Agra,Yamuna Expressway,Expressway,233,200,210,15,0.3,3,100;150;165,415,,,,,
Koramangala,Indiranagar,Inner Ring Road,City Road,6,14,12,5,0.5,0,,0,,,,,
";

/// The sample table, parsed.
pub fn sample_table() -> RouteTable {
    RouteTable::from_reader(SAMPLE_CSV.as_bytes()).expect("sample table parses")
}

/// A minimal record with the given timings and no amenities.
pub fn record(
    road_name: &str,
    distance_km: f64,
    live_update_time_min: f64,
    historical_avg_time_min: f64,
    recent_congestion_min: f64,
) -> RouteRecord {
    RouteRecord {
        start_point: "Mumbai".into(),
        destination: "Pune".into(),
        road_name: road_name.into(),
        route_cls: "Highway".into(),
        distance_km: distance_km.into(),
        live_update_time_min: live_update_time_min.into(),
        historical_avg_time_min: historical_avg_time_min.into(),
        recent_congestion_min: recent_congestion_min.into(),
        complexity_score: 0.5.into(),
        tolls: Tolls::default(),
        petrol_pumps: None,
        petrol_pump_coordinates: None,
        hotels: None,
        hotel_coordinates: None,
        image_url: None,
    }
}
