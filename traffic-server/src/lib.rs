//! Traffic prediction server.
//!
//! Estimates current and future travel time and CO2 emissions for each
//! stored road between two places, and marks the best options.

pub mod config;
pub mod domain;
pub mod model;
pub mod table;
pub mod web;
