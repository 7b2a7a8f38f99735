//! The static route table and lookups over it.
//!
//! The table is read from CSV once at startup. A missing required column is
//! a [`TableError`] raised at load time, never a per-query failure.

mod error;
mod filter;
#[cfg(test)]
pub(crate) mod fixtures;
mod route_table;

pub use error::TableError;
pub use filter::RouteFilter;
pub use route_table::{REQUIRED_COLUMNS, RouteTable};
