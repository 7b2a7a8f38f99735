//! Route lookup by origin and destination.

use std::sync::Arc;

use crate::domain::{PlaceName, RouteRecord};

use super::RouteTable;

/// Finds the routes stored for an (origin, destination) pair.
///
/// Holds a shared handle on the route table, so clones are cheap and every
/// request can read the table concurrently.
#[derive(Debug, Clone)]
pub struct RouteFilter {
    table: Arc<RouteTable>,
}

impl RouteFilter {
    /// Create a filter over the given table.
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    /// The table this filter reads from.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// All records whose stored origin and destination equal the given
    /// names exactly, in table order.
    ///
    /// Returns an empty list when nothing matches.
    pub fn find(&self, origin: &PlaceName, destination: &PlaceName) -> Vec<&RouteRecord> {
        self.table
            .records()
            .iter()
            .filter(|r| r.start_point == origin.as_str() && r.destination == destination.as_str())
            .collect()
    }
}
