//! Application state for the web layer.

use std::sync::Arc;

use crate::model::RouteScorer;
use crate::table::{RouteFilter, RouteTable};

/// Shared application state.
///
/// The route table is read-only for the life of the process, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Lookup over the route table
    pub routes: RouteFilter,

    /// Route scoring
    pub scorer: Arc<RouteScorer>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(table: RouteTable, scorer: RouteScorer) -> Self {
        Self {
            routes: RouteFilter::new(Arc::new(table)),
            scorer: Arc::new(scorer),
        }
    }
}
