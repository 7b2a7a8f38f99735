//! Web layer for the traffic prediction server.
//!
//! Provides the HTTP endpoint for route predictions.

mod dto;
mod routes;
mod state;
mod text;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use text::{RouteListing, render_routes};
