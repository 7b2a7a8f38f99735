//! Domain types for the traffic prediction server.
//!
//! Route records hold raw table cells; scoring code reads them through
//! [`Numeric`] so that a malformed value surfaces as a [`FieldError`] for
//! the query that touched it.

mod amenity;
mod error;
mod place;
mod record;

pub use amenity::{Amenity, LIST_SEPARATOR, pair_amenities};
pub use error::FieldError;
pub use place::{InvalidPlaceName, PlaceName, RouteQuery};
pub use record::{Numeric, PLACEHOLDER_IMAGE_URL, RouteRecord, Tolls};
