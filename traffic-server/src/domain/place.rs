//! Place names and route queries.

use std::fmt;

/// Error returned when a place name is empty after normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("place name must not be empty")]
pub struct InvalidPlaceName;

/// A normalized place name, as stored in the `start_point` and
/// `destination` columns of the route table.
///
/// Normalization upper-cases the first character and lower-cases the rest,
/// so `"mUMBAI"` and `"mumbai"` both become `"Mumbai"`. Multi-word names
/// only get their first letter capitalized (`"new delhi"` becomes
/// `"New delhi"`), which is how the table is keyed.
///
/// # Examples
///
/// ```
/// use traffic_server::domain::PlaceName;
///
/// let pune = PlaceName::normalize("pUNE").unwrap();
/// assert_eq!(pune.as_str(), "Pune");
///
/// assert!(PlaceName::normalize("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceName(String);

impl PlaceName {
    /// Normalize raw user input into a place name.
    pub fn normalize(raw: &str) -> Result<Self, InvalidPlaceName> {
        let mut chars = raw.chars();
        let Some(first) = chars.next() else {
            return Err(InvalidPlaceName);
        };

        let mut name = String::with_capacity(raw.len());
        name.extend(first.to_uppercase());
        name.extend(chars.flat_map(char::to_lowercase));
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An (origin, destination) pair to look up in the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin: PlaceName,
    pub destination: PlaceName,
}

impl RouteQuery {
    /// Build a query from raw request strings, normalizing both names.
    pub fn parse(origin: &str, destination: &str) -> Result<Self, InvalidPlaceName> {
        Ok(Self {
            origin: PlaceName::normalize(origin)?,
            destination: PlaceName::normalize(destination)?,
        })
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
