//! Amenities along a route.
//!
//! The route table stores amenity names and their coordinates as two
//! separate `;`-separated lists. They are paired up by position.

/// Separator between entries in the amenity name and coordinate lists.
pub const LIST_SEPARATOR: char = ';';

/// A named amenity (petrol pump, hotel) and its coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    pub name: String,
    pub coordinates: String,
}

/// Pair a name list with a coordinate list.
///
/// Entries are trimmed and paired positionally. When the lists differ in
/// length the extra entries of the longer one are dropped. A name that
/// appears twice keeps its first position and takes the later coordinates.
/// A missing list on either side yields no amenities.
pub fn pair_amenities(names: Option<&str>, coordinates: Option<&str>) -> Vec<Amenity> {
    let (Some(names), Some(coordinates)) = (names, coordinates) else {
        return Vec::new();
    };

    let mut amenities: Vec<Amenity> = Vec::new();
    for (name, coords) in split_list(names).into_iter().zip(split_list(coordinates)) {
        match amenities.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.coordinates = coords.to_string(),
            None => amenities.push(Amenity {
                name: name.to_string(),
                coordinates: coords.to_string(),
            }),
        }
    }

    amenities
}

fn split_list(list: &str) -> Vec<&str> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(LIST_SEPARATOR).map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amenity(name: &str, coordinates: &str) -> Amenity {
        Amenity {
            name: name.into(),
            coordinates: coordinates.into(),
        }
    }

    #[test]
    fn pairs_by_position() {
        let pumps = pair_amenities(
            Some("HP Lonavala; Indian Oil Khopoli"),
            Some("18.75,73.40;18.78,73.34"),
        );
        assert_eq!(
            pumps,
            vec![
                amenity("HP Lonavala", "18.75,73.40"),
                amenity("Indian Oil Khopoli", "18.78,73.34"),
            ]
        );
    }

    #[test]
    fn truncates_to_shorter_list() {
        let more_names = pair_amenities(Some("A;B;C"), Some("1,1;2,2"));
        assert_eq!(more_names, vec![amenity("A", "1,1"), amenity("B", "2,2")]);

        let more_coords = pair_amenities(Some("A"), Some("1,1;2,2;3,3"));
        assert_eq!(more_coords, vec![amenity("A", "1,1")]);
    }

    #[test]
    fn missing_side_yields_nothing() {
        assert!(pair_amenities(None, Some("1,1")).is_empty());
        assert!(pair_amenities(Some("A"), None).is_empty());
        assert!(pair_amenities(None, None).is_empty());
        assert!(pair_amenities(Some(""), Some("1,1")).is_empty());
        assert!(pair_amenities(Some("A"), Some("  ")).is_empty());
    }

    #[test]
    fn repeated_name_takes_later_coordinates() {
        let hotels = pair_amenities(Some("Inn;Lodge;Inn"), Some("1,1;2,2;3,3"));
        assert_eq!(hotels, vec![amenity("Inn", "3,3"), amenity("Lodge", "2,2")]);
    }
}
