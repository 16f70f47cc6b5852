//! Grouping of venues into (city, state) areas for the venue listing page.

use std::collections::BTreeMap;

use serde::Serialize;

/// A row that can be placed into an area.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
    fn name(&self) -> &str;
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group venues by exact (city, state).
///
/// Areas come out ordered by city, then state. Venues inside an area are
/// ordered by name; the sort is stable so equal names keep input order.
/// Every input venue lands in exactly one area.
pub fn group_by_area<T: Located>(venues: impl IntoIterator<Item = T>) -> Vec<Area<T>> {
    let mut areas: BTreeMap<(String, String), Vec<T>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.city().to_string(), venue.state().to_string()))
            .or_default()
            .push(venue);
    }

    areas
        .into_iter()
        .map(|((city, state), mut venues)| {
            venues.sort_by(|a, b| a.name().cmp(b.name()));
            Area {
                city,
                state,
                venues,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: i64,
        name: &'static str,
        city: &'static str,
        state: &'static str,
    }

    impl Located for Row {
        fn city(&self) -> &str {
            self.city
        }
        fn state(&self) -> &str {
            self.state
        }
        fn name(&self) -> &str {
            self.name
        }
    }

    fn row(id: i64, name: &'static str, city: &'static str, state: &'static str) -> Row {
        Row {
            id,
            name,
            city,
            state,
        }
    }

    #[test]
    fn groups_by_city_and_state() {
        let areas = group_by_area(vec![
            row(1, "The Musical Hop", "San Francisco", "CA"),
            row(2, "The Dueling Pianos Bar", "New York", "NY"),
            row(3, "Park Square Live", "San Francisco", "CA"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "New York");
        assert_eq!(areas[1].city, "San Francisco");
        let names: Vec<&str> = areas[1].venues.iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Park Square Live", "The Musical Hop"]);
    }

    #[test]
    fn same_city_different_state_is_separate_area() {
        let areas = group_by_area(vec![
            row(1, "A", "Portland", "OR"),
            row(2, "B", "Portland", "ME"),
        ]);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
        assert_eq!(areas[1].state, "OR");
    }

    #[test]
    fn every_venue_in_exactly_one_area() {
        let input = vec![
            row(1, "A", "X", "CA"),
            row(2, "B", "Y", "CA"),
            row(3, "C", "X", "CA"),
            row(4, "D", "X", "NY"),
        ];
        let areas = group_by_area(input.clone());
        let mut ids: Vec<i64> = areas
            .iter()
            .flat_map(|a| a.venues.iter().map(|v| v.id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn equal_names_keep_input_order() {
        let areas = group_by_area(vec![row(7, "Same", "X", "CA"), row(3, "Same", "X", "CA")]);
        let ids: Vec<i64> = areas[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn no_venues_no_areas() {
        assert!(group_by_area(Vec::<Row>::new()).is_empty());
    }
}
