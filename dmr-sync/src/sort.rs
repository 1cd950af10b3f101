//! Table sort keys, header cycling and the stable station comparator.

use dmr_stations::StationRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    StationId,
    Name,
    TypicalNitrate,
    NitrateLoading,
    DrainageArea,
}

impl SortKey {
    /// Column order in the table.
    pub const ALL: [SortKey; 5] = [
        SortKey::StationId,
        SortKey::Name,
        SortKey::TypicalNitrate,
        SortKey::NitrateLoading,
        SortKey::DrainageArea,
    ];

    /// Name used in `data-sort` attributes and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::StationId => "station_id",
            SortKey::Name => "name",
            SortKey::TypicalNitrate => "typical_nitrate",
            SortKey::NitrateLoading => "nitrate_loading_lbs_per_day",
            SortKey::DrainageArea => "drainage_area",
        }
    }

    /// Column header text.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::StationId => "Station ID",
            SortKey::Name => "Name",
            SortKey::TypicalNitrate => "Nitrate (mg/L)",
            SortKey::NitrateLoading => "Loading (lbs/day)",
            SortKey::DrainageArea => "Drainage (mi²)",
        }
    }

    /// Compare two stations on this key, ascending.
    ///
    /// Text compares case-insensitively, numbers numerically.
    pub fn compare(&self, a: &StationRecord, b: &StationRecord) -> Ordering {
        match self {
            SortKey::StationId => cmp_text(&a.station_id, &b.station_id),
            SortKey::Name => cmp_text(&a.name, &b.name),
            SortKey::TypicalNitrate => cmp_number(a.typical_nitrate, b.typical_nitrate),
            SortKey::NitrateLoading => cmp_number(a.nitrate_loading, b.nitrate_loading),
            SortKey::DrainageArea => cmp_number(a.drainage_area, b.drainage_area),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "station_id" | "id" => Ok(SortKey::StationId),
            "name" => Ok(SortKey::Name),
            "typical_nitrate" | "nitrate" => Ok(SortKey::TypicalNitrate),
            "nitrate_loading_lbs_per_day" | "loading" => Ok(SortKey::NitrateLoading),
            "drainage_area" | "drainage" => Ok(SortKey::DrainageArea),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_number(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// CSS class for a header showing this direction.
    pub fn css_class(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "sort-asc",
            SortDirection::Descending => "sort-desc",
        }
    }
}

/// Which column the table is sorted on, if any.
///
/// Activating a header goes none -> ascending -> descending -> ascending
/// for that key; activating another key starts it at ascending and leaves
/// every other header unsorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        key: SortKey,
        direction: SortDirection,
    },
}

impl SortState {
    /// Advance the header cycle for `key` and return the new direction.
    pub fn activate(&mut self, key: SortKey) -> SortDirection {
        let direction = match *self {
            SortState::Sorted {
                key: current,
                direction: SortDirection::Ascending,
            } if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        *self = SortState::Sorted { key, direction };
        direction
    }

    /// Direction shown on `key`'s header, `None` when it is not the sort key.
    pub fn indicator(&self, key: SortKey) -> Option<SortDirection> {
        match *self {
            SortState::Sorted {
                key: current,
                direction,
            } if current == key => Some(direction),
            _ => None,
        }
    }
}

/// Stable re-sort of `order` (indices into `stations`).
///
/// Ties keep their position from the incoming order, in both directions.
pub fn sort_indices(
    stations: &[StationRecord],
    order: &mut [usize],
    key: SortKey,
    direction: SortDirection,
) {
    order.sort_by(|&a, &b| direction.apply(key.compare(&stations[a], &stations[b])));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::station;

    fn names(stations: &[StationRecord], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| stations[i].name.clone()).collect()
    }

    #[test]
    fn header_cycle_for_one_key() {
        let mut state = SortState::default();
        assert_eq!(state.indicator(SortKey::Name), None);
        assert_eq!(state.activate(SortKey::Name), SortDirection::Ascending);
        assert_eq!(state.activate(SortKey::Name), SortDirection::Descending);
        assert_eq!(state.activate(SortKey::Name), SortDirection::Ascending);
        assert_eq!(state.activate(SortKey::Name), SortDirection::Descending);
        assert_eq!(state.indicator(SortKey::Name), Some(SortDirection::Descending));
    }

    #[test]
    fn switching_keys_resets_other_headers() {
        let mut state = SortState::default();
        state.activate(SortKey::Name);
        state.activate(SortKey::Name);
        assert_eq!(state.activate(SortKey::DrainageArea), SortDirection::Ascending);
        assert_eq!(state.indicator(SortKey::Name), None);
        assert_eq!(
            state.indicator(SortKey::DrainageArea),
            Some(SortDirection::Ascending)
        );
        // back to the first key starts over at ascending
        assert_eq!(state.activate(SortKey::Name), SortDirection::Ascending);
    }

    #[test]
    fn text_compares_case_insensitively() {
        let a = station("1", "alpha", 1.0);
        let b = station("2", "Beta", 1.0);
        let upper_a = station("3", "ALPHA", 1.0);
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Name.compare(&a, &upper_a), Ordering::Equal);
    }

    #[test]
    fn numbers_compare_numerically() {
        let low = station("1", "x", 9.0);
        let high = station("2", "y", 10.0);
        // "10" sorts before "9" as text
        assert_eq!(SortKey::TypicalNitrate.compare(&low, &high), Ordering::Less);
        assert_eq!(SortKey::TypicalNitrate.compare(&high, &low), Ordering::Greater);
    }

    #[test]
    fn name_sort_asc_then_desc() {
        let stations = vec![
            station("c", "C", 1.0),
            station("a", "A", 1.0),
            station("b", "B", 1.0),
        ];
        let mut order = vec![0, 1, 2];
        sort_indices(&stations, &mut order, SortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&stations, &order), ["A", "B", "C"]);
        sort_indices(&stations, &mut order, SortKey::Name, SortDirection::Descending);
        assert_eq!(names(&stations, &order), ["C", "B", "A"]);
        sort_indices(&stations, &mut order, SortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&stations, &order), ["A", "B", "C"]);
    }

    #[test]
    fn ties_keep_previous_order_in_both_directions() {
        let stations = vec![
            station("1", "first", 6.3),
            station("2", "second", 8.5),
            station("3", "third", 6.3),
        ];
        let mut order = vec![0, 1, 2];
        sort_indices(&stations, &mut order, SortKey::TypicalNitrate, SortDirection::Ascending);
        assert_eq!(names(&stations, &order), ["first", "third", "second"]);

        let mut order = vec![0, 1, 2];
        sort_indices(&stations, &mut order, SortKey::TypicalNitrate, SortDirection::Descending);
        assert_eq!(names(&stations, &order), ["second", "first", "third"]);
    }

    #[test]
    fn parse_keys() {
        assert_eq!("name".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("loading".parse::<SortKey>(), Ok(SortKey::NitrateLoading));
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("elevation".parse::<SortKey>().is_err());
    }
}
