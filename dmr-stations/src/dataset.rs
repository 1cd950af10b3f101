//! The static station dataset and the values derived from it.
//!
//! A `StationDataset` is validated once when it is built and never mutated
//! afterwards. The loading range and geographic bounds are computed in the
//! constructor, so they always describe the records they travel with.

use crate::error::DatasetError;
use crate::station::StationRecord;
use anyhow::Context;
use csv::ReaderBuilder;
use serde::Serialize;
use std::collections::HashSet;

/// Embedded CSV data for the Des Moines River monitoring stations.
pub static STATIONS_CSV: &str = include_str!("../../fixtures/stations.csv");

/// Min/max nitrate loading (lbs/day) across the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedRange {
    pub min: f64,
    pub max: f64,
}

impl DerivedRange {
    /// Range over `values`; `None` when empty.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Bounding box of all station coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Midpoint of the box as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

/// Immutable, validated collection of stations in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct StationDataset {
    stations: Vec<StationRecord>,
    loading_range: DerivedRange,
    bounds: GeoBounds,
}

impl StationDataset {
    /// Validate `stations` and compute the derived values.
    ///
    /// Rejects an empty list, duplicate ids, non-finite numbers, coordinates
    /// outside the globe, a non-positive drainage area and negative nitrate
    /// figures.
    pub fn from_records(stations: Vec<StationRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.station_id.as_str()) {
                return Err(DatasetError::DuplicateId(station.station_id.clone()));
            }
            validate_station(station)?;
        }

        let loading_range = DerivedRange::from_values(stations.iter().map(|s| s.nitrate_loading))
            .ok_or(DatasetError::Empty)?;
        let bounds = GeoBounds {
            min_lat: stations.iter().map(|s| s.lat).fold(f64::INFINITY, f64::min),
            max_lat: stations.iter().map(|s| s.lat).fold(f64::NEG_INFINITY, f64::max),
            min_lon: stations.iter().map(|s| s.lon).fold(f64::INFINITY, f64::min),
            max_lon: stations.iter().map(|s| s.lon).fold(f64::NEG_INFINITY, f64::max),
        };

        Ok(Self {
            stations,
            loading_range,
            bounds,
        })
    }

    /// Parse a station CSV (with headers) into a validated dataset.
    ///
    /// Expected columns:
    /// `station_id,name,lat,lon,drainage_area,typical_nitrate,nitrate_loading_lbs_per_day,huc8,description`
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut stations = Vec::new();
        for (line, result) in rdr.deserialize::<StationRecord>().enumerate() {
            let station = result.with_context(|| format!("bad station row {}", line + 1))?;
            stations.push(station);
        }

        let dataset = Self::from_records(stations)?;
        log::info!("Loaded {} stations", dataset.len());
        Ok(dataset)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::parse_csv(STATIONS_CSV).context("embedded station data is invalid")
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, station_id: &str) -> Option<&StationRecord> {
        self.stations.iter().find(|s| s.station_id == station_id)
    }

    /// Index of `station_id` in original dataset order.
    pub fn position(&self, station_id: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.station_id == station_id)
    }

    pub fn loading_range(&self) -> DerivedRange {
        self.loading_range
    }

    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }
}

fn validate_station(station: &StationRecord) -> Result<(), DatasetError> {
    for (field, value) in station.numeric_fields() {
        if !value.is_finite() {
            return Err(DatasetError::NonFinite {
                station_id: station.station_id.clone(),
                field,
            });
        }
    }

    let out_of_range = |field: &'static str, value: f64| DatasetError::OutOfRange {
        station_id: station.station_id.clone(),
        field,
        value,
    };
    if !(-90.0..=90.0).contains(&station.lat) {
        return Err(out_of_range("lat", station.lat));
    }
    if !(-180.0..=180.0).contains(&station.lon) {
        return Err(out_of_range("lon", station.lon));
    }
    if station.drainage_area <= 0.0 {
        return Err(out_of_range("drainage_area", station.drainage_area));
    }
    if station.typical_nitrate < 0.0 {
        return Err(out_of_range("typical_nitrate", station.typical_nitrate));
    }
    if station.nitrate_loading < 0.0 {
        return Err(out_of_range(
            "nitrate_loading_lbs_per_day",
            station.nitrate_loading,
        ));
    }
    Ok(())
}
