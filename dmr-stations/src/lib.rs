//! Core types for the Des Moines River nitrate monitoring stations.
//!
//! - `station`: the immutable `StationRecord`
//! - `dataset`: `StationDataset` with its derived loading range and bounds
//! - `error`: validation errors raised while building a dataset

pub mod dataset;
pub mod error;
pub mod station;

pub use dataset::{DerivedRange, GeoBounds, StationDataset, STATIONS_CSV};
pub use error::DatasetError;
pub use station::StationRecord;
