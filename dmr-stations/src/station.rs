use serde::{Deserialize, Serialize};

/// Nitrate concentration (mg/L) above which a station is flagged as high.
pub const HIGH_NITRATE_MG_L: f64 = 7.0;

/// A USGS water-quality monitoring station with its nitrate metrics.
///
/// Field names match the columns of `fixtures/stations.csv`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    /// USGS site number (e.g. "05482000"). Unique within a dataset.
    pub station_id: String,
    /// Human-readable site name
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Drainage area in square miles
    pub drainage_area: f64,
    /// Typical nitrate concentration in mg/L
    pub typical_nitrate: f64,
    /// Nitrate loading rate in lbs/day
    #[serde(rename = "nitrate_loading_lbs_per_day")]
    pub nitrate_loading: f64,
    /// 8-digit hydrologic unit code, kept as text to preserve leading zeros
    pub huc8: String,
    pub description: String,
}

impl StationRecord {
    /// True when the typical concentration is strictly above 7.0 mg/L.
    pub fn is_high_nitrate(&self) -> bool {
        self.typical_nitrate > HIGH_NITRATE_MG_L
    }

    /// Numeric fields paired with their column names, for validation.
    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("lat", self.lat),
            ("lon", self.lon),
            ("drainage_area", self.drainage_area),
            ("typical_nitrate", self.typical_nitrate),
            ("nitrate_loading_lbs_per_day", self.nitrate_loading),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(nitrate: f64) -> StationRecord {
        StationRecord {
            station_id: "05482000".to_string(),
            name: "Des Moines River at 2nd Avenue at Des Moines, IA".to_string(),
            lat: 41.61194444,
            lon: -93.6197222,
            drainage_area: 6245.0,
            typical_nitrate: nitrate,
            nitrate_loading: 143164.0,
            huc8: "07100004".to_string(),
            description: "Major monitoring point below Saylorville Reservoir".to_string(),
        }
    }

    #[test]
    fn high_nitrate_is_strictly_above_seven() {
        assert!(!station(7.0).is_high_nitrate());
        assert!(station(7.1).is_high_nitrate());
        assert!(!station(4.8).is_high_nitrate());
    }

    #[test]
    fn numeric_fields_cover_all_measurements() {
        let fields = station(8.5).numeric_fields();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[3], ("typical_nitrate", 8.5));
        assert_eq!(fields[4], ("nitrate_loading_lbs_per_day", 143164.0));
    }
}
