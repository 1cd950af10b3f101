use thiserror::Error;

/// A station dataset that breaks one of its invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Dataset error: no stations")]
    Empty,

    #[error("Dataset error: duplicate station id {0}")]
    DuplicateId(String),

    #[error("Dataset error: station {station_id} has a non-finite {field}")]
    NonFinite {
        station_id: String,
        field: &'static str,
    },

    #[error("Dataset error: station {station_id} has {field} = {value} out of range")]
    OutOfRange {
        station_id: String,
        field: &'static str,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_station_and_field() {
        let err = DatasetError::OutOfRange {
            station_id: "05482000".to_string(),
            field: "lat",
            value: 91.0,
        };
        assert_eq!(
            err.to_string(),
            "Dataset error: station 05482000 has lat = 91 out of range"
        );
        assert_eq!(
            DatasetError::DuplicateId("A".to_string()).to_string(),
            "Dataset error: duplicate station id A"
        );
        assert_eq!(DatasetError::Empty.to_string(), "Dataset error: no stations");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = DatasetError::NonFinite {
            station_id: "B".to_string(),
            field: "typical_nitrate",
        }
        .into();
        assert!(err.downcast_ref::<DatasetError>().is_some());
        assert_eq!(
            err.to_string(),
            "Dataset error: station B has a non-finite typical_nitrate"
        );
    }
}
