//! Subcommands for the DMR CLI.

use anyhow::{bail, Context};
use clap::Subcommand;
use dmr_stations::{StationDataset, StationRecord};
use dmr_sync::sort::sort_indices;
use dmr_sync::{MarkerSpec, SortDirection, SortKey, ViewConfig};
use dmr_utils::format::{thousands, truncate};
use dmr_utils::styling::{color_for, size_for};
use std::fs;

#[derive(Subcommand)]
pub enum Command {
    /// Print stations in table order
    List {
        /// Column to sort by (station_id, name, nitrate, loading, drainage)
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Print one station's details
    Show {
        /// USGS station id, e.g. 05482000
        station_id: String,
    },

    /// Validate the station data and print its derived values
    Check,

    /// Print the map marker specs as JSON
    Markers {
        /// JSON file overriding display settings
        #[arg(short, long)]
        config: Option<String>,
    },
}

pub fn run(command: Command, csv_path: Option<&str>) -> anyhow::Result<()> {
    let dataset = load_dataset(csv_path)?;
    match command {
        Command::List { sort, desc } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            for line in list_lines(&dataset, sort.map(|key| (key, direction))) {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Show { station_id } => {
            let Some(station) = dataset.get(&station_id) else {
                bail!("no station with id {}", station_id);
            };
            print!("{}", describe(station));
            Ok(())
        }
        Command::Check => {
            let range = dataset.loading_range();
            let bounds = dataset.bounds();
            let (lat, lon) = bounds.center();
            println!("{} stations OK", dataset.len());
            println!(
                "loading range: {} - {} lbs/day{}",
                thousands(range.min),
                thousands(range.max),
                if range.is_degenerate() { " (all equal)" } else { "" }
            );
            println!(
                "bounds: lat {:.5}..{:.5}, lon {:.5}..{:.5}, center ({:.5}, {:.5})",
                bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon, lat, lon
            );
            Ok(())
        }
        Command::Markers { config } => {
            let config = load_config(config.as_deref())?;
            let range = dataset.loading_range();
            let markers: Vec<MarkerSpec> = dataset
                .stations()
                .iter()
                .map(|s| MarkerSpec::for_station(s, range, &config))
                .collect();
            println!("{}", serde_json::to_string_pretty(&markers)?);
            Ok(())
        }
    }
}

fn load_dataset(csv_path: Option<&str>) -> anyhow::Result<StationDataset> {
    match csv_path {
        Some(path) => {
            log::info!("Loading stations from {}", path);
            let data = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            StationDataset::parse_csv(&data).with_context(|| format!("parsing {}", path))
        }
        None => {
            log::debug!("Using embedded station data");
            StationDataset::embedded()
        }
    }
}

fn load_config(path: Option<&str>) -> anyhow::Result<ViewConfig> {
    match path {
        Some(path) => {
            log::info!("Loading display config from {}", path);
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            ViewConfig::from_json(&json).with_context(|| format!("parsing {}", path))
        }
        None => Ok(ViewConfig::default()),
    }
}

/// One line per station, in original order or sorted.
fn list_lines(
    dataset: &StationDataset,
    sort: Option<(SortKey, SortDirection)>,
) -> Vec<String> {
    let mut order: Vec<usize> = (0..dataset.len()).collect();
    if let Some((key, direction)) = sort {
        sort_indices(dataset.stations(), &mut order, key, direction);
    }
    let range = dataset.loading_range();
    let name_width = ViewConfig::default().name_max_chars;

    order
        .iter()
        .map(|&i| {
            let s = &dataset.stations()[i];
            let bucket = format!("{:?}", color_for(s.typical_nitrate));
            format!(
                "{:<10} {:<33} {:>5} {:>9} {:>7}  {:<8} r={:.1}",
                s.station_id,
                truncate(&s.name, name_width),
                s.typical_nitrate,
                thousands(s.nitrate_loading),
                thousands(s.drainage_area),
                bucket,
                size_for(s.nitrate_loading, range.min, range.max),
            )
        })
        .collect()
}

fn describe(station: &StationRecord) -> String {
    format!(
        "{}\n  Station ID:            {}\n  Nitrate Concentration: {} mg/L{}\n  Loading Rate:          {} lbs/day\n  Drainage Area:         {} mi²\n  HUC8:                  {}\n  Location:              {:.5}, {:.5}\n  {}\n",
        station.name,
        station.station_id,
        station.typical_nitrate,
        if station.is_high_nitrate() { " (high)" } else { "" },
        thousands(station.nitrate_loading),
        thousands(station.drainage_area),
        station.huc8,
        station.lat,
        station.lon,
        station.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_in_dataset_order() {
        let dataset = StationDataset::embedded().unwrap();
        let lines = list_lines(&dataset, None);
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("05482000"));
        assert!(lines[0].contains("Des Moines River at 2nd Avenue..."));
        assert!(lines[0].contains("143,164"));
        assert!(lines[0].contains("Red"));
    }

    #[test]
    fn list_sorted_by_loading_descending() {
        let dataset = StationDataset::embedded().unwrap();
        let lines = list_lines(
            &dataset,
            Some((SortKey::NitrateLoading, SortDirection::Descending)),
        );
        assert!(lines[0].starts_with("05485500"));
        assert!(lines[0].ends_with("r=20.0"));
        assert!(lines[7].starts_with("05483450"));
        assert!(lines[7].ends_with("r=10.0"));
    }

    #[test]
    fn describe_flags_high_nitrate() {
        let dataset = StationDataset::embedded().unwrap();
        let text = describe(dataset.get("05480500").unwrap());
        assert!(text.contains("7.5 mg/L (high)"));
        assert!(text.contains("84,753 lbs/day"));
        let text = describe(dataset.get("05476750").unwrap());
        assert!(text.contains("6.8 mg/L\n"));
    }

    #[test]
    fn show_unknown_station_fails() {
        let err = run(
            Command::Show {
                station_id: "00000000".to_string(),
            },
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no station with id 00000000"));
    }

    #[test]
    fn missing_csv_file_reports_path() {
        let err = load_dataset(Some("/nonexistent/stations.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stations.csv"));
    }
}
