use crate::graph::connection::Connection;
use crate::graph::network::Network;
use crate::graph::station::{Station, StationId};
use crate::scenario::error::ScenarioError;
use crate::scenario::scenario::Scenario;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Deserialize)]
struct StationRecord {
    id: StationId,
    name: Option<String>,
    x: f64,
    y: f64,
    cost: f64,
}

#[derive(Clone, Deserialize)]
struct NetworkRecord {
    title: Option<String>,
    stations: Vec<StationRecord>,
    connections: Vec<(StationId, StationId)>,
}

/// Network described by a JSON file:
///
/// ```json
/// {
///   "title": "Two stops",
///   "stations": [
///     {"id": 1, "name": "Depot", "x": 0, "y": 0, "cost": 2.5},
///     {"id": 2, "x": 100, "y": 0, "cost": 3.0}
///   ],
///   "connections": [[1, 2]]
/// }
/// ```
///
/// The title defaults to the file path.
pub struct FileScenario {
    title: String,
    record: NetworkRecord,
}

impl FileScenario {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScenarioError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| ScenarioError::Io {
            path: path.clone(),
            source,
        })?;
        let scenario = Self::parse(path, &text)?;
        log::info!("loaded {} stations from {}", scenario.record.stations.len(), scenario.title);
        Ok(scenario)
    }

    fn parse(path: PathBuf, text: &str) -> Result<Self, ScenarioError> {
        let record: NetworkRecord =
            serde_json::from_str(text).map_err(|source| ScenarioError::Parse {
                path: path.clone(),
                source,
            })?;
        let title = record
            .title
            .clone()
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { title, record })
    }
}

impl Scenario for FileScenario {
    fn title(&self) -> &str {
        &self.title
    }

    fn network(&self) -> Result<Network, ScenarioError> {
        let stations = self
            .record
            .stations
            .iter()
            .cloned()
            .map(|s| {
                let name = s.name.unwrap_or_else(|| format!("Station {}", s.id));
                Station::new(s.id, name, (s.x, s.y), s.cost)
            })
            .collect();
        let connections = self
            .record
            .connections
            .iter()
            .map(|(a, b)| Connection::new(*a, *b))
            .collect();

        Ok(Network::new(stations, connections)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::error::NetworkError;
    use approx::assert_relative_eq;
    use std::env;

    const TWO_STOPS: &str = r#"{
        "title": "Two stops",
        "stations": [
            {"id": 1, "name": "Depot", "x": 0, "y": 0, "cost": 2.5},
            {"id": 2, "x": 100, "y": 0, "cost": 3.0}
        ],
        "connections": [[1, 2]]
    }"#;

    #[test]
    fn test_parse_network() {
        let scenario = FileScenario::parse("two.json".into(), TWO_STOPS).unwrap();
        let network = scenario.network().unwrap();

        assert_eq!("Two stops", scenario.title());
        assert_eq!("Depot", network.station(StationId(1)).unwrap().name());
        assert_eq!("Station 2", network.station(StationId(2)).unwrap().name());
        assert_eq!(&[StationId(1)], network.neighbours(StationId(2)));
        assert_relative_eq!(3.0, network.cost(StationId(2)).unwrap());
    }

    #[test]
    fn test_title_defaults_to_path() {
        let text = r#"{"stations": [{"id": 4, "x": 0, "y": 0, "cost": 1}], "connections": []}"#;
        let scenario = FileScenario::parse("maps/one.json".into(), text).unwrap();
        assert_eq!("maps/one.json", scenario.title());
    }

    #[test]
    fn test_open_reads_file_through_scenario() {
        let path = env::temp_dir().join(format!("routemap-two-stops-{}.json", std::process::id()));
        fs::write(&path, TWO_STOPS).unwrap();

        let scenario: Box<dyn Scenario> = Box::new(FileScenario::open(&path).unwrap());
        let network = scenario.network().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!("Two stops", scenario.title());
        assert_eq!(2, network.station_count());
        assert_eq!(1, network.connections().len());
    }

    #[test]
    fn test_malformed_json() {
        let err = FileScenario::parse("broken.json".into(), "{\"stations\": [").err();
        assert!(matches!(err, Some(ScenarioError::Parse { .. })));
    }

    #[test]
    fn test_invalid_network_is_reported() {
        let text = r#"{
            "stations": [{"id": 1, "x": 0, "y": 0, "cost": 1}],
            "connections": [[1, 3]]
        }"#;
        let scenario = FileScenario::parse("bad.json".into(), text).unwrap();
        assert!(matches!(
            scenario.network().err(),
            Some(ScenarioError::Network(NetworkError::UnknownStation { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = FileScenario::open("/nonexistent/routemap/network.json").err();
        assert!(matches!(err, Some(ScenarioError::Io { .. })));
    }
}
