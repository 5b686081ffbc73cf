use crate::graph::network::Network;
use crate::graph::station::{Station, StationId};
use crate::scenario::error::ScenarioError;
use crate::scenario::scenario::Scenario;

/// (id, x, y, fare)
const STATIONS: [(u32, f64, f64, f64); 10] = [
    (1, 100.0, 100.0, 2.50),
    (2, 200.0, 100.0, 3.00),
    (3, 300.0, 100.0, 2.75),
    (4, 100.0, 200.0, 2.90),
    (5, 200.0, 200.0, 3.20),
    (6, 300.0, 200.0, 2.60),
    (7, 100.0, 300.0, 3.10),
    (8, 200.0, 300.0, 2.80),
    (9, 300.0, 300.0, 3.30),
    (10, 200.0, 400.0, 2.95),
];

const LINKS: [(u32, &[u32]); 10] = [
    (1, &[2, 4]),
    (2, &[1, 3, 5, 6]),
    (3, &[2, 7]),
    (4, &[1, 8]),
    (5, &[2, 9]),
    (6, &[2, 9]),
    (7, &[3]),
    (8, &[4, 10]),
    (9, &[5, 6, 10]),
    (10, &[8, 9]),
];

/// The ten-station demo city.
pub struct CityScenario;

impl Scenario for CityScenario {
    fn title(&self) -> &str {
        "Transportation Network Map"
    }

    fn network(&self) -> Result<Network, ScenarioError> {
        let stations = STATIONS
            .iter()
            .map(|(id, x, y, fare)| {
                Station::new(StationId(*id), format!("Station {}", id), (*x, *y), *fare)
            })
            .collect();

        let neighbours: Vec<(StationId, Vec<StationId>)> = LINKS
            .iter()
            .map(|(id, links)| (StationId(*id), links.iter().map(|l| StationId(*l)).collect()))
            .collect();
        let adjacency: Vec<(StationId, &[StationId])> = neighbours
            .iter()
            .map(|(id, links)| (*id, links.as_slice()))
            .collect();

        Ok(Network::from_adjacency(stations, &adjacency)?)
    }
}
