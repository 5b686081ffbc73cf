use crate::graph::connection::Connection;
use crate::graph::network::Network;
use crate::graph::station::{Station, StationId};
use crate::scenario::error::ScenarioError;
use crate::scenario::scenario::Scenario;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::TAU;

/// Reproducible random network: a random spanning tree plus extra links.
pub struct RandomScenario {
    seed: u64,
    stations: usize,
    extra_links: usize,
    title: String,
}

impl RandomScenario {
    const MIN_STATIONS: usize = 2;
    const RADIUS: f64 = 150.0;
    const CENTER: f64 = 200.0;

    pub fn new(seed: u64, stations: usize, extra_links: usize) -> Self {
        Self {
            seed,
            stations,
            extra_links,
            title: format!("Random network (seed {})", seed),
        }
    }
}

impl Scenario for RandomScenario {
    fn title(&self) -> &str {
        &self.title
    }

    fn network(&self) -> Result<Network, ScenarioError> {
        if self.stations < Self::MIN_STATIONS {
            return Err(ScenarioError::TooFewStations {
                min: Self::MIN_STATIONS,
                got: self.stations,
            });
        }
        let mut rng = StdRng::seed_from_u64(self.seed);

        let stations = (0..self.stations)
            .map(|i| {
                let angle = TAU * i as f64 / self.stations as f64;
                let position = (
                    Self::CENTER + Self::RADIUS * angle.cos(),
                    Self::CENTER + Self::RADIUS * angle.sin(),
                );
                // whole pennies, like a fare table
                let fare = (rng.gen_range(1.0..4.0) * 100.0_f64).round() / 100.0;
                let id = StationId(i as u32 + 1);
                Station::new(id, format!("Station {}", id), position, fare)
            })
            .collect::<Vec<Station>>();

        let mut connections = Vec::new();
        for i in 1..self.stations {
            let parent = rng.gen_range(0..i);
            connections.push(Connection::new(stations[parent].id(), stations[i].id()));
        }
        for _ in 0..self.extra_links {
            let from = rng.gen_range(0..self.stations);
            let to = rng.gen_range(0..self.stations);
            if from != to {
                connections.push(Connection::new(stations[from].id(), stations[to].id()));
            }
        }

        log::debug!(
            "random network seed={} stations={} links={}",
            self.seed,
            self.stations,
            connections.len()
        );
        Ok(Network::new(stations, connections)?)
    }
}
