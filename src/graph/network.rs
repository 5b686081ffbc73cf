use crate::graph::connection::Connection;
use crate::graph::error::NetworkError;
use crate::graph::station::{Station, StationId};
use std::collections::HashMap;

/// Immutable station graph. Adjacency is always symmetric.
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    connections: Vec<Connection>,
    adj: Vec<Vec<StationId>>,
}

impl Network {
    /// Builds the network from declared links. Neighbour lists keep the order in
    /// which links are declared; a link seen twice (in either direction) is kept once.
    pub fn new(stations: Vec<Station>, connections: Vec<Connection>) -> Result<Self, NetworkError> {
        let mut index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if !station.cost().is_finite() {
                return Err(NetworkError::InvalidCost {
                    id: station.id(),
                    cost: station.cost(),
                });
            }
            if index.insert(station.id(), i).is_some() {
                return Err(NetworkError::DuplicateStation(station.id()));
            }
        }

        let mut adj: Vec<Vec<StationId>> = vec![Vec::new(); stations.len()];
        let mut unique: Vec<Connection> = Vec::with_capacity(connections.len());
        for c in connections {
            let (from, to) = (c.from(), c.to());
            if from == to {
                return Err(NetworkError::SelfConnection(from));
            }
            let (Some(&f), Some(&t)) = (index.get(&from), index.get(&to)) else {
                let missing = if index.contains_key(&from) { to } else { from };
                return Err(NetworkError::UnknownStation { from, to, missing });
            };
            if adj[f].contains(&to) {
                continue;
            }
            adj[f].push(to);
            adj[t].push(from);
            unique.push(c);
        }

        log::debug!(
            "network built: {} stations, {} connections",
            stations.len(),
            unique.len()
        );

        Ok(Self {
            stations,
            index,
            connections: unique,
            adj,
        })
    }

    /// Builds the network from per-station neighbour lists.
    pub fn from_adjacency(
        stations: Vec<Station>,
        adjacency: &[(StationId, &[StationId])],
    ) -> Result<Self, NetworkError> {
        let connections = adjacency
            .iter()
            .flat_map(|(from, neighbours)| neighbours.iter().map(|to| Connection::new(*from, *to)))
            .collect();
        Self::new(stations, connections)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.index.get(&id).map(|&i| &self.stations[i])
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn cost(&self, id: StationId) -> Option<f64> {
        self.station(id).map(|s| s.cost())
    }

    /// Neighbours in declaration order; empty for unknown stations.
    pub fn neighbours(&self, id: StationId) -> &[StationId] {
        self.index
            .get(&id)
            .map(|&i| self.adj[i].as_slice())
            .unwrap_or(&[])
    }

    pub fn are_adjacent(&self, a: StationId, b: StationId) -> bool {
        self.neighbours(a).contains(&b)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub(crate) fn position_of(&self, id: StationId) -> Option<usize> {
        self.index.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u32, cost: f64) -> Station {
        Station::new(StationId(id), format!("Station {}", id), (0.0, 0.0), cost)
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let network = Network::new(
            vec![station(1, 1.0), station(2, 1.0), station(3, 2.0)],
            vec![
                Connection::new(StationId(1), StationId(2)),
                Connection::new(StationId(3), StationId(1)),
            ],
        )
        .unwrap();

        assert_eq!(&[StationId(2), StationId(3)], network.neighbours(StationId(1)));
        assert_eq!(&[StationId(1)], network.neighbours(StationId(2)));
        assert_eq!(&[StationId(1)], network.neighbours(StationId(3)));
        for s in network.stations() {
            for n in network.neighbours(s.id()) {
                assert!(network.are_adjacent(*n, s.id()));
            }
        }
    }

    #[test]
    fn test_from_adjacency_keeps_declared_order() {
        let ids = [StationId(1), StationId(2), StationId(3)];
        let network = Network::from_adjacency(
            vec![station(1, 1.0), station(2, 1.0), station(3, 2.0)],
            &[
                (ids[0], &[ids[1], ids[2]]),
                (ids[1], &[ids[0], ids[2]]),
                (ids[2], &[ids[0], ids[1]]),
            ],
        )
        .unwrap();

        assert_eq!(&[ids[1], ids[2]], network.neighbours(ids[0]));
        assert_eq!(&[ids[0], ids[2]], network.neighbours(ids[1]));
        assert_eq!(&[ids[0], ids[1]], network.neighbours(ids[2]));
        assert_eq!(3, network.connections().len());
    }

    #[test]
    fn test_one_sided_declaration_is_mirrored() {
        let network = Network::from_adjacency(
            vec![station(1, 1.0), station(2, 2.0)],
            &[(StationId(1), &[StationId(2)])],
        )
        .unwrap();

        assert_eq!(&[StationId(1)], network.neighbours(StationId(2)));
    }

    #[test]
    fn test_rejects_malformed_input() {
        let duplicate = Network::new(vec![station(1, 1.0), station(1, 2.0)], vec![]);
        assert_eq!(Some(NetworkError::DuplicateStation(StationId(1))), duplicate.err());

        let unknown = Network::new(
            vec![station(1, 1.0)],
            vec![Connection::new(StationId(1), StationId(9))],
        );
        assert_eq!(
            Some(NetworkError::UnknownStation {
                from: StationId(1),
                to: StationId(9),
                missing: StationId(9),
            }),
            unknown.err()
        );

        let self_loop = Network::new(
            vec![station(1, 1.0)],
            vec![Connection::new(StationId(1), StationId(1))],
        );
        assert_eq!(Some(NetworkError::SelfConnection(StationId(1))), self_loop.err());

        let nan = Network::new(vec![station(1, f64::NAN)], vec![]);
        assert!(matches!(nan, Err(NetworkError::InvalidCost { .. })));
    }

    #[test]
    fn test_unknown_station_has_no_neighbours() {
        let network = Network::new(vec![station(1, 1.0)], vec![]).unwrap();
        assert!(network.neighbours(StationId(42)).is_empty());
        assert!(!network.contains(StationId(42)));
        assert_eq!(None, network.cost(StationId(42)));
    }
}
