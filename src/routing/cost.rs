use crate::graph::network::Network;
use crate::graph::station::StationId;
use crate::routing::error::RouteError;

fn station_cost(network: &Network, id: StationId) -> Result<f64, RouteError> {
    network.cost(id).ok_or(RouteError::InvalidStation(id))
}

/// Fare between two stations: the absolute difference of their costs.
pub fn edge_cost(network: &Network, a: StationId, b: StationId) -> Result<f64, RouteError> {
    Ok((station_cost(network, a)? - station_cost(network, b)?).abs())
}

pub fn route_cost(network: &Network, route: &[StationId]) -> Result<f64, RouteError> {
    if let [only] = route {
        station_cost(network, *only)?;
    }
    route
        .windows(2)
        .map(|pair| edge_cost(network, pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::connection::Connection;
    use crate::graph::station::Station;
    use approx::assert_relative_eq;

    fn triangle() -> Network {
        Network::new(
            vec![
                Station::new(StationId(1), "Station 1", (0.0, 0.0), 1.0),
                Station::new(StationId(2), "Station 2", (1.0, 0.0), 1.0),
                Station::new(StationId(3), "Station 3", (0.0, 1.0), 2.0),
            ],
            vec![
                Connection::new(StationId(1), StationId(2)),
                Connection::new(StationId(1), StationId(3)),
                Connection::new(StationId(2), StationId(3)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_edge_cost_is_symmetric() {
        let network = triangle();
        let forward = edge_cost(&network, StationId(1), StationId(3)).unwrap();
        let backward = edge_cost(&network, StationId(3), StationId(1)).unwrap();
        assert_relative_eq!(1.0, forward);
        assert_relative_eq!(forward, backward);
    }

    #[test]
    fn test_route_cost_sums_legs() {
        let network = triangle();
        let ids = [StationId(1), StationId(2), StationId(3)];
        assert_relative_eq!(1.0, route_cost(&network, &ids).unwrap());

        let mut reversed = ids;
        reversed.reverse();
        assert_relative_eq!(1.0, route_cost(&network, &reversed).unwrap());
    }

    #[test]
    fn test_single_station_costs_nothing() {
        let network = triangle();
        assert_relative_eq!(0.0, route_cost(&network, &[StationId(2)]).unwrap());
        assert_relative_eq!(0.0, route_cost(&network, &[]).unwrap());
    }

    #[test]
    fn test_unknown_station_is_rejected() {
        let network = triangle();
        let err = route_cost(&network, &[StationId(1), StationId(7)]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidStation(StationId(7))));

        let err = route_cost(&network, &[StationId(7)]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidStation(StationId(7))));
    }
}
