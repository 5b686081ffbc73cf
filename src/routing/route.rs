use crate::graph::network::Network;
use crate::graph::station::StationId;

/// A simple path through the network together with its total fare.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    stations: Vec<StationId>,
    cost: f64,
}

impl Route {
    pub fn new(stations: Vec<StationId>, cost: f64) -> Self {
        Self { stations, cost }
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn start(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    pub fn end(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    /// Consecutive station pairs, in travel order.
    pub fn legs(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.stations.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn uses_leg(&self, a: StationId, b: StationId) -> bool {
        self.legs()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

fn station_label(network: &Network, id: StationId) -> String {
    network
        .station(id)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| format!("Station {}", id))
}

pub fn route_path(network: &Network, route: &Route) -> String {
    route
        .stations()
        .iter()
        .map(|id| station_label(network, *id))
        .collect::<Vec<String>>()
        .join(" -> ")
}

pub fn describe_route(network: &Network, index: usize, route: &Route) -> String {
    format!(
        "{}. {} (Cost: {:.2})",
        index,
        route_path(network, route),
        route.cost()
    )
}

pub fn describe_routes(network: &Network, routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No route found between the selected stations.".to_string();
    }
    let mut text = String::from("All possible routes:");
    routes.iter().enumerate().for_each(|(i, r)| {
        text.push('\n');
        text.push_str(&describe_route(network, i + 1, r));
    });
    text
}
