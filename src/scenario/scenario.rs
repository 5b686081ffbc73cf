use crate::graph::network::Network;
use crate::scenario::error::ScenarioError;

/// Supplies the static network shown on the map.
pub trait Scenario {
    fn title(&self) -> &str;
    fn network(&self) -> Result<Network, ScenarioError>;
}
