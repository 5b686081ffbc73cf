use serde::Deserialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Station {
    id: StationId,
    name: String,
    /// map coordinates, only used for drawing
    position: (f64, f64),
    /// finite fare value
    cost: f64,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, position: (f64, f64), cost: f64) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            cost,
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}
