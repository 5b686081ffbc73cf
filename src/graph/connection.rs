use crate::graph::station::StationId;

/// An undirected link between two stations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    from: StationId,
    to: StationId,
}

impl Connection {
    pub fn new(from: StationId, to: StationId) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> StationId {
        self.from
    }

    pub fn to(&self) -> StationId {
        self.to
    }
}
