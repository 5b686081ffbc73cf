use crate::graph::station::StationId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Station {0} is declared more than once")]
    DuplicateStation(StationId),

    #[error("Connection {from} - {to} refers to unknown station {missing}")]
    UnknownStation {
        from: StationId,
        to: StationId,
        missing: StationId,
    },

    #[error("Station {0} cannot be connected to itself")]
    SelfConnection(StationId),

    #[error("Station {id} has a non-finite cost: {cost}")]
    InvalidCost { id: StationId, cost: f64 },
}
