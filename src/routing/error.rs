use crate::graph::station::StationId;
use crate::routing::route::Route;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteLimit {
    /// maximum number of routes returned
    Count(usize),
    /// maximum number of stations on one route
    Depth(usize),
}

impl fmt::Display for RouteLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLimit::Count(n) => write!(f, "at most {} routes", n),
            RouteLimit::Depth(n) => write!(f, "at most {} stations per route", n),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum RouteError {
    #[error("Station {0} is not part of the network")]
    InvalidStation(StationId),

    /// Carries the routes found before the limit stopped the search.
    #[error("Route search stopped after {} routes: limit of {limit}", .routes.len())]
    RouteLimitExceeded { limit: RouteLimit, routes: Vec<Route> },
}
