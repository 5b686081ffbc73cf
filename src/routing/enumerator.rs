use crate::graph::network::Network;
use crate::graph::station::StationId;
use crate::routing::cost::route_cost;
use crate::routing::error::{RouteError, RouteLimit};
use crate::routing::route::Route;
use std::collections::VecDeque;

/// Caps that bound the exponential worst case on larger graphs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RouteLimits {
    pub max_routes: Option<usize>,
    /// counted in stations, start and end included
    pub max_depth: Option<usize>,
}

impl RouteLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }
}

/// One pending branch of the search. Every branch owns its path and its visited
/// set, so siblings never see each other's stations.
struct Branch {
    station: StationId,
    path: Vec<StationId>,
    visited: Vec<bool>,
}

pub struct RouteEnumerator {
    limits: RouteLimits,
}

impl RouteEnumerator {
    pub fn new(limits: RouteLimits) -> Self {
        Self { limits }
    }

    /// Returns every simple path from `start` to `end`, in depth-first order
    /// following each station's neighbour order.
    pub fn find_all_routes(
        &self,
        network: &Network,
        start: StationId,
        end: StationId,
    ) -> Result<Vec<Route>, RouteError> {
        for id in [start, end] {
            if !network.contains(id) {
                return Err(RouteError::InvalidStation(id));
            }
        }

        let mut routes: Vec<Route> = Vec::new();
        let mut pruned = false;
        let mut stack = vec![Branch {
            station: start,
            path: Vec::new(),
            visited: vec![false; network.station_count()],
        }];

        while let Some(Branch {
            station,
            mut path,
            mut visited,
        }) = stack.pop()
        {
            if self.limits.max_depth.is_some_and(|d| path.len() >= d) {
                // a cut dead end loses nothing
                pruned |= reaches(network, station, end, &visited);
                continue;
            }
            path.push(station);

            if station == end {
                if let Some(max) = self.limits.max_routes {
                    if routes.len() >= max {
                        log::warn!(
                            "route search {} -> {} hit the limit of {} routes",
                            start,
                            end,
                            max
                        );
                        return Err(RouteError::RouteLimitExceeded {
                            limit: RouteLimit::Count(max),
                            routes,
                        });
                    }
                }
                let cost = route_cost(network, &path)?;
                routes.push(Route::new(path, cost));
                continue;
            }

            if let Some(i) = network.position_of(station) {
                visited[i] = true;
            }
            // reversed so the first neighbour is popped first
            for next in network.neighbours(station).iter().rev() {
                let seen = network.position_of(*next).is_some_and(|i| visited[i]);
                if !seen {
                    stack.push(Branch {
                        station: *next,
                        path: path.clone(),
                        visited: visited.clone(),
                    });
                }
            }
        }

        if pruned {
            if let Some(depth) = self.limits.max_depth {
                log::warn!(
                    "route search {} -> {} skipped routes longer than {} stations",
                    start,
                    end,
                    depth
                );
                return Err(RouteError::RouteLimitExceeded {
                    limit: RouteLimit::Depth(depth),
                    routes,
                });
            }
        }

        log::debug!("found {} routes from {} to {}", routes.len(), start, end);
        Ok(routes)
    }
}

/// Whether `end` can be reached from `from` without passing a visited station.
fn reaches(network: &Network, from: StationId, end: StationId, visited: &[bool]) -> bool {
    let mut seen = visited.to_vec();
    let mut queue = VecDeque::from([from]);
    if let Some(i) = network.position_of(from) {
        seen[i] = true;
    }
    while let Some(station) = queue.pop_front() {
        if station == end {
            return true;
        }
        for next in network.neighbours(station) {
            if let Some(i) = network.position_of(*next) {
                if !seen[i] {
                    seen[i] = true;
                    queue.push_back(*next);
                }
            }
        }
    }
    false
}

impl Default for RouteEnumerator {
    fn default() -> Self {
        Self::new(RouteLimits::unlimited())
    }
}

pub fn find_all_routes(
    network: &Network,
    start: StationId,
    end: StationId,
) -> Result<Vec<Route>, RouteError> {
    RouteEnumerator::default().find_all_routes(network, start, end)
}
