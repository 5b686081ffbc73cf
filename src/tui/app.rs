use crate::graph::network::Network;
use crate::graph::station::{Station, StationId};
use crate::routing::enumerator::RouteEnumerator;
use crate::routing::error::RouteError;
use crate::routing::route::Route;
use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Focus {
    From,
    To,
    Routes,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::From => Focus::To,
            Focus::To => Focus::Routes,
            Focus::Routes => Focus::From,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

pub struct App {
    pub running: bool,
    pub focus: Focus,
    network: Network,
    enumerator: RouteEnumerator,
    title: String,
    from: usize,
    to: usize,
    routes: Vec<Route>,
    selected: usize,
    highlighted: Option<usize>,
    status: (StatusKind, String),
}

impl App {
    pub fn new(network: Network, enumerator: RouteEnumerator, title: impl Into<String>) -> Self {
        Self {
            running: true,
            focus: Focus::From,
            network,
            enumerator,
            title: title.into(),
            from: 0,
            to: 0,
            routes: Vec::new(),
            selected: 0,
            highlighted: None,
            status: (StatusKind::Info, "Result will be displayed here.".to_string()),
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn highlighted_route(&self) -> Option<&Route> {
        self.highlighted.and_then(|i| self.routes.get(i))
    }

    pub fn status(&self) -> (StatusKind, &str) {
        (self.status.0, &self.status.1)
    }

    pub fn from_station(&self) -> Option<&Station> {
        self.network.stations().get(self.from)
    }

    pub fn to_station(&self) -> Option<&Station> {
        self.network.stations().get(self.to)
    }

    /// Preselects stations, e.g. from the command line. Unknown ids are ignored.
    pub fn select_stations(&mut self, from: Option<StationId>, to: Option<StationId>) {
        let position = |id: StationId| self.network.stations().iter().position(|s| s.id() == id);
        if let Some(i) = from.and_then(position) {
            self.from = i;
        }
        if let Some(i) = to.and_then(position) {
            self.to = i;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up => self.step(-1),
            KeyCode::Down => self.step(1),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Enter => match self.focus {
                Focus::Routes => self.highlight_selected(),
                _ => self.calculate_routes(),
            },
            _ => {}
        }
    }

    fn step(&mut self, delta: isize) {
        let wrap = |value: usize, len: usize| -> usize {
            if len == 0 {
                0
            } else {
                (value as isize + delta).rem_euclid(len as isize) as usize
            }
        };
        let station_count = self.network.station_count();
        match self.focus {
            Focus::From => self.from = wrap(self.from, station_count),
            Focus::To => self.to = wrap(self.to, station_count),
            Focus::Routes => {
                self.selected = wrap(self.selected, self.routes.len());
                return;
            }
        }
        // routes for the old pair are stale
        if !self.routes.is_empty() {
            self.discard_routes();
            self.set_status(StatusKind::Info, "Selection changed. Press Enter to calculate.");
        }
    }

    fn discard_routes(&mut self) {
        self.routes.clear();
        self.selected = 0;
        self.highlighted = None;
    }

    pub fn calculate_routes(&mut self) {
        self.discard_routes();

        let (Some(from), Some(to)) = (self.from_station(), self.to_station()) else {
            self.set_status(
                StatusKind::Error,
                "Invalid station selection. Please choose valid stations.",
            );
            return;
        };
        let (from, to) = (from.id(), to.id());

        match self.enumerator.find_all_routes(&self.network, from, to) {
            Ok(routes) if routes.is_empty() => {
                self.set_status(StatusKind::Info, "No route found between the selected stations.")
            }
            Ok(routes) => {
                let text = format!(
                    "{} possible routes. Tab to the list, Enter to highlight.",
                    routes.len()
                );
                self.routes = routes;
                self.set_status(StatusKind::Info, text);
            }
            Err(RouteError::InvalidStation(id)) => {
                log::error!("station {} missing from network", id);
                self.set_status(
                    StatusKind::Error,
                    "Invalid station selection. Please choose valid stations.",
                )
            }
            Err(RouteError::RouteLimitExceeded { limit, routes }) => {
                let text = format!(
                    "Showing {} routes only: search limited to {}.",
                    routes.len(),
                    limit
                );
                self.routes = routes;
                self.set_status(StatusKind::Warning, text);
            }
        }
    }

    pub fn highlight_selected(&mut self) {
        if self.selected < self.routes.len() {
            self.highlighted = Some(self.selected);
        }
    }

    pub fn clear(&mut self) {
        self.discard_routes();
        self.set_status(StatusKind::Info, "Result will be displayed here.");
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = (kind, text.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::connection::Connection;
    use crate::routing::enumerator::RouteLimits;
    use crate::scenario::city::CityScenario;
    use crate::scenario::scenario::Scenario;

    fn city_app() -> App {
        App::new(
            CityScenario.network().unwrap(),
            RouteEnumerator::default(),
            "test",
        )
    }

    #[test]
    fn test_calculate_and_highlight() {
        let mut app = city_app();
        app.select_stations(Some(StationId(1)), Some(StationId(10)));
        app.handle_key(KeyCode::Enter);

        assert_eq!(3, app.routes().len());
        assert_eq!(StatusKind::Info, app.status().0);
        assert!(app.highlighted_route().is_none());

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        assert_eq!(Focus::Routes, app.focus);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        let highlighted = app.highlighted_route().unwrap();
        assert_eq!(
            &[StationId(1), StationId(4), StationId(8), StationId(10)],
            highlighted.stations()
        );

        app.handle_key(KeyCode::Down);
        assert_eq!(0, app.selected());
    }

    #[test]
    fn test_station_selection_wraps() {
        let mut app = city_app();
        app.handle_key(KeyCode::Up);
        assert_eq!(StationId(10), app.from_station().unwrap().id());
        app.handle_key(KeyCode::Down);
        assert_eq!(StationId(1), app.from_station().unwrap().id());
    }

    #[test]
    fn test_no_route_message() {
        let network = Network::new(
            vec![
                Station::new(StationId(1), "Station 1", (0.0, 0.0), 1.0),
                Station::new(StationId(2), "Station 2", (1.0, 0.0), 2.0),
                Station::new(StationId(3), "Station 3", (2.0, 0.0), 3.0),
            ],
            vec![Connection::new(StationId(1), StationId(2))],
        )
        .unwrap();
        let mut app = App::new(network, RouteEnumerator::default(), "test");
        app.select_stations(Some(StationId(1)), Some(StationId(3)));
        app.calculate_routes();

        assert!(app.routes().is_empty());
        assert_eq!("No route found between the selected stations.", app.status().1);
    }

    #[test]
    fn test_empty_network_is_invalid_selection() {
        let network = Network::new(vec![], vec![]).unwrap();
        let mut app = App::new(network, RouteEnumerator::default(), "test");
        app.calculate_routes();

        assert_eq!(StatusKind::Error, app.status().0);
        assert_eq!(
            "Invalid station selection. Please choose valid stations.",
            app.status().1
        );
    }

    #[test]
    fn test_limit_shows_partial_routes_with_warning() {
        let enumerator = RouteEnumerator::new(RouteLimits {
            max_routes: Some(1),
            max_depth: None,
        });
        let mut app = App::new(CityScenario.network().unwrap(), enumerator, "test");
        app.select_stations(Some(StationId(1)), Some(StationId(10)));
        app.calculate_routes();

        assert_eq!(1, app.routes().len());
        assert_eq!(StatusKind::Warning, app.status().0);
    }

    #[test]
    fn test_clear_and_quit() {
        let mut app = city_app();
        app.select_stations(Some(StationId(2)), Some(StationId(9)));
        app.calculate_routes();
        assert!(!app.routes().is_empty());

        app.handle_key(KeyCode::Char('c'));
        assert!(app.routes().is_empty());

        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_changing_stations_discards_old_routes() {
        let mut app = city_app();
        app.select_stations(Some(StationId(1)), Some(StationId(10)));
        app.calculate_routes();
        app.focus = Focus::Routes;
        app.handle_key(KeyCode::Enter);
        assert!(app.highlighted_route().is_some());

        app.focus = Focus::To;
        app.handle_key(KeyCode::Up);

        assert_eq!(StationId(9), app.to_station().unwrap().id());
        assert!(app.routes().is_empty());
        assert!(app.highlighted_route().is_none());
        assert_eq!(0, app.selected());
    }
}
