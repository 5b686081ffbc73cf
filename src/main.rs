use crate::cli::Cli;
use crate::error::AppError;
use crate::graph::network::Network;
use crate::graph::station::StationId;
use crate::logging::init_logging;
use crate::routing::enumerator::RouteEnumerator;
use crate::routing::error::RouteError;
use crate::routing::route::describe_routes;
use crate::scenario::city::CityScenario;
use crate::scenario::file::FileScenario;
use crate::scenario::random::RandomScenario;
use crate::scenario::scenario::Scenario;
use crate::tui::app::App;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod error;
mod graph;
mod logging;
mod routing;
mod scenario;
mod tui;

fn load_network(cli: &Cli) -> Result<(String, Network), AppError> {
    let scenario: Box<dyn Scenario> = match (&cli.network, cli.random) {
        (Some(path), _) => Box::new(FileScenario::open(path)?),
        (None, Some(seed)) => Box::new(RandomScenario::new(seed, cli.stations, cli.stations)),
        (None, None) => Box::new(CityScenario),
    };
    let network = scenario.network()?;
    Ok((scenario.title().to_string(), network))
}

fn print_routes(
    network: &Network,
    enumerator: &RouteEnumerator,
    from: StationId,
    to: StationId,
) -> Result<(), AppError> {
    let routes = match enumerator.find_all_routes(network, from, to) {
        Ok(routes) => routes,
        Err(RouteError::RouteLimitExceeded { limit, routes }) => {
            eprintln!("warning: search limited to {}, the list is incomplete", limit);
            routes
        }
        Err(err) => return Err(err.into()),
    };
    println!("{}", describe_routes(network, &routes));
    Ok(())
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    cli.validate()?;
    init_logging(cli.verbose, cli.log_file.as_deref(), !cli.list)?;

    let (title, network) = load_network(&cli)?;
    log::info!("{}: {} stations", title, network.station_count());
    let enumerator = RouteEnumerator::new(cli.limits());

    if let Some((from, to)) = cli.list_query() {
        return print_routes(&network, &enumerator, from, to);
    }

    let mut app = App::new(network, enumerator, title);
    app.select_stations(cli.from_station(), cli.to_station());
    if cli.from.is_some() && cli.to.is_some() {
        app.calculate_routes();
    }
    tui::run(app)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
