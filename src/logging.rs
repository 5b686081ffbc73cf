use std::fs::File;
use std::io;
use std::path::Path;

/// Sets up `env_logger`. `RUST_LOG` wins over the defaults picked here.
///
/// The map view owns the terminal, so it only logs when a file is given.
pub fn init_logging(verbose: bool, log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let default_level = match (verbose, interactive, log_file) {
        (_, true, None) => "off",
        (true, _, _) => "debug",
        (false, _, _) => "info",
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    builder.format_timestamp(None);

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
