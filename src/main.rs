//! couponstore-config CLI entry point.

use clap::Parser;

use couponstore_config::cli::{commands, handle_error, Cli, Commands};
use couponstore_config::infrastructure::logging::{LogConfig, Logger};

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
        ..LogConfig::default()
    };
    let _logger = match Logger::init(&log_config) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args, cli.json),
        Commands::List(args) => commands::list::execute(args, cli.json),
        Commands::Init(args) => commands::init::execute(args, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
