//! StockBeacon push worker entry point

use std::process::ExitCode;

use clap::Parser;

use stock_beacon::cli::{
    app::{config_store, run_worker, EXIT_ERROR},
    args::{Cli, Commands, WorkerOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = config_store(cli.config);
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let options = WorkerOptions {
        config_path: cli.config,
        app_name: cli.app_name,
        verbose: cli.verbose,
    };

    run_worker(options).await
}
