//! ClipBridge CLI entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use clip_bridge::application::TagRepository;
use clip_bridge::cli::{
    app::{cli_config, load_merged_config, resolve_options, run_bridge, storage_path, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{verbosity_level, Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    tags_cmd::handle_tags_command,
};
use clip_bridge::infrastructure::{JsonFileStore, XdgConfigStore};

/// Grace period for blocking tasks at exit. A pending stdin read never
/// finishes on its own.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            Presenter::new().error(&format!("Failed to start async runtime: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let code = runtime.block_on(run());
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    code
}

async fn run() -> ExitCode {
    let mut cli = Cli::parse();
    let presenter = Presenter::new();
    let command = cli.command.take();

    // Config commands must work even when the config file holds bad values
    if let Some(Commands::Config { action }) = command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Merge config: defaults < file < env < cli
    let config = load_merged_config(cli_config(&cli)).await;
    init_logging(verbosity_level(cli.verbose), config.log_level_or_default());

    let options = match resolve_options(&config, cli.ephemeral) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    match command {
        Some(Commands::Tags { action }) => {
            let path = storage_path(&options);
            let repo = TagRepository::new(JsonFileStore::with_path(&path), options.storage_key.clone());
            if let Err(e) = handle_tags_command(action, &repo, &path, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        _ => run_bridge(options).await,
    }
}
