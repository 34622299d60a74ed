use clap::Parser;

use metadex::cli::commands::{init, update};
use metadex::cli::{Cli, Commands};
use metadex::config::Settings;
use metadex::logging;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        // Init runs before any settings exist, so nothing is loaded for it.
        Some(Commands::Init { force }) => init::run_init(force),

        Some(Commands::Config) => {
            let settings = load_settings(&cli);
            init::run_config(&settings);
        }

        None => {
            let settings = load_settings(&cli);
            logging::init_with_config(&settings.logging);
            update::run(&settings, cli.watch);
        }
    }
}

fn load_settings(cli: &Cli) -> Settings {
    let result = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    match result {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    }
}
