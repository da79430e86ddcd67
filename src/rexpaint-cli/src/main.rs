mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Info { input, format } => {
            let format = Config::load()?.resolve_format(format.map(Into::into));
            commands::inspect::info(&input, format)?;
        }

        Commands::Text {
            input,
            layer,
            format,
        } => {
            let format = Config::load()?.resolve_format(format.map(Into::into));
            commands::inspect::text(&input, layer, format)?;
        }

        Commands::Dump {
            input,
            json,
            output,
            format,
        } => {
            let format = Config::load()?.resolve_format(format.map(Into::into));
            commands::dump::handle(&input, json, output.as_deref(), format)?;
        }

        Commands::Configure { format, show } => {
            commands::configure::handle(format.map(Into::into), show)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "rexpaint=debug" } else { "rexpaint=warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
