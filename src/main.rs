use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use inspirex::config::{Config, ConfigError};
use inspirex::logging;
use inspirex::quote::{AcquireEvent, Acquirer, FallbackCatalog, HttpQuoteSource};
use inspirex::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "inspirex", version, about = "Random inspirational quotes in your terminal")]
struct Cli {
    /// Config file to use instead of ~/.config/inspirex/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the quote endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Show a local quote right after the first failed attempt
    #[arg(long)]
    no_retry: bool,

    /// Print one quote to stdout and exit
    #[arg(long)]
    print: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.print {
        logging::init_stderr_tracing();
    } else {
        logging::init_tracing();
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let retry = !cli.no_retry;
    let result = if cli.print {
        print_quote(&config, retry)
    } else {
        runtime::run(config, retry)
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.url = endpoint.clone();
        config.validate()?;
    }

    Ok(config)
}

/// One acquisition without a terminal UI. A fallback quote is still success.
fn print_quote(config: &Config, retry: bool) -> anyhow::Result<()> {
    let source = HttpQuoteSource::new(config.endpoint.url.clone(), config.endpoint.timeout())
        .context("Failed to build HTTP client")?;
    let mut acquirer = Acquirer::new(source, FallbackCatalog::builtin(), config.retry.policy());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let mut advisory = None;
    let outcome = runtime.block_on(acquirer.run(retry, |event| {
        if let AcquireEvent::FellBack { advisory: text, .. } = event {
            advisory = Some(text);
        }
    }));

    let quote = outcome.quote();
    println!("“{}”", quote.text());
    println!("— {}", quote.author());

    if let Some(advisory) = advisory {
        eprintln!("{}", advisory);
    }

    Ok(())
}
