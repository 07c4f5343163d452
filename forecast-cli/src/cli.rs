use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Config, ForecastList, HttpForecastSource};
use inquire::{Confirm, Text};
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Weather forecast list")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the forecast and print it.
    Show {
        /// Forecast endpoint; overrides the configured one.
        #[arg(long)]
        endpoint: Option<String>,

        /// Trust self-signed certificates for this run.
        #[arg(long)]
        insecure: bool,
    },

    /// Interactively set the endpoint and certificate policy.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { endpoint, insecure } => {
                let mut cfg = Config::load()?;
                if let Some(endpoint) = endpoint {
                    cfg.set_endpoint(&endpoint)?;
                }
                cfg.accept_invalid_certs |= insecure;

                show(&cfg).await?;
            }
            Command::Configure => configure()?,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

async fn show(cfg: &Config) -> anyhow::Result<()> {
    let source = HttpForecastSource::from_config(cfg)?;
    info!(endpoint = source.endpoint(), "Loading forecast");

    let mut list = ForecastList::mount(source);
    println!("{}", list.render());

    list.settled().await;
    println!("{}", list.render());

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let endpoint = Text::new("Forecast endpoint:")
        .with_default(cfg.endpoint())
        .prompt()
        .context("Failed to read endpoint")?;
    cfg.set_endpoint(&endpoint)?;

    cfg.accept_invalid_certs = Confirm::new("Trust self-signed certificates?")
        .with_default(cfg.accept_invalid_certs)
        .with_help_message("Needed for a local development backend over https")
        .prompt()
        .context("Failed to read certificate policy")?;

    cfg.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
