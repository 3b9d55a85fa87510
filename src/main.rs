use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use serde::Serialize;
use std::path::PathBuf;
use swapi_client::config::config::{Config, DisplayConfig};
use swapi_client::{Film, Person, Resource, SwapiClient};
use tracing::debug;

mod table_display;

use table_display::{display_record, display_results, Tabular};

#[derive(Parser)]
#[command(name = "swapi", version, about = "Browse people and films from the Star Wars API")]
struct Cli {
    /// SWAPI root URL (overrides config and SWAPI_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log requests and page turns to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Characters
    People {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Films
    Films {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Inspect or generate the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ResourceAction {
    /// Fetch one record by id
    Get {
        id: u32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Page through every record
    List {
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a commented default config file
    Generate {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    swapi_client::logging::init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) if path.exists() => Config::load_from(path)?,
        Some(_) => Config::default(),
        None => Config::load()?,
    };
    config.apply_env_overrides();
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    debug!("Using SWAPI at {}", config.api.base_url);

    match cli.command {
        Command::Config { action } => run_config(action, &config, cli.config),
        Command::People { action } => {
            let client = SwapiClient::from_config(&config.api)?;
            run_resource::<Person>(&client, action, &config.display)
        }
        Command::Films { action } => {
            let client = SwapiClient::from_config(&config.api)?;
            run_resource::<Film>(&client, action, &config.display)
        }
    }
}

fn run_resource<R>(client: &SwapiClient, action: ResourceAction, display: &DisplayConfig) -> Result<()>
where
    R: Resource + Tabular + Serialize,
{
    match action {
        ResourceAction::Get { id, json } => {
            let record = R::get(client, id)
                .with_context(|| format!("Failed to fetch {} {}", R::RESOURCE_NAME, id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                display_record(&record);
            }
        }
        ResourceAction::List { limit, json } => {
            let limit = limit.or((display.max_rows > 0).then_some(display.max_rows));
            let mut query_set = R::all(client)
                .with_context(|| format!("Failed to list {}", R::RESOURCE_NAME))?;

            let mut records = Vec::new();
            while limit.map_or(true, |max| records.len() < max) {
                match query_set.next_record()? {
                    Some(record) => {
                        debug!("{}: {}", query_set, record.label());
                        records.push(record);
                    }
                    None => break,
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                display_results(&records, query_set.total_count(), display.use_color);
            }
        }
    }
    Ok(())
}

fn run_config(action: ConfigAction, config: &Config, path: Option<PathBuf>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigAction::Generate { force } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_config_path()?,
            };
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Error creating config directory {}", parent.display()))?;
            }
            std::fs::write(&path, Config::create_default_with_comments())
                .with_context(|| format!("Error writing config file {}", path.display()))?;
            println!("Configuration file created at: {}", path.display());
        }
    }
    Ok(())
}
