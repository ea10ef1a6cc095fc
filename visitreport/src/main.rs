//! visitreport: frequency distributions of monthly visitor counts per region

mod config;
mod logging;
mod render;
mod simulate;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use freqdist::Report;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ringlog::{debug, info, Drain, Level};
use sheetload::{Loader, Table};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "visitreport")]
#[command(about = "Frequency distributions and random-number intervals for visitor counts")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dataset file (.xlsx, .xls, .ods or .csv)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Sheet holding the dataset
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<Level>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the raw dataset
    Table,

    /// List the regions a distribution can be computed for
    Regions,

    /// Show the frequency distribution of one region
    Frequency {
        /// Region column, omit to list the choices
        region: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw random numbers and map them onto a region's distribution
    Simulate {
        /// Region column
        region: String,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "12")]
        draws: usize,

        /// Seed for repeatable draws
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref().map(Config::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    config.override_with(cli.input.clone(), cli.sheet.clone(), cli.log_level);

    let mut log = match logging::start(&config) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, &config);

    if let Err(e) = log.flush() {
        eprintln!("error: failed to flush log: {e}");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    let dataset = config.dataset();
    let loader = Loader::new();

    debug!(
        "loading sheet {} from {}",
        dataset.sheet(),
        dataset.path().display()
    );
    let table = loader.load_or_empty(dataset.path(), dataset.sheet());

    match command {
        Commands::Table => {
            if table.is_empty() {
                println!("No data to display.");
            } else {
                println!("{}", render::dataset(&table));
            }
            Ok(())
        }
        Commands::Regions => {
            if table.is_empty() {
                println!("No data available.");
                return Ok(());
            }
            for region in table.columns_except(dataset.exclude()) {
                println!("{region}");
            }
            Ok(())
        }
        Commands::Frequency { region, json } => {
            if table.is_empty() {
                println!("No data available.");
                return Ok(());
            }

            let Some(region) = region else {
                println!("Choose a region to show its frequency distribution:");
                for region in table.columns_except(dataset.exclude()) {
                    println!("  {region}");
                }
                return Ok(());
            };

            let (region, report) = distribution(&table, config, &region)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Frequency distribution: {}", render::capitalize(&region));
                println!("{}", render::frequency(&report));
                println!();
                println!("{}", render::summary(report.stats()));
            }
            Ok(())
        }
        Commands::Simulate {
            region,
            draws,
            seed,
        } => {
            if table.is_empty() {
                println!("No data available.");
                return Ok(());
            }

            let (region, report) = distribution(&table, config, &region)?;

            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };

            let draws = simulate::draws(&report, &mut rng, draws);
            let counts = simulate::tally(&report, &draws);
            info!("simulated {} draws for {}", draws.len(), region);

            println!("Simulation: {}", render::capitalize(&region));
            println!("{}", render::draws(&draws));
            println!();
            println!("{}", render::tally(&report, &counts));
            Ok(())
        }
    }
}

/// Finds the region column and builds its frequency report.
fn distribution(table: &Table, config: &Config, region: &str) -> Result<(String, Report)> {
    let regions = table.columns_except(config.dataset().exclude());
    let key = sheetload::normalize(region);

    if !regions.contains(&key.as_str()) {
        bail!(
            "unknown region: {region} (choose one of: {})",
            regions.join(", ")
        );
    }

    let values = table.numeric_column(&key).unwrap_or_default();
    let report = freqdist::distribute(&values)
        .with_context(|| format!("cannot build a distribution for {key}"))?;

    info!(
        "{}: {} observations in {} rows",
        key,
        report.stats().n(),
        report.rows().len()
    );

    Ok((key, report))
}
