use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use storage_search_core::catalog::DEFAULT_CATALOG_PATH;
use storage_search_core::contract::{normalize_requests, VehicleRequestPayload};
use storage_search_core::model::vehicle_count;
use storage_search_core::{search_listings, JsonFileCatalog, SearchConfig};
use storage_search_lambda::telemetry::init_tracing;

#[derive(Parser)]
#[command(
    name = "listing_search",
    about = "Find the cheapest storage listings for a set of vehicles",
    long_about = "Reads a JSON array of {length, quantity} vehicle requests and prints,\n\
                  for every location that can house all vehicles, the cheapest listings\n\
                  and their total price, cheapest location first."
)]
struct Cli {
    /// Listing catalog (JSON array of listings)
    #[arg(long, env = "LISTINGS_PATH", default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
    /// Vehicle request file; reads stdin when omitted
    #[arg(long)]
    request: Option<PathBuf>,
    /// Enumerate every branch without bounding
    #[arg(long)]
    exhaustive: bool,
    /// Solve locations one after another
    #[arg(long)]
    sequential: bool,
    /// Size of a dedicated worker pool
    #[arg(long)]
    threads: Option<usize>,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        let mut config = if self.exhaustive {
            SearchConfig::exhaustive().with_parallel(true)
        } else {
            SearchConfig::default()
        };
        if self.sequential {
            config = config.with_parallel(false);
        }
        if let Some(threads) = self.threads {
            config = config.with_num_threads(threads);
        }
        config
    }

    fn read_request(&self) -> Result<String, Box<dyn std::error::Error>> {
        match &self.request {
            Some(path) => Ok(fs::read_to_string(path)
                .map_err(|error| format!("failed to read {}: {error}", path.display()))?),
            None => {
                let mut raw = String::new();
                std::io::stdin().read_to_string(&mut raw)?;
                Ok(raw)
            }
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let raw = cli.read_request()?;
    let payload: Vec<VehicleRequestPayload> =
        serde_json::from_str(&raw).map_err(|error| format!("Malformed request: {error}"))?;
    let requests = normalize_requests(payload)?;

    let catalog = JsonFileCatalog::new(&cli.catalog);
    tracing::info!(
        catalog = %catalog.path().display(),
        vehicles = ?vehicle_count(&requests),
        "searching catalog"
    );
    let results = search_listings(&requests, &catalog, &cli.search_config())
        .map_err(|error| format!("Failed to load listings: {error}"))?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing(false);
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "listing search failed");
            ExitCode::FAILURE
        }
    }
}
