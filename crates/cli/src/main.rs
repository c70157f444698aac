use anyhow::{Context, Result};
use catalog::{BudgetCategory, Catalog, CatalogSource};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{FilterCriteria, RecommendationEngine};
use rand::Rng;
use rayon::prelude::*;
use server::ServerConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod display;

/// UmrahRecs - curated pilgrimage hotel recommendations
#[derive(Parser)]
#[command(name = "umrah-recs")]
#[command(about = "Filter curated Umrah hotel offers by city, budget and halal certification", long_about = None)]
struct Cli {
    /// JSON catalog file or directory (built-in catalog when omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get hotel recommendations for a city
    Recommend {
        /// Destination city (case-insensitive)
        #[arg(long)]
        city: String,

        /// Budget tier: Budget, Mid-Range, Premium, Luxury, Ultra-Luxury
        #[arg(long)]
        budget: Option<BudgetCategory>,

        /// Only show halal-certified hotels
        #[arg(long)]
        halal: bool,
    },

    /// Show the first offers of the catalog without filtering
    Catalog {
        /// Number of offers to show
        #[arg(long, default_value = "3")]
        limit: usize,
    },

    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = server::config::DEFAULT_BIND_ADDR)]
        bind: SocketAddr,
    },

    /// Run benchmark to test selection performance
    Benchmark {
        /// Number of selections to evaluate
        #[arg(long, default_value = "10000")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        catalog_path: cli.catalog.clone(),
        ..ServerConfig::default()
    };
    let catalog = Arc::new(server::load_catalog(&config)?);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { city, budget, halal } => handle_recommend(&catalog, city, budget, halal)?,
        Commands::Catalog { limit } => handle_catalog(&catalog, limit),
        Commands::Serve { bind } => {
            let config = ServerConfig {
                bind_addr: bind,
                ..config
            };
            server::serve(config, catalog).await?
        }
        Commands::Benchmark { requests } => handle_benchmark(&catalog, requests)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &Catalog,
    city: String,
    budget: Option<BudgetCategory>,
    halal: bool,
) -> Result<()> {
    let mut criteria = FilterCriteria::new(city).with_halal(halal);
    if let Some(budget) = budget {
        criteria = criteria.with_budget(budget);
    }

    let offers = RecommendationEngine::new()
        .select(catalog, &criteria)
        .context("Failed to select offers")?;

    let tier = budget.map(|b| b.to_string()).unwrap_or_else(|| "any budget".to_string());
    println!(
        "{}",
        format!("Hotels in {} ({}{}):", criteria.city, tier, if halal { ", halal only" } else { "" })
            .bold()
            .blue()
    );
    if offers.is_empty() {
        println!("No matching hotels.");
    }
    for (i, offer) in offers.iter().enumerate() {
        display::print_offer(i + 1, offer);
    }
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(catalog: &Catalog, limit: usize) {
    println!(
        "{}",
        format!(
            "Catalog: {} offers in {}",
            catalog.len(),
            catalog.cities().join(", ")
        )
        .bold()
        .blue()
    );
    for (i, offer) in catalog.preview(limit).iter().enumerate() {
        display::print_offer(i + 1, offer);
    }
}

/// Handle the 'benchmark' command.
///
/// Random criteria are evaluated in parallel on the Rayon pool against the
/// shared catalog; no coordination is needed since selection is pure.
fn handle_benchmark(catalog: &Catalog, requests: usize) -> Result<()> {
    let mut cities: Vec<String> = catalog.cities().iter().map(|c| c.to_lowercase()).collect();
    cities.push("nowhere".to_string());

    let mut rng = rand::rng();
    let criteria: Vec<FilterCriteria> = (0..requests)
        .map(|_| {
            let city = cities[rng.random_range(0..cities.len())].clone();
            let mut criteria = FilterCriteria::new(city).with_halal(rng.random_bool(0.5));
            if rng.random_bool(0.8) {
                let tier = BudgetCategory::ALL[rng.random_range(0..BudgetCategory::ALL.len())];
                criteria = criteria.with_budget(tier);
            }
            criteria
        })
        .collect();

    let recommender = RecommendationEngine::new();
    let start = Instant::now();
    let mut timings: Vec<Duration> = criteria
        .par_iter()
        .map(|criteria| {
            let start = Instant::now();
            recommender.select(catalog, criteria)?;
            Ok::<_, engine::EngineError>(start.elapsed())
        })
        .collect::<std::result::Result<_, _>>()?;
    let total_time = start.elapsed();

    if timings.is_empty() {
        println!("No requests to run.");
        return Ok(());
    }

    timings.sort();
    let sum: Duration = timings.iter().sum();
    let avg_latency = sum / (timings.len() as u32);
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} selections/second", throughput);

    Ok(())
}
