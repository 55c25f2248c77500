use clap::{Parser, Subcommand};
use tracing::{info, warn};

mod config;
mod domain;
mod error;
mod loader;
mod logging;
mod pipeline;

use crate::config::Config;
use crate::domain::{FilterSpec, Wine, WineFamily};
use crate::loader::{FileSource, HttpSource, WineSource};
use crate::pipeline::{diagnostics, query};

#[derive(Parser)]
#[command(name = "carta_vini")]
#[command(about = "Restaurant wine list inspection tool")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the canonical regions present on the list with wine counts
    Regions,
    /// List wines, optionally filtered by family, region and search text
    List {
        /// Family label, e.g. ROSSO, BIANCO, BOLLICINE
        #[arg(long)]
        family: Option<String>,
        /// Region name (any known spelling)
        #[arg(long)]
        region: Option<String>,
        /// Case-insensitive search over name, region and varietals
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one wine by its list number
    Show {
        #[arg(long)]
        number: String,
    },
    /// Run dataset health checks (duplicate numbers, suspicious regions)
    Check,
}

fn make_source(config: &Config) -> Box<dyn WineSource> {
    if let Some(path) = &config.dataset.path {
        Box::new(FileSource::new(path.clone()))
    } else {
        // Config::load guarantees one of the two is set.
        Box::new(HttpSource::new(config.dataset.url.clone().unwrap_or_default()))
    }
}

fn print_wine_row(wine: &Wine) {
    let number = wine.wine_number.as_deref().unwrap_or("-");
    let year = query::extract_year(wine.vintage.as_deref());
    println!(
        "   #{:<4} {:<12} {:<24} {:<40} {}",
        number,
        wine.family(),
        wine.region,
        wine.name,
        year
    );
}

fn print_wine_detail(wine: &Wine) {
    println!("🍷 {}", wine.name);
    println!("   Producer:  {}", wine.producer);
    println!("   Family:    {}", wine.family());
    println!("   Region:    {}", wine.region);
    println!("   Vintage:   {}", query::extract_year(wine.vintage.as_deref()));
    if let Some(varietals) = &wine.varietals {
        println!("   Varietals: {}", varietals);
    }
    for (label, value) in [
        ("Bottle", &wine.bottle_price),
        ("Glass", &wine.glass_price),
        ("Price", &wine.price),
    ] {
        if let Some(price) = value {
            println!("   {}:    {}", label, price);
        }
    }
    if let Some(description) = &wine.description {
        println!("   {}", description);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    let source = make_source(&config);
    let wines = loader::load_wine_list(source.as_ref()).await;
    if wines.is_empty() {
        warn!("Wine list is empty");
        println!("⚠️  No wines available (load failed or dataset empty)");
    }
    info!("Wine list ready with {} wines", wines.len());

    match cli.command {
        Commands::Regions => {
            println!("📍 Regions:");
            for (region, count) in query::region_counts(&wines) {
                println!("   {:<24} {} wines", region, count);
            }
        }
        Commands::List { family, region, search } => {
            let family = match family {
                Some(label) => match WineFamily::from_label(&label) {
                    Some(f) => Some(f),
                    None => {
                        println!("⚠️  Unknown family: {}", label);
                        return Ok(());
                    }
                },
                None => None,
            };

            let spec = FilterSpec { family, region, search };
            let matches = query::query(&wines, &spec);
            println!("📋 {} wines match:", matches.len());
            for wine in matches {
                print_wine_row(wine);
            }
        }
        Commands::Show { number } => match query::find_by_number(&wines, &number) {
            Some(wine) => print_wine_detail(wine),
            None => println!("⚠️  No wine with number {}", number),
        },
        Commands::Check => {
            let issues = diagnostics::run_health_checks(&wines);
            if issues.is_empty() {
                println!("✅ No issues found across {} wines", wines.len());
            } else {
                println!("⚠️  {} issues found:", issues.len());
                for issue in issues {
                    println!("   [{:?}] {}", issue.severity, issue.description);
                }
            }
        }
    }

    Ok(())
}
