//! Monograph: product literature summaries and cited manual Q&A from the
//! command line.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod cache;
mod corpus;
mod filter;
mod review;
mod state;

use monograph_retrieve::search::DEFAULT_MAX_RESULTS;
use state::{AppState, DataPaths};

fn resolve_data_dir() -> PathBuf {
    std::env::var("MONOGRAPH_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn print_help() {
    println!("Monograph: product summaries and manual Q&A");
    println!();
    println!("Usage: monograph <command>");
    println!();
    println!("Commands:");
    println!("  products [--all]             List products (--all includes newsletters and manuals)");
    println!("  summary <name> [--refresh]   Show the summary for a product");
    println!("  ask <question> [n] [--brief] Answer a question from the manuals (top n pages)");
    println!("  manuals                      List indexed manuals with page counts");
    println!("  review                       Check every product summary for quality problems");
    println!("  help                         Show this help message");
    println!();
    println!("Data is read from $MONOGRAPH_DATA_DIR (default ./data).");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_help();
        std::process::exit(1);
    }

    let state = AppState::new(DataPaths::new(resolve_data_dir()));
    info!("Data directory: {}", state.paths.root.display());

    match args[1].as_str() {
        "products" => {
            let all = args.iter().skip(2).any(|a| a == "--all");
            let products = state.products(all)?;
            for name in &products {
                println!("{name}");
            }
            info!("{} products", products.len());
        }
        "summary" => {
            let refresh = args.iter().skip(2).any(|a| a == "--refresh");
            let name: Vec<&str> = args
                .iter()
                .skip(2)
                .filter(|a| a.as_str() != "--refresh")
                .map(String::as_str)
                .collect();
            if name.is_empty() {
                eprintln!("Usage: monograph summary <name> [--refresh]");
                std::process::exit(1);
            }
            println!("{}", state.summary(&name.join(" "), refresh)?);
        }
        "ask" => {
            let brief = args.iter().skip(2).any(|a| a == "--brief");
            let rest: Vec<&String> = args.iter().skip(2).filter(|a| a.as_str() != "--brief").collect();
            let Some(question) = rest.first() else {
                eprintln!("Usage: monograph ask <question> [n] [--brief]");
                std::process::exit(1);
            };
            let max_results = match rest.get(1) {
                Some(n) => n
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid result count: {}", n))?,
                None => DEFAULT_MAX_RESULTS,
            };
            println!("{}", state.ask(question, max_results, brief)?);
        }
        "manuals" => {
            for line in state.manuals()? {
                println!("{line}");
            }
        }
        "review" => {
            let reviews = state.review()?;
            let clean = reviews.iter().filter(|r| r.is_clean()).count();
            for review in &reviews {
                println!("{review}");
                println!();
            }
            println!("{clean} of {} summaries have no problems.", reviews.len());
        }
        "--help" | "-h" | "help" => print_help(),
        other => {
            eprintln!("Unknown command: {}. Use 'monograph help' for usage.", other);
            std::process::exit(1);
        }
    }

    Ok(())
}
