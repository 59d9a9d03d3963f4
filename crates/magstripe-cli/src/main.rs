use std::io::{self, BufRead};

use clap::Parser;
use magstripe::brand;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod formatters;
use formatters::FormatMode;

#[derive(Parser)]
#[command(name = "magstripe-cli")]
#[command(about = "Magstripe Reader - Parse ISO 7813 track data from a swipe reader")]
#[command(version)]
struct Args {
    /// Account number output mode
    #[arg(short, long, value_enum, default_value_t = FormatMode::Masked)]
    format: FormatMode,
}

fn main() {
    // Initialize tracing subscriber with environment-based filtering
    // Set RUST_LOG=debug for detailed logs
    // Default: info level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let format_mode = args.format;

    println!("Magstripe Reader - {} Mode\n", format_mode.description());
    println!("Swipe a card (one swipe per line), Ctrl-D to exit.\n");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                return;
            }
        };

        let swipe = line.trim();
        if swipe.is_empty() {
            continue;
        }

        match magstripe::parse(swipe) {
            Ok(card) => {
                let brand_name = brand(&card.account).map_or("Unknown", |b| b.name());
                println!(
                    "Account: {} ({})",
                    formatters::format_account(&card.account, &format_mode),
                    brand_name
                );
                println!("Name:    {}", card.name);
                println!("Expires: {}/{}", card.expiry_month, card.expiry_year);
                println!();
            }
            Err(err) => {
                warn!("swipe rejected: {}", err);
                println!("Bad read ({}), please swipe again\n", err);
            }
        }
    }
}
