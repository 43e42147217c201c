//! swatch-time CLI — prints the current Swatch Internet Time.
//!
//! Centibeats by default, Swatch standard with -s, and the raw underlying
//! value with -r.

use clap::Parser;
use swatch_core::{Algorithm, InternetTime, Precision};

#[derive(Parser)]
#[command(name = "swatch-time", version)]
#[command(about = "Prints the current Swatch Internet Time in various .beat formats")]
#[command(after_help = "(no flags defaults to centibeat format @000.00)")]
struct Cli {
    /// Use Swatch standard format @000
    #[arg(short, long, conflicts_with = "raw")]
    standard: bool,

    /// Use raw float format @000.000000
    #[arg(short, long)]
    raw: bool,

    /// Use a more precise calculation algorithm
    #[arg(short, long)]
    precise: bool,

    /// Print date as well
    #[arg(short, long)]
    date: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut now = InternetTime::now();
    if cli.precise {
        now = now.with_algorithm(Algorithm::NanosecondBased);
    }

    let layout = if cli.standard {
        Precision::Whole.token()
    } else if cli.raw {
        Precision::Micro.token()
    } else {
        Precision::Centi.token()
    };

    let stamp = if cli.date {
        now.format(&format!("%Y-%m-%d{layout}"))
    } else {
        now.format(layout)
    };
    println!("{stamp}");
}
