use clap::{Parser, Subcommand};
use rm4scc::render::{RenderConfig, layout, to_ascii};
use rm4scc::tools::{normalize, parse_positions, save_png};
use rm4scc::{decode, encode};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rm4tool", version, about = "Royal Mail 4-State barcode tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a bar-state string (A, D, F, T)
    Decode {
        bars: String,
        /// Also write the rendered barcode to this image file
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Encode a postcode and delivery point
    Encode {
        postcode: String,
        delivery_point: String,
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Render a bar-state string as given, highlighting chosen positions
    Render {
        bars: String,
        /// Bar positions to highlight, e.g. "3,7,12"
        #[arg(long)]
        flagged: Option<String>,
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Encode then decode, checking the round trip
    Check {
        postcode: String,
        delivery_point: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Decode { bars, png } => decode_cmd(&bars, png.as_deref()),
        Command::Encode {
            postcode,
            delivery_point,
            png,
        } => encode_cmd(&postcode, &delivery_point, png.as_deref()),
        Command::Render {
            bars,
            flagged,
            png,
        } => render_cmd(&bars, flagged.as_deref(), png.as_deref()),
        Command::Check {
            postcode,
            delivery_point,
        } => check_cmd(&postcode, &delivery_point),
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn show(barcode: &str, flagged: &BTreeSet<usize>, png: Option<&Path>) -> bool {
    print!("{}", to_ascii(&layout(barcode, flagged)));
    let Some(path) = png else {
        return true;
    };
    match save_png(path, barcode, flagged, &RenderConfig::from_env()) {
        Ok(()) => {
            println!("Wrote {}", path.display());
            true
        }
        Err(err) => {
            eprintln!("Failed to write {}: {}", path.display(), err);
            false
        }
    }
}

fn decode_cmd(bars: &str, png: Option<&Path>) -> bool {
    let barcode = normalize(bars);
    let result = decode(&barcode);

    println!("Status: {}", result.message());
    println!("Postcode: {}", result.postcode);
    println!("Delivery point: {}", result.delivery_pt);
    if !result.flagged_positions.is_empty() {
        let positions: Vec<String> = result
            .flagged_positions
            .iter()
            .map(|p| p.to_string())
            .collect();
        println!("Flagged bars: {}", positions.join(", "));
    }
    show(&barcode, &result.flagged_positions, png)
}

fn encode_cmd(postcode: &str, delivery_point: &str, png: Option<&Path>) -> bool {
    let result = encode(&normalize(postcode), &normalize(delivery_point));

    println!("Status: {}", result.message());
    println!("Barcode: {}", result.barcode);
    show(&result.barcode, &BTreeSet::new(), png)
}

fn render_cmd(bars: &str, flagged: Option<&str>, png: Option<&Path>) -> bool {
    let barcode = normalize(bars);
    let flagged = flagged.map(parse_positions).unwrap_or_default();
    show(&barcode, &flagged, png)
}

fn check_cmd(postcode: &str, delivery_point: &str) -> bool {
    let postcode = normalize(postcode);
    let delivery_point = normalize(delivery_point);

    let encoded = encode(&postcode, &delivery_point);
    if !encoded.is_valid() {
        eprintln!("Encode failed: {}", encoded.message());
        return false;
    }

    let decoded = decode(&encoded.barcode);
    let round_trip = decoded.is_valid()
        && decoded.postcode == postcode
        && decoded.delivery_pt == delivery_point;

    println!("Barcode: {}", encoded.barcode);
    println!(
        "Decoded: {} {} ({})",
        decoded.postcode,
        decoded.delivery_pt,
        decoded.message()
    );
    println!("Round trip: {}", if round_trip { "ok" } else { "MISMATCH" });
    round_trip
}
