// Idiomatic Rust CLI for Slimline.
//
// Two subcommands: `encode` turns lat,lng lines into a polyline string,
// `decode` turns a polyline string back into lat,lng lines. Input and
// output default to stdin/stdout; `--json` emits an encode summary on
// stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::geo::LatLng;
use crate::policy::{self, EncodeSummary, SimplificationPolicy};

/// Reference default length budget for automatic simplification.
const DEFAULT_MAX_LENGTH: usize = 2048;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Encoded-polyline codec with adaptive simplification.
#[derive(Parser, Debug)]
#[command(
    name = "slimline",
    version,
    about = "Polyline encoder/decoder with Douglas-Peucker simplification",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (log simplification search steps).
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Output an encode summary as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode lat,lng lines into a polyline string.
    Encode(EncodeArgs),
    /// Decode a polyline string into lat,lng lines.
    Decode(IoArgs),
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file (default: stdin).
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Fixed simplification tolerance in plane units (1 = none).
    #[arg(long, short = 't', conflicts_with_all = ["max_length", "raw"])]
    tolerance: Option<f64>,

    /// Target maximum output length in characters.
    #[arg(long = "max-length", short = 'm', conflicts_with = "raw")]
    max_length: Option<usize>,

    /// Encode without any simplification.
    #[arg(long)]
    raw: bool,
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> io::Result<()> {
    match path {
        Some(p) => fs::write(p, content),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()
        }
    }
}

/// Parse `lat,lng` lines. Blank lines and `#` comments are skipped.
fn parse_points(input: &str) -> Result<Vec<LatLng>, String> {
    let mut points = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (lat, lng) = line
            .split_once(',')
            .ok_or_else(|| format!("line {}: expected 'lat,lng', got '{line}'", lineno + 1))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|e| format!("line {}: bad latitude: {e}", lineno + 1))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|e| format!("line {}: bad longitude: {e}", lineno + 1))?;
        points.push(LatLng::new(lat, lng));
    }
    Ok(points)
}

fn format_points(points: &[LatLng]) -> String {
    let mut out = String::new();
    for p in points {
        // Five decimals: the codec's full precision, stable to re-encode.
        out.push_str(&format!("{:.5},{:.5}\n", p.lat, p.lng));
    }
    out
}

fn emit_summary(summary: &EncodeSummary) {
    let stats = serde_json::json!({
        "input_points": summary.input_points,
        "kept_points": summary.kept_points,
        "tolerance": summary.tolerance,
        "length": summary.polyline.len(),
    });
    eprintln!("{stats}");
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

fn run_encode(args: &EncodeArgs, json_output: bool, quiet: bool) -> Result<(), String> {
    let input = read_input(args.io.input.as_ref()).map_err(|e| format!("read input: {e}"))?;
    let points = parse_points(&input)?;

    let policy = if args.raw {
        SimplificationPolicy::None
    } else if let Some(tolerance) = args.tolerance {
        SimplificationPolicy::FixedTolerance(tolerance)
    } else {
        SimplificationPolicy::Automatic {
            max_length: args.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
        }
    };

    let summary = policy::encode_summary(&points, &policy).map_err(|e| e.to_string())?;

    if json_output {
        emit_summary(&summary);
    } else if !quiet && summary.kept_points < summary.input_points {
        eprintln!(
            "simplified {} -> {} points (tolerance {})",
            summary.input_points,
            summary.kept_points,
            summary.tolerance.unwrap_or(policy::NOOP_TOLERANCE)
        );
    }

    let mut out = summary.polyline;
    out.push('\n');
    write_output(args.io.output.as_ref(), &out).map_err(|e| format!("write output: {e}"))
}

fn run_decode(args: &IoArgs, quiet: bool) -> Result<(), String> {
    let input = read_input(args.input.as_ref()).map_err(|e| format!("read input: {e}"))?;
    let polyline = input.trim();

    let points = crate::codec::decoder::decode(polyline).map_err(|e| e.to_string())?;
    if !quiet && points.is_empty() {
        eprintln!("empty polyline");
    }

    write_output(args.output.as_ref(), &format_points(&points))
        .map_err(|e| format!("write output: {e}"))
}

/// CLI entry point. Parses arguments, configures logging, dispatches.
pub fn run() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    } else if cli.quiet {
        logger.filter_level(log::LevelFilter::Error);
    }
    let _ = logger.try_init();

    let result = match &cli.command {
        Cmd::Encode(args) => run_encode(args, cli.json_output, cli.quiet),
        Cmd::Decode(args) => run_decode(args, cli.quiet),
    };

    if let Err(msg) = result {
        eprintln!("slimline: {msg}");
        process::exit(1);
    }
}
