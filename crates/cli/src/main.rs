#![deny(unsafe_code)]
//! CLI binary for huekit.
//!
//! Subcommands:
//! - `convert <color>...`: print the hex and rgba forms
//! - `gray <color>`: luma grayscale
//! - `contrast <color>`: complementary color
//! - `palette <color>`: harmony scheme (triadic by default)
//! - `random`: random colors, reproducible with `--seed`
//!
//! Colors are accepted as `#rrggbb`, `#rrggbbaa`, `rgb(...)` or `rgba(...)`.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use huekit_core::palette::{DEFAULT_ANALOGOUS_COUNT, DEFAULT_ANALOGOUS_SPREAD};
use huekit_core::{Color, Palette, Scheme, Xorshift64};
use rand::Rng;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "huekit", about = "Color conversion and harmony CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print colors in hex and rgba form.
    Convert {
        /// Input colors.
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Convert a color to luma grayscale.
    Gray {
        /// Input color.
        color: String,
    },
    /// Rotate a color's hue by 180 degrees.
    Contrast {
        /// Input color.
        color: String,
    },
    /// Build a harmony palette around a color.
    Palette {
        /// Base color.
        color: String,

        /// Scheme name (complementary, triadic, split-complementary, analogous).
        #[arg(short, long, default_value = "triadic")]
        scheme: String,

        /// Hue spread in degrees (analogous only).
        #[arg(long)]
        spread: Option<f64>,

        /// Number of colors (analogous only).
        #[arg(long)]
        count: Option<usize>,
    },
    /// Generate random colors.
    Random {
        /// Fixed alpha in [0, 1]; random with three decimals when omitted.
        #[arg(short, long)]
        alpha: Option<f64>,

        /// PRNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// Number of colors (1 to 65535).
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        count: u16,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn draw<R: Rng>(rng: &mut R, alpha: Option<f64>, count: usize) -> Result<Vec<Color>, CliError> {
    (0..count)
        .map(|_| Color::random_with(rng, alpha).map_err(CliError::from))
        .collect()
}

fn build_palette(
    color: &str,
    scheme: &str,
    spread: Option<f64>,
    count: Option<usize>,
) -> Result<Palette, CliError> {
    let base: Color = color.parse()?;
    let scheme: Scheme = scheme.parse()?;
    if scheme != Scheme::Analogous && (spread.is_some() || count.is_some()) {
        return Err(CliError::Input(format!(
            "--spread and --count only apply to the analogous scheme, not {scheme}"
        )));
    }
    if scheme == Scheme::Analogous {
        let count = count.unwrap_or(DEFAULT_ANALOGOUS_COUNT);
        if count == 0 {
            return Err(CliError::Input("--count must be at least 1".into()));
        }
        let spread = spread.unwrap_or(DEFAULT_ANALOGOUS_SPREAD);
        return Palette::analogous(base, spread, count).map_err(CliError::from);
    }
    Ok(Palette::from_scheme(base, scheme))
}

fn derive(command: Command) -> Result<Vec<Color>, CliError> {
    let colors = match command {
        Command::Convert { colors } => {
            let inputs: Vec<&str> = colors.iter().map(String::as_str).collect();
            Palette::from_strs(&inputs)?.colors().to_vec()
        }
        Command::Gray { color } => vec![color.parse::<Color>()?.to_grayscale()],
        Command::Contrast { color } => vec![color.parse::<Color>()?.contrast_color()],
        Command::Palette {
            color,
            scheme,
            spread,
            count,
        } => build_palette(&color, &scheme, spread, count)?
            .colors()
            .to_vec(),
        Command::Random { alpha, seed, count } => {
            let count = usize::from(count);
            match seed {
                Some(seed) => draw(&mut Xorshift64::new(seed), alpha, count)?,
                None => draw(&mut rand::thread_rng(), alpha, count)?,
            }
        }
    };
    tracing::debug!(count = colors.len(), "derived colors");
    Ok(colors)
}

fn render(colors: &[Color], json: bool) -> Result<String, CliError> {
    if json {
        let entries: Vec<serde_json::Value> = colors
            .iter()
            .map(|c| serde_json::json!({"hex": c, "rgba": c.to_rgba()}))
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    } else {
        Ok(colors
            .iter()
            .map(|c| format!("{:<9}  {}", c.to_hex(), c.to_rgba()))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let colors = derive(cli.command)?;
    println!("{}", render(&colors, cli.json)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
