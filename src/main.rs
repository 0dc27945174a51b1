use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_indexed::{IndexedList, SparseIndexedList};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sparse-demo", about = "Exercise a sparse indexed list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply random writes to a large list and report how sparse it stays.
    Random {
        /// Number of positions in the list.
        #[arg(long, default_value_t = 10_000)]
        length: i64,
        /// Value held by every position that was never written.
        #[arg(long, default_value_t = 10)]
        default: i32,
        /// Number of random writes to perform.
        #[arg(long, default_value_t = 100)]
        writes: usize,
        /// Positions are drawn uniformly from [0, span), clamped to the length.
        #[arg(long, default_value_t = 10)]
        span: i64,
        /// Smallest value written.
        #[arg(long, default_value_t = 6)]
        min: i32,
        /// Largest value written.
        #[arg(long, default_value_t = 10)]
        max: i32,
        /// Seed for reproducible runs (random when omitted).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply `position=value` writes to a small list and print every position.
    Show {
        /// Number of positions in the list.
        #[arg(long, default_value_t = 10)]
        length: i64,
        /// Value held by every position that was never written.
        #[arg(long, default_value_t = 0)]
        default: i32,
        /// Writes to apply, in order (e.g. `3=9`).
        #[arg(value_parser = parse_assignment)]
        assignments: Vec<(i64, i32)>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Random {
            length,
            default,
            writes,
            span,
            min,
            max,
            seed,
        } => run_random(length, default, writes, span, min..=max, seed)?,
        Commands::Show {
            length,
            default,
            assignments,
        } => run_show(length, default, &assignments)?,
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_random(
    length: i64,
    default: i32,
    writes: usize,
    span: i64,
    values: std::ops::RangeInclusive<i32>,
    seed: Option<u64>,
) -> Result<()> {
    if values.is_empty() {
        bail!("value range {}..={} is empty", values.start(), values.end());
    }

    let mut list = SparseIndexedList::new(length, default).context("failed to create list")?;
    let span = span.clamp(1, list.length() as i64);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(length, default, writes, span, "starting random writes");
    for _ in 0..writes {
        let position = rng.random_range(0..span);
        let value = rng.random_range(values.clone());
        list.put(position, value)
            .with_context(|| format!("write of {value} at {position} failed"))?;
    }

    println!(
        "length={}\tdefault={}\twrites={}\tpopulated={}\tdensity={:.6}",
        list.length(),
        list.default_value(),
        writes,
        list.populated(),
        list.density()
    );
    for (position, value) in list.entries() {
        println!("{position}\t{value}");
    }

    Ok(())
}

fn run_show(length: i64, default: i32, assignments: &[(i64, i32)]) -> Result<()> {
    let mut list = SparseIndexedList::new(length, default).context("failed to create list")?;

    for &(position, value) in assignments {
        list.put(position, value)
            .with_context(|| format!("cannot write {value} at position {position}"))?;
    }

    let rendered: Vec<String> = list.iter().map(ToString::to_string).collect();
    println!("[{}]", rendered.join(", "));
    println!("populated={}", list.populated());

    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(i64, i32), String> {
    let (position, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `position=value`, got '{raw}'"))?;
    let position = position
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid position '{position}': {e}"))?;
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid value '{value}': {e}"))?;
    Ok((position, value))
}
