//! Wordchain CLI
//!
//! PRINCE password-candidate generator front end: wordlist in,
//! candidate stream out, shardable with skip/limit.

use anyhow::{Context, Result};
use clap::Parser;
use num_bigint::BigUint;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use wordchain::{Config, Generator, WordStore, CHAIN_ELEMS_MAX, ELEM_LEN_MAX};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "wordchain")]
#[command(about = "High-performance PRINCE candidate generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Wordlist files (standard input when omitted)
    #[arg(value_name = "WORDLIST")]
    wordlists: Vec<PathBuf>,

    /// Print the total number of candidates and exit
    #[arg(long)]
    keyspace: bool,

    /// Minimum candidate length
    #[arg(long, value_name = "NUM", default_value_t = 1)]
    pw_min: usize,

    /// Maximum candidate length
    #[arg(long, value_name = "NUM", default_value_t = ELEM_LEN_MAX)]
    pw_max: usize,

    /// Minimum number of elements per chain
    #[arg(long, value_name = "NUM", default_value_t = 1)]
    elem_cnt_min: usize,

    /// Maximum number of elements per chain
    #[arg(long, value_name = "NUM", default_value_t = CHAIN_ELEMS_MAX)]
    elem_cnt_max: usize,

    /// Weigh output lengths by wordlist counts instead of the built-in
    /// distribution
    #[arg(long)]
    wl_dist_len: bool,

    /// Skip the first NUM candidates (for distributed runs)
    #[arg(short, long, value_name = "NUM")]
    skip: Option<BigUint>,

    /// Emit at most NUM candidates (for distributed runs)
    #[arg(short, long, value_name = "NUM")]
    limit: Option<BigUint>,

    /// Append candidates to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output_file: Option<PathBuf>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        pw_min: cli.pw_min,
        pw_max: cli.pw_max,
        elem_cnt_min: cli.elem_cnt_min,
        elem_cnt_max: cli.elem_cnt_max,
        wl_dist_len: cli.wl_dist_len,
        skip: cli.skip.unwrap_or_default(),
        limit: cli.limit,
    };

    // Reject bad ranges before touching the wordlist.
    config.validate()?;

    let mut store = WordStore::new();
    if cli.wordlists.is_empty() {
        store
            .load(io::stdin().lock())
            .context("Failed to read wordlist from stdin")?;
    } else {
        for path in &cli.wordlists {
            let file = File::open(path)
                .with_context(|| format!("Failed to open: {}", path.display()))?;
            store
                .load(BufReader::new(file))
                .with_context(|| format!("Failed to read: {}", path.display()))?;
        }
    }

    let generator = Generator::new(store, config)?;

    if cli.keyspace {
        println!("{}", generator.keyspace());
        return Ok(());
    }

    match &cli.output_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open: {}", path.display()))?;
            let mut out = BufWriter::with_capacity(64 * 1024, file);
            generator.run(&mut out)?;
        }
        None => {
            let mut out = BufWriter::with_capacity(64 * 1024, io::stdout().lock());
            generator.run(&mut out)?;
        }
    }

    Ok(())
}
