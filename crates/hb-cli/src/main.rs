//! HistBlock CLI
//!
//! Operator tooling for persisted blacklist entry files (JSON arrays of
//! `{value, isRegex}` objects).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use hb_compiler::{compile, parse_input, validate_entry, Blacklist};
use hb_core::types::{BlacklistEntry, ParseOutcome};

mod bench;

#[derive(Parser)]
#[command(name = "hb-cli")]
#[command(about = "HistBlock blacklist compiler and tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify URLs against an entry file
    Check {
        /// Entry file to compile
        #[arg(short, long)]
        entries: String,

        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Validate an entry file, reporting entries the compiler would drop
    Lint {
        /// Entry file to validate
        #[arg(short, long)]
        entries: String,
    },

    /// Parse one raw pattern and append it to an entry file
    Add {
        /// Entry file to update (created if missing)
        #[arg(short, long)]
        entries: String,

        /// Raw pattern as the user would type it
        pattern: String,
    },

    /// Measure compile and classification throughput
    Bench {
        /// Entry file to compile
        #[arg(short, long)]
        entries: String,

        /// URL corpus file, one URL per line
        #[arg(short, long)]
        urls: String,

        /// Classification passes over the corpus
        #[arg(short, long, default_value_t = 100)]
        iterations: usize,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { entries, urls } => cmd_check(&entries, &urls),
        Commands::Lint { entries } => cmd_lint(&entries),
        Commands::Add { entries, pattern } => cmd_add(&entries, &pattern),
        Commands::Bench {
            entries,
            urls,
            iterations,
        } => bench::cmd_bench(&entries, &urls, iterations),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

pub(crate) fn load_entries(path: &str) -> Result<Vec<BlacklistEntry>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse '{}': {}", path, e))
}

fn cmd_check(entries_path: &str, urls: &[String]) -> Result<(), String> {
    let entries = load_entries(entries_path)?;
    let matcher = compile(&entries);

    let mut blocked = 0usize;
    for url in urls {
        let hit = matcher.is_blacklisted(url);
        if hit {
            blocked += 1;
        }
        println!("{}  {}", if hit { "BLOCKED" } else { "ok     " }, url);
    }

    println!();
    println!(
        "{} of {} blocked ({} entries, {} dropped)",
        blocked,
        urls.len(),
        entries.len(),
        matcher.dropped
    );
    Ok(())
}

fn cmd_lint(entries_path: &str) -> Result<(), String> {
    let entries = load_entries(entries_path)?;

    let mut problems = 0usize;
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, entry) in entries.iter().enumerate() {
        if let Err(msg) = validate_entry(entry) {
            problems += 1;
            println!("  [{}] invalid regex '{}': {}", i, entry.value, msg);
        }
        if !seen.insert(entry.value.as_str()) {
            problems += 1;
            println!("  [{}] duplicate value '{}'", i, entry.value);
        }
    }

    if problems == 0 {
        println!("'{}' is clean ({} entries)", entries_path, entries.len());
        Ok(())
    } else {
        Err(format!(
            "{} problem(s) in {} entries",
            problems,
            entries.len()
        ))
    }
}

fn cmd_add(entries_path: &str, pattern: &str) -> Result<(), String> {
    let existing = if Path::new(entries_path).exists() {
        load_entries(entries_path)?
    } else {
        Vec::new()
    };
    let mut blacklist = Blacklist::load(existing);

    let entry = match parse_input(pattern) {
        ParseOutcome::Entry(entry) => entry,
        ParseOutcome::Empty => return Err("Nothing to add".to_string()),
        ParseOutcome::Invalid(e) => return Err(e.to_string()),
    };

    let shown = entry.value.clone();
    blacklist.add(entry).map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(blacklist.entries())
        .map_err(|e| format!("Failed to serialize entries: {}", e))?;
    fs::write(entries_path, json)
        .map_err(|e| format!("Failed to write '{}': {}", entries_path, e))?;

    println!("Added '{}' ({} entries)", shown, blacklist.len());
    Ok(())
}
