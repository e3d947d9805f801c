//! Compile and classification throughput measurement
//!
//! Classification runs on every visited page and every rendered history
//! row, so per-URL latency is the number that matters here.

use std::fs;
use std::time::Instant;

use hb_compiler::compile;

use crate::load_entries;

pub(crate) fn cmd_bench(
    entries_path: &str,
    urls_path: &str,
    iterations: usize,
) -> Result<(), String> {
    if iterations == 0 {
        return Err("Iterations must be at least 1".to_string());
    }

    let entries = load_entries(entries_path)?;
    let corpus = fs::read_to_string(urls_path)
        .map_err(|e| format!("Failed to read '{}': {}", urls_path, e))?;
    let urls: Vec<&str> = corpus
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if urls.is_empty() {
        return Err(format!("No URLs in '{}'", urls_path));
    }

    let compile_start = Instant::now();
    let matcher = compile(&entries);
    let compile_time = compile_start.elapsed();

    // Warmup pass
    for url in &urls {
        matcher.is_blacklisted(url);
    }

    let start = Instant::now();
    let mut hits = 0usize;
    for _ in 0..iterations {
        for url in &urls {
            if matcher.is_blacklisted(url) {
                hits += 1;
            }
        }
    }
    let elapsed = start.elapsed();
    let total = iterations * urls.len();

    println!(
        "Compiled {} entries in {:.2}ms ({} dropped)",
        entries.len(),
        compile_time.as_secs_f64() * 1000.0,
        matcher.dropped
    );
    println!(
        "Classified {} URLs ({} passes over {} URLs, {} blocked per pass)",
        total,
        iterations,
        urls.len(),
        hits / iterations
    );
    println!("  Total:       {:.1}ms", elapsed.as_secs_f64() * 1000.0);
    println!(
        "  Throughput:  {:.0} classifications/sec",
        total as f64 / elapsed.as_secs_f64()
    );
    println!(
        "  Latency:     {:.2}us/URL",
        elapsed.as_secs_f64() * 1e6 / total as f64
    );

    Ok(())
}
