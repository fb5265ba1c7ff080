// src/bin/fuzz_scan.rs
// Generate random-but-valid inputs for the sample grammar, scan them, and
// check the reconstruction property: the token images, trivia included, must
// concatenate back to the normalized source, with no error tokens.
//
//   - FUZZ_LEN=<bytes>    target source length (default 100_000)
//   - FUZZ_ITERS=<n>      iterations (default 5)
//   - FUZZ_SEED=<n>       rng seed (default 42)
//   - FUZZ_INPUT=<path>   replay a saved case instead of generating

use std::{fs, time::Instant};

use anyhow::Context;
use rand::{SeedableRng, rngs::StdRng};
use tablex::{
    dev::generator::gen_valid_source,
    lexer::{Analyzer, Token, tables::sample},
};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("FUZZ_INPUT") {
        eprintln!("[replay] reading {path}");
        let src =
            fs::read_to_string(&path).with_context(|| format!("failed to read FUZZ_INPUT {path}"))?;
        if !run_once(&src, "replay") {
            std::process::exit(1);
        }
        return Ok(());
    }

    let len = env_usize("FUZZ_LEN", 100_000);
    let iters = env_usize("FUZZ_ITERS", 5);
    let seed = env_u64("FUZZ_SEED", 42);
    eprintln!("[fuzz] len={len} iters={iters} seed={seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    for i in 0..iters {
        let src = gen_valid_source(&mut rng, len);
        eprintln!("[fuzz] iter {i}: generated {} bytes", src.len());
        if !run_once(&src, &format!("iter {i}")) {
            std::process::exit(1);
        }
    }
    eprintln!("[fuzz] all iterations passed");
    Ok(())
}

fn run_once(src: &str, label: &str) -> bool {
    let (scan, tokens) = sample::sample_tables();
    let mut analyzer = Analyzer::new();
    analyzer.set_scan_table(scan);
    analyzer.set_token_table(tokens);
    analyzer.set_keywords(sample::sample_keywords());
    analyzer.set_source(src);

    let t0 = Instant::now();
    let all = collect_all_tokens(&analyzer);
    let ms = t0.elapsed().as_millis();

    let mut normalized = src.to_string();
    if !normalized.ends_with("\r\n") {
        normalized.push_str("\r\n");
    }

    let mut rebuilt = String::with_capacity(normalized.len());
    for t in &all {
        if t.is_error() {
            eprintln!("[{label}] unexpected error token: {}", t.value);
            return false;
        }
        rebuilt.push_str(&t.value);
    }

    if rebuilt != normalized {
        let at = first_mismatch(&rebuilt, &normalized);
        eprintln!(
            "[{label}] reconstruction mismatch at byte {at}: rebuilt {} B, normalized {} B",
            rebuilt.len(),
            normalized.len()
        );
        dump_window(&normalized, at);
        dump_window(&rebuilt, at);
        return false;
    }

    let kept = all
        .iter()
        .filter(|t| !tablex::lexer::tables::is_trivia(&t.kind))
        .count();
    eprintln!("[{label}] {} tokens ({kept} kept) in {ms} ms -> OK", all.len());
    true
}

// Drive the scanner directly so trivia tokens are visible too.
fn collect_all_tokens(analyzer: &Analyzer) -> Vec<Token> {
    let mut scanner = analyzer.scanner().expect("analyzer is fully configured");
    let mut out = Vec::new();
    while !scanner.at_end() {
        out.push(scanner.next_token());
    }
    out
}

fn first_mismatch(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .position(|(x, y)| x != y)
        .unwrap_or_else(|| a.len().min(b.len()))
}

fn dump_window(s: &str, at: usize) {
    let lo = at.saturating_sub(32);
    let hi = (at + 32).min(s.len());
    eprintln!(
        "    [{lo}..{hi}) {:?}",
        String::from_utf8_lossy(&s.as_bytes()[lo..hi])
    );
}
