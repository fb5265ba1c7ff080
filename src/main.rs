// src/main.rs
use std::fs;

use anyhow::{Context, Result, bail};
use tablex::lexer::{
    Analyzer,
    tables::{parse_keyword_list_csv, parse_scan_table_csv, parse_token_table_csv, sample},
};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.len() {
        0 => demo(),
        3 | 4 => run_files(&args),
        _ => bail!("usage: tablex <scan_table.csv> <token_table.csv> <source> [keywords.csv]"),
    }
}

/// No arguments: scan a tiny built-in sample with the sample grammar.
fn demo() -> Result<()> {
    let src = "if foo < 12.5 then bar = 7 // done\n";

    let (scan, tokens) = sample::sample_tables();
    let mut analyzer = Analyzer::new();
    analyzer.set_scan_table(scan);
    analyzer.set_token_table(tokens);
    analyzer.set_keywords(sample::sample_keywords());
    analyzer.set_source(src);

    print_stream(&analyzer);
    Ok(())
}

fn run_files(args: &[String]) -> Result<()> {
    let scan_text = fs::read_to_string(&args[0])
        .with_context(|| format!("failed to read scan table {}", args[0]))?;
    let token_text = fs::read_to_string(&args[1])
        .with_context(|| format!("failed to read token table {}", args[1]))?;
    let source = fs::read_to_string(&args[2])
        .with_context(|| format!("failed to read source {}", args[2]))?;

    let mut analyzer = Analyzer::new();
    analyzer.set_scan_table(parse_scan_table_csv(&scan_text).map_err(anyhow::Error::msg)?);
    analyzer.set_token_table(parse_token_table_csv(&token_text).map_err(anyhow::Error::msg)?);
    analyzer.set_source(&source);

    if let Some(kw_path) = args.get(3) {
        let kw_text = fs::read_to_string(kw_path)
            .with_context(|| format!("failed to read keyword list {kw_path}"))?;
        analyzer.set_keywords(parse_keyword_list_csv(&kw_text));
    }

    print_stream(&analyzer);
    Ok(())
}

fn print_stream(analyzer: &Analyzer) {
    let tokens = analyzer.analyze();
    if tokens.is_empty() {
        let ready = analyzer.readiness();
        if !ready.source {
            println!("no source text loaded");
        } else if !ready.scan_table {
            println!("no scan table loaded");
        } else if !ready.token_table {
            println!("no token table loaded");
        } else {
            println!("the token stream is empty");
        }
        return;
    }

    let mut errors = 0usize;
    for t in &tokens {
        if t.is_error() {
            errors += 1;
            println!("error  {}", t.value);
        } else {
            println!("{:12} {:?}", t.kind, t.value);
        }
    }
    println!("-- {} token(s), {} error(s)", tokens.len(), errors);
}
