// src/bin/gen_tables.rs
// Write the sample grammar out as table files: the CSV pair the loaders read,
// plus the JSON form, plus the keyword list.

use std::{fs, path::Path};

use tablex::lexer::tables::{
    render_scan_table_csv, render_token_table_csv, sample, save_tables_json,
};

fn main() -> std::io::Result<()> {
    let (scan, tokens) = sample::sample_tables();

    let dir = Path::new("tables");
    fs::create_dir_all(dir)?;

    let scan_csv = render_scan_table_csv(&scan);
    let token_csv = render_token_table_csv(&tokens);
    let keywords = sample::sample_keywords().join(",");

    fs::write(dir.join("scan_table.csv"), &scan_csv)?;
    fs::write(dir.join("token_table.csv"), &token_csv)?;
    fs::write(dir.join("keywords.csv"), &keywords)?;
    save_tables_json(&dir.join("tables.json"), &scan, &tokens)?;

    println!(
        "[gen_tables] wrote scan_table.csv ({} B), token_table.csv ({} B), keywords.csv ({} B), tables.json -> {}",
        scan_csv.len(),
        token_csv.len(),
        keywords.len(),
        dir.display()
    );
    Ok(())
}
