//! Readiness gating: analysis only runs once all three inputs are present,
//! in any order, and reruns are independent of each other.

use tablex::lexer::{Analyzer, tables::sample};

#[test]
fn unconfigured_analyzer_yields_empty_stream() {
    let a = Analyzer::new();
    assert!(a.analyze().is_empty());
    let ready = a.readiness();
    assert!(!ready.source && !ready.scan_table && !ready.token_table);
    assert!(a.scanner().is_none());
}

#[test]
fn partial_configuration_stays_gated() {
    let (scan, tokens) = sample::sample_tables();

    let mut a = Analyzer::new();
    a.set_source("x");
    a.set_scan_table(scan);
    assert!(a.analyze().is_empty());
    assert!(!a.is_ready());
    assert!(!a.readiness().token_table);

    a.set_token_table(tokens);
    assert!(a.is_ready());
    assert_eq!(a.analyze().len(), 1);
}

#[test]
fn inputs_accepted_in_any_order() {
    let (scan, tokens) = sample::sample_tables();
    let mut a = Analyzer::new();
    a.set_token_table(tokens);
    a.set_source("x + y");
    a.set_scan_table(scan);
    assert!(a.is_ready());
    assert_eq!(a.analyze().len(), 3);
}

#[test]
fn readiness_disambiguates_empty_streams() {
    // Same observable output (no tokens), different cause.
    let not_ready = Analyzer::new();
    assert!(not_ready.analyze().is_empty());
    assert!(!not_ready.is_ready());

    let (scan, tokens) = sample::sample_tables();
    let mut trivia_only = Analyzer::new();
    trivia_only.set_scan_table(scan);
    trivia_only.set_token_table(tokens);
    trivia_only.set_source(" \t // nothing here\n");
    assert!(trivia_only.analyze().is_empty());
    assert!(trivia_only.is_ready());
}

#[test]
fn replacing_the_source_reuses_tables_without_leakage() {
    let (scan, tokens) = sample::sample_tables();
    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);

    a.set_source("first");
    let one = a.analyze();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].value, "first");

    a.set_source("second 99");
    let two = a.analyze();
    assert_eq!(two.len(), 2);
    assert_eq!(two[0].value, "second");
    assert_eq!(two[1].value, "99");
}

#[test]
fn rerunning_analysis_is_repeatable() {
    let (scan, tokens) = sample::sample_tables();
    let mut a = Analyzer::new();
    a.set_scan_table(scan);
    a.set_token_table(tokens);
    a.set_source("a < b");
    assert_eq!(a.analyze(), a.analyze());
}
