// src/lexer/mod.rs
pub mod engine;
pub mod scan;
pub mod tables;

// Re-exports to keep call sites short.
pub use engine::{Analyzer, Readiness};
pub use scan::{Scanner, Token};
