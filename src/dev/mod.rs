// src/dev/mod.rs
// Shared development helpers for the fuzz binary and the sweep tests.
pub mod generator;
