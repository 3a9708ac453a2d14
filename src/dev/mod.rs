// src/dev/mod.rs
// Helpers shared by tests and tooling.
pub mod generator;
