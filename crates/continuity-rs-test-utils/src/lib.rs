//! Test helpers shared across Continuity crates.

pub mod generator;

pub use generator::{FailingGenerator, FixedGenerator, RecordingGenerator};
