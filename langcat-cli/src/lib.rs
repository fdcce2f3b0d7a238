//! CLI library for testing purposes

pub mod check;
pub mod languages;
pub mod translate;
pub mod validation;

pub use check::{CheckOutcome, run_check};
pub use langcat::{Registry, Translator};
