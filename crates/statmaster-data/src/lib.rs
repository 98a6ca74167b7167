//! Input and synthetic data for the Statmaster engines.
//!
//! - [`parser`]: free-form number lists and grouped tables
//! - [`generator`]: normally distributed samples
//! - [`scenario`]: teaching presets
//! - [`transform`]: whole-sample edits
//! - [`experiment`]: die-rolling experiment

pub mod experiment;
pub mod generator;
pub mod parser;
pub mod scenario;
pub mod transform;
