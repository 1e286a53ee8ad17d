//! Game progression module
//!
//! The controller that turns bus events into screen changes, plus the
//! built-in question set.

pub mod controller;
pub mod sample;

pub use controller::{Controller, GameSummary, Progress};
pub use sample::sample_questions;
