//! Data models module
//!
//! Value records for questions, answers and the events that carry a
//! player's choices.

pub mod event;
pub mod question;

// Re-export commonly used types
pub use event::{Event, EventKind};
pub use question::{total_score, Question, Solution};
