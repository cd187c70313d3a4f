//! Terminal output formatting
//!
//! Colored feedback rows, the keyboard summary and command result printers.

pub mod display;
pub mod formatters;
pub mod keyboard;

pub use display::{print_analysis_result, print_score_result};
pub use keyboard::KeyboardState;
