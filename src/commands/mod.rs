//! Command implementations

pub mod analyze;
pub mod play;
pub mod score;
pub mod serve;
pub mod stdio;

pub use analyze::{AnalysisResult, GroupSummary, analyze_guess};
pub use play::run_play;
pub use score::{ScoreResult, score_words};
pub use serve::{ServeConfig, run_serve};
pub use stdio::run_stdio;
