//! INKK - Pot-based match rating and ranking
//!
//! This crate turns plain-text match results into a ranked standings table
//! using a pot-based, factor-weighted zero-sum redistribution scheme applied
//! sequentially over the matches in input order.

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod rating;
pub mod types;

// Re-export commonly used types
pub use config::EvaluationConfig;
pub use error::{RatingError, Result};
pub use rating::RatingEngine;
pub use types::{MatchRecord, PlayerState, RankedPlayer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the full parse-then-evaluate-then-rank pipeline over a raw text
/// block.
///
/// There is no partial-success mode: every line must parse or no ranking is
/// produced, and a degenerate match aborts the whole evaluation. All
/// failures come back together so the caller can report every bad line at
/// once.
pub fn evaluate_text(
    text: &str,
    config: EvaluationConfig,
) -> std::result::Result<Vec<RankedPlayer>, Vec<RatingError>> {
    let matches = parser::parse_lines(text)?;
    let states = RatingEngine::new(config)
        .evaluate(&matches)
        .map_err(|error| vec![error])?;
    Ok(rating::rank(&states))
}
