//! Error types for the rating tool
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for parsing and evaluation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    /// A match line that failed syntactic validation. The Display form is the
    /// user-visible message: the offending line echoed back verbatim.
    #[error("Invalid input: {line}")]
    MalformedLine { line: String },

    /// The pot ("scale") value could not be parsed as an integer.
    #[error("Invalid Scale Value")]
    InvalidConfiguration { value: String },

    /// Both scores are zero, so there is no share to redistribute.
    #[error("Degenerate match {player1} vs {player2}: total score is zero")]
    DegenerateMatch { player1: String, player2: String },

    /// A player matched against themselves; one state cannot be staked twice.
    #[error("Self-match for player {player}")]
    SelfMatch { player: String },
}
