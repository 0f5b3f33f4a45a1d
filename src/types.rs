//! Common types used throughout the rating tool

use serde::{Deserialize, Serialize};

/// Player names are free-form tokens, case-sensitive, never purely numeric
pub type PlayerName = String;

/// One parsed match result line
///
/// Created by the parser from a single input line and consumed once by the
/// engine, in input order. Scores are kept exactly as written; negative
/// values are structurally representable even though matches are expected
/// to report non-negative scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player1: PlayerName,
    pub score1: i64,
    pub score2: i64,
    pub player2: PlayerName,
}

impl MatchRecord {
    pub fn new(
        player1: impl Into<PlayerName>,
        score1: i64,
        score2: i64,
        player2: impl Into<PlayerName>,
    ) -> Self {
        Self {
            player1: player1.into(),
            score1,
            score2,
            player2: player2.into(),
        }
    }

    /// Combined score of both players, the divisor for share computation
    pub fn total_score(&self) -> i64 {
        self.score1 + self.score2
    }

    /// Whether both sides of the record name the same player
    pub fn is_self_match(&self) -> bool {
        self.player1 == self.player2
    }
}

impl std::fmt::Display for MatchRecord {
    /// Canonical `P1 S1-S2 P2` form, re-parseable for well-formed records
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.player1, self.score1, self.score2, self.player2
        )
    }
}

/// Mutable per-player accumulator held by the engine for one evaluation
///
/// `rating` starts at zero and absorbs redistributed pool mass; `pot` starts
/// at the configured pot value and decays by the factor fraction each time
/// the player appears in a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub rating: f64,
    pub pot: f64,
}

impl PlayerState {
    /// Fresh state for a player seen for the first time
    pub fn initial(start_pot: i64) -> Self {
        Self {
            rating: 0.0,
            pot: start_pot as f64,
        }
    }
}

/// One row of the final standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    /// 1-based position, best rating first
    pub rank: u32,
    pub player: PlayerName,
    /// Final rating truncated toward zero for display
    pub score: i64,
}
