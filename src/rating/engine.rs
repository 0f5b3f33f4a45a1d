//! Pot-based rating engine
//!
//! Folds an ordered sequence of match records into per-player states. Each
//! match withdraws a factor fraction of both participants' rating and pot,
//! pools the withdrawn amounts, and pays the pool back into the two ratings
//! in proportion to score share. Pots only ever shrink; ratings absorb the
//! redistributed mass. Input order matters: the fold is not commutative.

use crate::config::EvaluationConfig;
use crate::error::RatingError;
use crate::types::{MatchRecord, PlayerName, PlayerState};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Sequential evaluator for an ordered list of matches
///
/// Each call to [`evaluate`](RatingEngine::evaluate) starts from a fresh
/// working map; no state is carried across calls.
#[derive(Debug, Clone)]
pub struct RatingEngine {
    config: EvaluationConfig,
}

impl RatingEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate all matches in input order and return the final state of
    /// every player who appeared at least once.
    ///
    /// The evaluation is all-or-nothing: a degenerate match (zero total
    /// score) or a self-match aborts the call and no partial map is
    /// returned.
    pub fn evaluate(
        &self,
        matches: &[MatchRecord],
    ) -> Result<HashMap<PlayerName, PlayerState>, RatingError> {
        let factor = self.config.factor;
        let mut states: HashMap<PlayerName, PlayerState> = HashMap::new();

        for record in matches {
            if record.is_self_match() {
                return Err(RatingError::SelfMatch {
                    player: record.player1.clone(),
                });
            }
            let total = record.total_score();
            if total == 0 {
                return Err(RatingError::DegenerateMatch {
                    player1: record.player1.clone(),
                    player2: record.player2.clone(),
                });
            }

            let state1 = *states
                .entry(record.player1.clone())
                .or_insert_with(|| PlayerState::initial(self.config.start_pot));
            let state2 = *states
                .entry(record.player2.clone())
                .or_insert_with(|| PlayerState::initial(self.config.start_pot));

            // Withdraw the stakes and pool them.
            let stake_rating1 = factor * state1.rating;
            let stake_pot1 = factor * state1.pot;
            let stake_rating2 = factor * state2.rating;
            let stake_pot2 = factor * state2.pot;
            let pool = stake_rating1 + stake_pot1 + stake_rating2 + stake_pot2;

            let share1 = record.score1 as f64 / total as f64;
            let share2 = record.score2 as f64 / total as f64;

            trace!(
                match_record = %record,
                pool,
                share1,
                share2,
                "redistributing pool"
            );

            // The pool pays back into ratings only; withdrawn pot never
            // returns to a pot field.
            states.insert(
                record.player1.clone(),
                PlayerState {
                    rating: state1.rating - stake_rating1 + pool * share1,
                    pot: state1.pot - stake_pot1,
                },
            );
            states.insert(
                record.player2.clone(),
                PlayerState {
                    rating: state2.rating - stake_rating2 + pool * share2,
                    pot: state2.pot - stake_pot2,
                },
            );
        }

        debug!(
            matches = matches.len(),
            players = states.len(),
            "evaluation complete"
        );
        Ok(states)
    }
}
