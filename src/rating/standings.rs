//! Ranking of final player states
//!
//! Orders the engine's output map into the standings table shown to the
//! user: best rating first, ties broken by name ascending so the order is
//! deterministic rather than an accident of map iteration.

use crate::types::{PlayerName, PlayerState, RankedPlayer};
use std::collections::HashMap;

/// Sort final states into a 1-based ranking, rating descending.
///
/// Displayed scores are the ratings truncated toward zero.
pub fn rank(states: &HashMap<PlayerName, PlayerState>) -> Vec<RankedPlayer> {
    let mut ordered: Vec<(&PlayerName, &PlayerState)> = states.iter().collect();
    ordered.sort_by(|(name_a, state_a), (name_b, state_b)| {
        state_b
            .rating
            .total_cmp(&state_a.rating)
            .then_with(|| name_a.cmp(name_b))
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, (name, state))| RankedPlayer {
            rank: index as u32 + 1,
            player: name.clone(),
            score: state.rating.trunc() as i64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(entries: &[(&str, f64)]) -> HashMap<PlayerName, PlayerState> {
        entries
            .iter()
            .map(|(name, rating)| {
                (
                    name.to_string(),
                    PlayerState {
                        rating: *rating,
                        pot: 0.0,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_rank_orders_by_rating_descending() {
        let ranked = rank(&states(&[("A", 4.2), ("B", 12.6), ("C", 7.0)]));
        let names: Vec<&str> = ranked.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_ties_break_by_name_ascending() {
        let ranked = rank(&states(&[("Zoe", 5.0), ("Ada", 5.0), ("Mia", 5.0)]));
        let names: Vec<&str> = ranked.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Mia", "Zoe"]);
    }

    #[test]
    fn test_score_truncates_toward_zero() {
        let ranked = rank(&states(&[("A", 12.9), ("B", -3.7)]));
        assert_eq!(ranked[0].score, 12);
        assert_eq!(ranked[1].score, -3);
    }

    #[test]
    fn test_empty_states() {
        assert!(rank(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_ranking_is_non_increasing() {
        let ranked = rank(&states(&[("A", 1.0), ("B", 9.0), ("C", 3.5), ("D", 3.5)]));
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
