//! Rendering of the final standings
//!
//! Plain-text table and JSON forms of the ranked output. Rendering sits at
//! the caller boundary; the engine itself only produces states.

use crate::error::Result;
use crate::types::RankedPlayer;

/// Render standings as a fixed-width Rank / Player / Score table
pub fn render_table(standings: &[RankedPlayer]) -> String {
    let name_width = standings
        .iter()
        .map(|row| row.player.len())
        .chain(std::iter::once("Player".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:>4}  {:<name_width$}  {:>6}\n", "Rank", "Player", "Score"));
    for row in standings {
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>6}\n",
            row.rank, row.player, row.score
        ));
    }
    out
}

/// Render standings as pretty-printed JSON
pub fn render_json(standings: &[RankedPlayer]) -> Result<String> {
    Ok(serde_json::to_string_pretty(standings)?)
}
