//! Line parser for plain-text match results
//!
//! One match per line, `<Player1> <Score1>-<Score2> <Player2>`, whitespace
//! separated. Parsing is pure; malformed lines are rejected individually and
//! collected so every bad line can be reported in one pass.

use crate::error::RatingError;
use crate::types::MatchRecord;
use tracing::debug;

/// Parse one line of text into a match record.
///
/// The line is trimmed here; callers need not pre-trim. Fails with
/// `MalformedLine` when the token count is not exactly three, a player name
/// is purely numeric, the score descriptor has no `-` separator, either
/// score half is not a base-10 integer, or both names are the same player.
pub fn parse_line(line: &str) -> Result<MatchRecord, RatingError> {
    let malformed = || RatingError::MalformedLine {
        line: line.to_string(),
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[player1, score_raw, player2] = tokens.as_slice() else {
        return Err(malformed());
    };

    // A name that is a pure number would be indistinguishable from a score.
    if is_numeric_token(player1) || is_numeric_token(player2) {
        return Err(malformed());
    }
    if !score_raw.contains('-') {
        return Err(malformed());
    }

    // Split on the FIRST '-' only, so the right half may carry its own sign.
    let (raw1, raw2) = score_raw.split_once('-').ok_or_else(malformed)?;
    let score1: i64 = raw1.parse().map_err(|_| malformed())?;
    let score2: i64 = raw2.parse().map_err(|_| malformed())?;

    if player1 == player2 {
        return Err(malformed());
    }

    Ok(MatchRecord::new(player1, score1, score2, player2))
}

/// Parse every non-blank line of a raw text block.
///
/// Errors are not short-circuited: each malformed line yields its own
/// `MalformedLine`, and records are returned only when no line failed.
pub fn parse_lines(text: &str) -> Result<Vec<MatchRecord>, Vec<RatingError>> {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        debug!("parsed {} match lines", records.len());
        Ok(records)
    } else {
        debug!("rejected {} of {} match lines", errors.len(), records.len() + errors.len());
        Err(errors)
    }
}

fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
