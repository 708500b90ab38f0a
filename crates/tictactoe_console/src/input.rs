//! Parses a line of player input into a move proposal.

use tictactoe_core::{MalformedInput, Proposal};
use tracing::instrument;

/// Reads `ROW COLUMN` as two whitespace-separated integers.
///
/// Range and occupancy are not checked here; negative numbers parse so the
/// validator can reject them.
#[instrument]
pub fn parse_move(line: &str) -> Proposal {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[row, col] = tokens.as_slice() else {
        return Proposal::Malformed(MalformedInput::WrongTokenCount(tokens.len()));
    };

    let parse = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|_| MalformedInput::NotAnInteger(token.to_string()))
    };

    match (parse(row), parse(col)) {
        (Ok(row), Ok(col)) => Proposal::Coordinates { row, col },
        (Err(e), _) | (_, Err(e)) => Proposal::Malformed(e),
    }
}
