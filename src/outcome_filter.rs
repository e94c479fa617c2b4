use once_cell::sync::Lazy;
use regex::Regex;

use crate::lookahead::{IntoLookahead, LookaheadError};

static OUTCOME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Outcome:\s*(.*)").expect("failed to compile regex"));

/// Extract the result from an `Outcome:` line, if it is one.
fn parse_outcome(line: &str) -> Option<String> {
    OUTCOME_PATTERN
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
}

/// Keep only the blocks of a test log whose `Outcome:` line carries `wanted`.
///
/// Each test in the log is expected to emit a name line, any number of log
/// lines, then an `Outcome: <RESULT>` line. Blocks with a different result
/// are dropped wholesale, as is a trailing block with no outcome line.
pub fn filter_by_outcome<I>(lines: I, wanted: &str) -> Result<Vec<String>, LookaheadError>
where
    I: IntoIterator<Item = String>,
{
    let mut lines = lines.lookahead();
    let mut kept = Vec::new();

    loop {
        // Look ahead up to (and including) the next outcome line.
        let mut block = Vec::new();
        let mut peek = lines.peek()?;
        while let Some(line) = peek.next() {
            if OUTCOME_PATTERN.is_match(line) {
                break;
            }
            block.push(line.clone());
        }
        drop(peek);
        // Restore the outcome line so it can be parsed.
        lines.rewind_n(1)?;

        let mut peek = lines.peek()?;
        let outcome = peek.next().and_then(|line| parse_outcome(line));
        drop(peek);

        if block.is_empty() || outcome.is_none() {
            lines.rewind_n(0)?;
            break;
        }

        if outcome.as_deref() == Some(wanted) {
            // Restore the outcome line once more so it is emitted verbatim
            // together with its block.
            lines.rewind()?;
            kept.extend(block);
            kept.extend(lines.next());
        } else {
            lines.rewind_n(0)?;
        }
    }

    Ok(kept)
}
