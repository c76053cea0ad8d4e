//! Line-by-line processing of a pasted block of sequences

use log::trace;

use crate::sequence::iupac::is_nucleotide;
use crate::sequence::transform::Operation;

/// A line is treated as a sequence if any character is a recognized base.
///
/// Lines without one (labels, numbers, separators) are left untouched.
/// Mixed lines are transformed whole; their other characters pass through
/// the complement lookup unchanged but still move when reversed.
pub fn looks_like_sequence(line: &str) -> bool {
    line.chars().any(is_nucleotide)
}

/// Apply `operation` to every sequence line of `lines`.
///
/// Lines are trimmed and blank ones dropped; order is preserved and the
/// result is joined with `\n`. Never fails.
pub fn transform(lines: &str, operation: Operation) -> String {
    let processed: Vec<String> = lines
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if looks_like_sequence(line) {
                operation.apply(line)
            } else {
                trace!("Passing through non-sequence line: {line:?}");
                line.to_string()
            }
        })
        .collect();

    processed.join("\n")
}
