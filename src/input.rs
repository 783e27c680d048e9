//! Sequence acquisition: file loading and normalization.
//!
//! Sequences are normalized here, before they reach the aligner: trailing
//! whitespace stripped (covers CRLF line endings) and bases uppercased.

use std::fs;

use crate::error::{Result, SeqDiffError};

/// Normalize one raw sequence line.
pub fn normalize(raw: &str) -> String {
    raw.trim_end().to_ascii_uppercase()
}

/// Load a reference/mutated pair from the first two lines of a text file.
///
/// Fails with [`SeqDiffError::Input`] when the file holds fewer than two
/// lines; I/O errors propagate unmodified.
pub fn load_sequence_pair(path: &str) -> Result<(String, String)> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();
    let first = lines
        .next()
        .ok_or_else(|| SeqDiffError::Input(format!("{}: expected two sequences, file is empty", path)))?;
    let second = lines
        .next()
        .ok_or_else(|| SeqDiffError::Input(format!("{}: expected two sequences, found one line", path)))?;
    Ok((normalize(first), normalize(second)))
}

/// Load every consecutive pair of lines from a batch file.
///
/// Line 1 pairs with line 2, line 3 with line 4, and so on. A trailing
/// unpaired line is an error rather than a silently dropped sequence.
pub fn load_sequence_pairs(path: &str) -> Result<Vec<(String, String)>> {
    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() % 2 != 0 {
        return Err(SeqDiffError::Input(format!(
            "{}: expected an even number of lines, found {}",
            path,
            lines.len()
        )));
    }
    Ok(lines
        .chunks(2)
        .map(|pair| (normalize(pair[0]), normalize(pair[1])))
        .collect())
}
