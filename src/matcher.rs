//! Longest-matching-block comparison between two byte sequences.
//!
//! The matcher finds the longest contiguous run of identical bytes between
//! the two inputs, recurses on the unmatched flanks, and flattens the result
//! into an edit script of `Equal`/`Replace`/`Delete`/`Insert` opcodes. The
//! script is deterministic: ties between equally long matches are broken
//! toward the start of sequence A, then the start of sequence B.

use std::collections::HashMap;

/// A maximal run of identical bytes: `a[a..a+size] == b[b..b+size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Start offset in sequence A
    pub a: usize,
    /// Start offset in sequence B
    pub b: usize,
    /// Run length in bytes (0 only for the terminating sentinel)
    pub size: usize,
}

/// What one contiguous span of the edit script does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    /// The spans are byte-for-byte identical
    Equal,
    /// Both spans are non-empty and differ
    Replace,
    /// Only the A span is non-empty (bytes missing from B)
    Delete,
    /// Only the B span is non-empty (bytes absent from A)
    Insert,
}

/// One span of the edit script, with half-open ranges into both sequences.
///
/// Concatenating the `[a_start, a_end)` ranges of a full script reconstructs
/// sequence A exactly, and likewise the B ranges reconstruct B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

/// Compares two sequences and derives matching blocks and edit opcodes.
///
/// Indexes every byte of B once at construction, so repeated window queries
/// via [`find_longest_match`](Self::find_longest_match) reuse the same table.
pub struct SequenceMatcher<'a> {
    a: &'a [u8],
    b: &'a [u8],
    b2j: HashMap<u8, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        let mut b2j: HashMap<u8, Vec<usize>> = HashMap::new();
        for (j, &byte) in b.iter().enumerate() {
            b2j.entry(byte).or_default().push(j);
        }
        SequenceMatcher { a, b, b2j }
    }

    /// Longest run of identical bytes within `a[a_lo..a_hi]` and
    /// `b[b_lo..b_hi]`.
    ///
    /// Among all maximal runs, returns the one starting earliest in A, and
    /// of those, the one starting earliest in B. Returns a zero-size match
    /// anchored at `(a_lo, b_lo)` when the windows share no bytes.
    pub fn find_longest_match(
        &self,
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> Match {
        let mut best = Match { a: a_lo, b: b_lo, size: 0 };
        // j2len[j] = length of the run ending at (i-1, j-1)
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in a_lo..a_hi {
            let mut row: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    row.insert(j, k);
                    if k > best.size {
                        best = Match { a: i + 1 - k, b: j + 1 - k, size: k };
                    }
                }
            }
            j2len = row;
        }
        best
    }

    /// All maximal matching blocks, ascending in both sequences, with
    /// abutting blocks coalesced and a zero-size sentinel at
    /// `(a.len(), b.len())` appended.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (n, m) = (self.a.len(), self.b.len());
        // Explicit work queue instead of call-stack recursion
        let mut queue = vec![(0, n, 0, m)];
        let mut raw: Vec<Match> = Vec::new();

        while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
            let mat = self.find_longest_match(a_lo, a_hi, b_lo, b_hi);
            if mat.size == 0 {
                continue;
            }
            raw.push(mat);
            if a_lo < mat.a && b_lo < mat.b {
                queue.push((a_lo, mat.a, b_lo, mat.b));
            }
            if mat.a + mat.size < a_hi && mat.b + mat.size < b_hi {
                queue.push((mat.a + mat.size, a_hi, mat.b + mat.size, b_hi));
            }
        }

        raw.sort_unstable_by_key(|mat| (mat.a, mat.b));

        let mut blocks: Vec<Match> = Vec::with_capacity(raw.len() + 1);
        for mat in raw {
            match blocks.last_mut() {
                Some(last) if last.a + last.size == mat.a && last.b + last.size == mat.b => {
                    last.size += mat.size;
                }
                _ => blocks.push(mat),
            }
        }
        blocks.push(Match { a: n, b: m, size: 0 });
        blocks
    }

    /// The full edit script.
    ///
    /// The gap between two consecutive matching blocks becomes exactly one
    /// non-equal opcode, so adjacent differences of the same kind are already
    /// merged. The script covers both sequences exhaustively, in order, with
    /// no overlaps; it is empty only when both inputs are empty.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0, 0);

        for block in self.matching_blocks() {
            let tag = match (i < block.a, j < block.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                ops.push(Opcode {
                    tag,
                    a_start: i,
                    a_end: block.a,
                    b_start: j,
                    b_end: block.b,
                });
            }
            if block.size > 0 {
                ops.push(Opcode {
                    tag: OpTag::Equal,
                    a_start: block.a,
                    a_end: block.a + block.size,
                    b_start: block.b,
                    b_end: block.b + block.size,
                });
            }
            i = block.a + block.size;
            j = block.b + block.size;
        }
        ops
    }
}
