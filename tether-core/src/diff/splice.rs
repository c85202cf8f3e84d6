//! Splice Calculus
//!
//! Computes the minimal ordered sequence of positional splices that
//! transforms one array into another, using a longest-common-subsequence
//! edit distance over the elements. Runs of adjacent removals and
//! insertions collapse into a single splice region.
//!
//! # Coordinates
//!
//! Each splice's `start` is an index into the array *as it stands when the
//! splice is applied*, assuming splices are applied in the order they were
//! computed. Everything before `start` has already been patched to match the
//! target, so ascending application is the only valid order.
//!
//! # Algorithm
//!
//! Shared prefix and suffix are trimmed first, then an O(n·m) LCS table is
//! built over the middle. Equal elements are always matched (matching an
//! equal pair never shortens an LCS); between edits, the table decides
//! whether removing or inserting preserves the longest subsequence.

use serde_json::Value;

/// One positional edit region.
#[derive(Debug, Clone, PartialEq)]
pub struct Splice {
    /// Index at which the edit applies.
    pub start: usize,
    /// Number of elements removed from the previous array.
    pub removed: usize,
    /// Elements inserted at `start`, a literal slice of the current array.
    pub inserted: Vec<Value>,
}

/// Compute the splices transforming `previous` into `current`.
pub fn calculate(previous: &[Value], current: &[Value]) -> Vec<Splice> {
    // Trim the shared prefix.
    let mut prefix = 0;
    while prefix < previous.len() && prefix < current.len() && previous[prefix] == current[prefix] {
        prefix += 1;
    }

    // Trim the shared suffix, without re-consuming prefix elements.
    let mut suffix = 0;
    while suffix < previous.len() - prefix
        && suffix < current.len() - prefix
        && previous[previous.len() - 1 - suffix] == current[current.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let mid_prev = &previous[prefix..previous.len() - suffix];
    let mid_cur = &current[prefix..current.len() - suffix];
    let n = mid_prev.len();
    let m = mid_cur.len();

    if n == 0 && m == 0 {
        return Vec::new();
    }

    // lcs[i][j] = length of the LCS of mid_prev[i..] and mid_cur[j..].
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if mid_prev[i] == mid_cur[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    // Walk both arrays, grouping unmatched runs into splice regions.
    let mut splices = Vec::new();
    let mut open: Option<(usize, usize, usize)> = None; // (start, removed, insert_from)
    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        if i < n && j < m && mid_prev[i] == mid_cur[j] {
            if let Some((start, removed, insert_from)) = open.take() {
                splices.push(Splice {
                    start,
                    removed,
                    inserted: mid_cur[insert_from..j].to_vec(),
                });
            }
            i += 1;
            j += 1;
            continue;
        }

        let region = open.get_or_insert((prefix + j, 0, j));
        if j < m && (i >= n || lcs[i][j + 1] >= lcs[i + 1][j]) {
            j += 1; // insertion, part of the inserted slice
        } else {
            region.1 += 1; // removal from previous
            i += 1;
        }
    }
    if let Some((start, removed, insert_from)) = open {
        splices.push(Splice {
            start,
            removed,
            inserted: mid_cur[insert_from..m].to_vec(),
        });
    }

    splices
}

/// Apply splices, in order, to `target`.
///
/// This is the positional-splice semantics host frameworks implement; tests
/// use it to check the round-trip property.
pub fn apply(target: &mut Vec<Value>, splices: &[Splice]) {
    for splice in splices {
        target.splice(
            splice.start..splice.start + splice.removed,
            splice.inserted.iter().cloned(),
        );
    }
}
