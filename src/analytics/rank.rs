//! Pure ranking kernels
//!
//! Window-function style primitives shared by the report builders. All three
//! operate on data the caller has already sorted into rank order and return
//! positionally aligned vectors.

/// Competition ranks for a slice sorted into rank order (best first).
///
/// Tied values share a rank and the next distinct value skips the tie count,
/// so `[5, 5, 4, 3]` ranks `[1, 1, 3, 4]`.
pub fn competition_ranks<T: PartialEq>(sorted: &[T]) -> Vec<usize> {
    let mut ranks = Vec::with_capacity(sorted.len());
    for (i, value) in sorted.iter().enumerate() {
        if i > 0 && *value == sorted[i - 1] {
            ranks.push(ranks[i - 1]);
        } else {
            ranks.push(i + 1);
        }
    }
    ranks
}

/// Percentile ranks for a slice sorted ascending.
///
/// A value's percentile is the count of strictly smaller values divided by
/// `len - 1`: 0.0 for the smallest, 1.0 for the largest, tied values sharing
/// the value of their first occurrence. A single-element (or empty) slice
/// yields 0.0 throughout.
pub fn percent_ranks<T: PartialEq>(sorted: &[T]) -> Vec<f64> {
    let n = sorted.len();
    if n <= 1 {
        return vec![0.0; n];
    }

    let mut ranks = Vec::with_capacity(n);
    for (i, value) in sorted.iter().enumerate() {
        if i > 0 && *value == sorted[i - 1] {
            ranks.push(ranks[i - 1]);
        } else {
            ranks.push(i as f64 / (n - 1) as f64);
        }
    }
    ranks
}

/// NTILE-style group assignment: `len` positions split into `groups` groups
/// as evenly as possible, larger groups first. Returns the 1-based group
/// number per position.
///
/// With `len = groups * q + r`, the first `r` groups take `q + 1` members.
pub fn ntile(groups: usize, len: usize) -> Vec<usize> {
    assert!(groups > 0, "ntile requires at least one group");

    let q = len / groups;
    let r = len % groups;

    let mut assignments = Vec::with_capacity(len);
    for group in 1..=groups {
        let size = if group <= r { q + 1 } else { q };
        assignments.extend(std::iter::repeat(group).take(size));
    }
    assignments
}
