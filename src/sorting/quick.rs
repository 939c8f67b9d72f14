//! Quicksort with Lomuto partitioning
//!
//! The pivot is always the last element of the range. After partitioning, the
//! pivot sits at its final index and both sides are sorted recursively with
//! that index excluded.

use super::{finish, Algorithm, Highlights, Visualizer};
use std::io;

pub fn sort<V: Visualizer>(mut a: Vec<u32>, viz: &mut V) -> io::Result<Vec<u32>> {
    if !a.is_empty() {
        let hi = a.len() - 1;
        sort_range(&mut a, 0, hi, viz)?;
    }
    finish(Algorithm::Quick, &a, viz)?;
    Ok(a)
}

fn sort_range<V: Visualizer>(a: &mut [u32], lo: usize, hi: usize, viz: &mut V) -> io::Result<()> {
    if lo >= hi {
        return Ok(());
    }
    let p = partition(a, lo, hi, viz)?;
    if p > lo {
        sort_range(a, lo, p - 1, viz)?;
    }
    sort_range(a, p + 1, hi, viz)
}

/// Partition `a[lo..=hi]` around `a[hi]` and return the pivot's final index.
///
/// Everything left of the returned index is strictly smaller than the pivot;
/// everything right of it is greater or equal.
pub fn partition<V: Visualizer>(
    a: &mut [u32],
    lo: usize,
    hi: usize,
    viz: &mut V,
) -> io::Result<usize> {
    let pivot = a[hi];
    let mut i = lo;

    for j in lo..hi {
        viz.frame(a, Highlights::triple(j, hi, i), "Quick Sort: partitioning")?;
        if a[j] < pivot {
            a.swap(i, j);
            viz.frame(a, Highlights::triple(j, hi, i), "Quick Sort: swap < pivot")?;
            i += 1;
        }
    }

    a.swap(i, hi);
    viz.frame(a, Highlights::pair(i, hi), "Quick Sort: pivot placed")?;
    Ok(i)
}
