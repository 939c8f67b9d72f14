//! Top-down merge sort
//!
//! Splits `[l, r]` at `(l + r) / 2`, sorts both halves recursively, then merges
//! through two temporary runs. Ties take from the left run, which keeps the
//! sort stable.

use super::{finish, Algorithm, Highlights, Visualizer};
use std::io;

pub fn sort<V: Visualizer>(mut a: Vec<u32>, viz: &mut V) -> io::Result<Vec<u32>> {
    if !a.is_empty() {
        let last = a.len() - 1;
        sort_range(&mut a, 0, last, viz)?;
    }
    finish(Algorithm::Merge, &a, viz)?;
    Ok(a)
}

fn sort_range<V: Visualizer>(a: &mut [u32], l: usize, r: usize, viz: &mut V) -> io::Result<()> {
    if l >= r {
        return Ok(());
    }
    let m = (l + r) / 2;
    sort_range(a, l, m, viz)?;
    sort_range(a, m + 1, r, viz)?;
    merge(a, l, m, r, viz)
}

/// Merge the sorted runs `[l, m]` and `[m + 1, r]`
fn merge<V: Visualizer>(
    a: &mut [u32],
    l: usize,
    m: usize,
    r: usize,
    viz: &mut V,
) -> io::Result<()> {
    let left = a[l..=m].to_vec();
    let right = a[m + 1..=r].to_vec();
    let (mut i, mut j, mut k) = (0, 0, l);

    while i < left.len() && j < right.len() {
        viz.frame(a, Highlights::triple(k, l + i, m + 1 + j), "Merge Sort: merging")?;
        if left[i] <= right[j] {
            a[k] = left[i];
            i += 1;
        } else {
            a[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    for &value in &left[i..] {
        a[k] = value;
        k += 1;
        viz.frame(a, Highlights::new(Some(k - 1), None, None), "Merge Sort: copying left")?;
    }
    for &value in &right[j..] {
        a[k] = value;
        k += 1;
        viz.frame(a, Highlights::new(Some(k - 1), None, None), "Merge Sort: copying right")?;
    }

    Ok(())
}
