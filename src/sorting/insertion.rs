//! Insertion sort

use super::{finish, Algorithm, Highlights, Visualizer};
use std::io;

/// Stable insertion sort.
///
/// The tertiary highlight marks `i`, the front of the unsorted region.
pub fn sort<V: Visualizer>(mut a: Vec<u32>, viz: &mut V) -> io::Result<Vec<u32>> {
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;

        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1];
            viz.frame(&a, Highlights::triple(j - 1, j, i), "Insertion Sort: shifting")?;
            j -= 1;
        }

        a[j] = key;
        viz.frame(
            &a,
            Highlights::new(Some(j), None, Some(i)),
            "Insertion Sort: placed key",
        )?;
    }

    finish(Algorithm::Insertion, &a, viz)?;
    Ok(a)
}
