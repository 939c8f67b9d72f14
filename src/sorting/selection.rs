//! Selection sort

use super::{finish, Algorithm, Highlights, Visualizer};
use std::io;

pub fn sort<V: Visualizer>(mut a: Vec<u32>, viz: &mut V) -> io::Result<Vec<u32>> {
    let n = a.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            viz.frame(
                &a,
                Highlights::triple(min_idx, j, i),
                "Selection Sort: scanning for min",
            )?;
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }

        // Swap happens every pass, even when the minimum is already in place
        a.swap(i, min_idx);
        viz.frame(
            &a,
            Highlights::pair(i, min_idx),
            "Selection Sort: swapped min into place",
        )?;
    }

    finish(Algorithm::Selection, &a, viz)?;
    Ok(a)
}
