//! Bubble sort with early exit

use super::{finish, Algorithm, Highlights, Visualizer};
use std::io;

pub fn sort<V: Visualizer>(mut a: Vec<u32>, viz: &mut V) -> io::Result<Vec<u32>> {
    let n = a.len();
    let mut passes = 0;

    for i in 0..n {
        passes += 1;
        let mut swapped = false;

        for j in 0..n.saturating_sub(i + 1) {
            viz.frame(&a, Highlights::pair(j, j + 1), "Bubble Sort: comparing j and j+1")?;
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
                viz.frame(&a, Highlights::pair(j, j + 1), "Bubble Sort: swapped")?;
            }
        }

        // A clean pass means everything is in order
        if !swapped {
            break;
        }
    }

    log::debug!("bubble sort finished after {} pass(es)", passes);
    finish(Algorithm::Bubble, &a, viz)?;
    Ok(a)
}
