//! Heap sort

use super::{finish, Algorithm, Highlights, Visualizer};
use std::io;

pub fn sort<V: Visualizer>(mut a: Vec<u32>, viz: &mut V) -> io::Result<Vec<u32>> {
    let n = a.len();

    // Build the max-heap bottom-up
    for i in (0..n / 2).rev() {
        heapify(&mut a, n, i, viz)?;
    }

    for end in (1..n).rev() {
        a.swap(0, end);
        viz.frame(&a, Highlights::pair(0, end), "Heap Sort: extract max")?;
        heapify(&mut a, end, 0, viz)?;
    }

    finish(Algorithm::Heap, &a, viz)?;
    Ok(a)
}

/// Sift `a[i]` down within the heap prefix `a[..n]`
fn heapify<V: Visualizer>(a: &mut [u32], n: usize, i: usize, viz: &mut V) -> io::Result<()> {
    let mut largest = i;
    let l = 2 * i + 1;
    let r = 2 * i + 2;

    if l < n && a[l] > a[largest] {
        largest = l;
    }
    if r < n && a[r] > a[largest] {
        largest = r;
    }

    if largest != i {
        a.swap(i, largest);
        viz.frame(a, Highlights::triple(i, largest, n - 1), "Heap Sort: heapify")?;
        heapify(a, n, largest, viz)?;
    }
    Ok(())
}
