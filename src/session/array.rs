//! Array generation and shuffling

use rand::seq::SliceRandom;
use rand::Rng;

/// `1..=n` in order, then shuffled
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u32> {
    let mut data: Vec<u32> = (1..=n as u32).collect();
    shuffle(&mut data, rng);
    data
}

pub fn shuffle<R: Rng + ?Sized>(data: &mut [u32], rng: &mut R) {
    data.shuffle(rng);
}

/// True when `data` holds exactly the values `1..=data.len()`
pub fn is_permutation(data: &[u32]) -> bool {
    let mut seen = vec![false; data.len()];
    for &value in data {
        let Some(slot) = (value as usize).checked_sub(1).and_then(|i| seen.get_mut(i)) else {
            return false;
        };
        if *slot {
            return false;
        }
        *slot = true;
    }
    true
}
