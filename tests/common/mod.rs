#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Keys `0..n` in a reproducible random order.
pub fn shuffled(n: u32, seed: u64) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

/// Copy borrowed entries out of a container iterator.
pub fn entries<'a, K, V, I>(iter: I) -> Vec<(K, V)>
where
    K: Copy + 'a,
    V: Copy + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    iter.into_iter().map(|(k, v)| (*k, *v)).collect()
}
