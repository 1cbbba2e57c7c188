use crate::compare::Compare;
use rand::random;

pub type TestKey = u16;
pub type TestValue = u32;
pub type TestElement = (TestKey, TestValue);

/// Number of random operations run by each checker.
pub const NUM_OPS: usize = 512;
/// Keys are drawn in `0..KEY_RANGE` so that duplicates are frequent.
pub const KEY_RANGE: u64 = 64;

pub fn rand(a: u64, b: u64) -> u64 {
    a + (random::<u64>() % (b - a))
}

pub fn rand_key() -> TestKey {
    rand(0, KEY_RANGE) as TestKey
}

/// Assert that `keys` are sorted under `compare`, strictly if `unique`.
pub fn check_sorted<'a, C, I>(keys: I, compare: &C, unique: bool)
where
    C: Compare<TestKey>,
    I: IntoIterator<Item = &'a TestKey>,
{
    let keys: Vec<&TestKey> = keys.into_iter().collect();
    for pair in keys.windows(2) {
        assert!(!compare.less(pair[1], pair[0]), "keys out of order");
        if unique {
            assert!(compare.less(pair[0], pair[1]), "duplicate keys");
        }
    }
}

pub use map::test_map;
mod multimap;
pub use multimap::test_multimap;
mod set;
pub use set::test_set;
