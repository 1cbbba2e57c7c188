use super::{check_sorted, rand, rand_key, TestKey, NUM_OPS};
use crate::compare::Compare;
use crate::storage::Storage;
use crate::FlatSet;
use std::collections::BTreeSet;

/// Run random insertions and removals on `set` and check it against a
/// `BTreeSet` model. `set` must be empty.
pub fn test_set<C, S>(mut set: FlatSet<TestKey, C, S>)
where
    C: Compare<TestKey>,
    S: Storage<TestKey, ()>,
{
    assert!(set.is_empty());
    let mut model = BTreeSet::new();

    for _ in 0..NUM_OPS {
        let key = rand_key();
        match rand(0, 5) {
            0..=2 => {
                let (position, inserted) = set.insert(key);
                assert_eq!(inserted, model.insert(key));
                assert_eq!(set.at(position), Some(&key));
            }
            3 => assert_eq!(set.take(&key).is_some(), model.remove(&key)),
            _ => {
                assert_eq!(set.contains(&key), model.contains(&key));
                assert_eq!(set.find(&key).is_end(), !model.contains(&key));
            }
        }
        assert_eq!(set.len(), model.len());
        check_sorted(set.iter(), set.compare(), true);
        assert!(model.iter().all(|k| set.contains(k)));
    }
}
