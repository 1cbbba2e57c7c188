use super::{check_sorted, rand, rand_key, TestElement, TestKey, TestValue, NUM_OPS};
use crate::compare::Compare;
use crate::storage::Storage;
use crate::FlatMultiMap;

/// Linear model: a new entry goes before the first key not ordered
/// before it.
struct Model<'c, C> {
    entries: Vec<TestElement>,
    compare: &'c C,
}

impl<'c, C: Compare<TestKey>> Model<'c, C> {
    fn insert(&mut self, key: TestKey, value: TestValue) {
        let index = self
            .entries
            .iter()
            .position(|(k, _)| !self.compare.less(k, &key))
            .unwrap_or(self.entries.len());
        self.entries.insert(index, (key, value));
    }

    fn erase(&mut self, key: TestKey) -> usize {
        let before = self.entries.len();
        let compare = self.compare;
        self.entries.retain(|(k, _)| !compare.equivalent(k, &key));
        before - self.entries.len()
    }

    fn add_to_run(&mut self, key: TestKey, delta: TestValue) {
        let compare = self.compare;
        for (_, v) in self.entries.iter_mut().filter(|(k, _)| compare.equivalent(k, &key)) {
            *v += delta;
        }
    }

    fn count(&self, key: TestKey) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| self.compare.equivalent(k, &key))
            .count()
    }
}

/// Run random insertions and removals on `map` and check it against a
/// linear model. `map` must be empty.
pub fn test_multimap<C, S>(mut map: FlatMultiMap<TestKey, TestValue, C, S>)
where
    C: Compare<TestKey> + Clone,
    S: Storage<TestKey, TestValue>,
{
    assert!(map.is_empty());
    let compare = map.compare().clone();
    let mut model = Model {
        entries: Vec::new(),
        compare: &compare,
    };

    for i in 0..NUM_OPS {
        let key = rand_key();
        match rand(0, 8) {
            0..=2 => {
                let value = i as TestValue;
                let position = map.insert(key, value);
                model.insert(key, value);
                assert_eq!(map.at(position), Some((&key, &value)));
            }
            3 => assert_eq!(map.erase(&key), model.erase(key)),
            4 => {
                let count = model.count(key);
                assert_eq!(map.count(&key), count);
                assert_eq!(map.equal_range(&key).len(), count);
                let range = map.position_range(&key);
                assert!(map
                    .iter()
                    .skip(range.start)
                    .take(range.len())
                    .all(|(k, _)| map.compare().equivalent(k, &key)));
            }
            5 => {
                for (_, v) in map.equal_range_mut(&key) {
                    *v += 1;
                }
                model.add_to_run(key, 1);
            }
            6 => {
                let start = rand(0, map.len() as u64 + 1) as usize;
                let end = rand(start as u64, map.len() as u64 + 1) as usize;
                assert_eq!(map.erase_range(start..end), end - start);
                model.entries.drain(start..end);
            }
            _ => {
                let batch: Vec<TestElement> =
                    (0..rand(0, 40)).map(|j| (rand_key(), j as TestValue)).collect();
                for (k, v) in batch.iter() {
                    model.insert(*k, *v);
                }
                map.extend(batch);
            }
        }
        check_sorted(map.keys(), map.compare(), false);
        assert!(map.iter().map(|(k, v)| (*k, *v)).eq(model.entries.iter().copied()));
    }
}
