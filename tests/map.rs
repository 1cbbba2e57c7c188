use flatstore::builder::{Build, Builder};
use flatstore::compare::Descending;
use flatstore::storage::{Layout, LayoutBuffer, SplitBuffer};
use flatstore::FlatMap;
use std::collections::BTreeMap;
mod common;
use common::{entries, shuffled};

fn demo_map(layout: Layout) -> FlatMap<i32, i32, flatstore::compare::Ascending, LayoutBuffer<i32, i32>> {
    let mut m: FlatMap<i32, i32, _, _> = Builder::new().layout(layout).build();
    m.insert(1, 2);
    m.insert(7, 8);
    m.insert(3, 4);
    *m.get_or_insert_default(5) = 6;
    m
}

#[test]
fn demo_scenario() {
    for layout in [Layout::Pairs, Layout::Split] {
        let mut m = demo_map(layout);
        assert_eq!(entries(&m), vec![(1, 2), (3, 4), (5, 6), (7, 8)]);

        assert_eq!(m.erase(&3), 1);
        assert_eq!(entries(&m), vec![(1, 2), (5, 6), (7, 8)]);
        assert_eq!(m.erase(&3), 0);
        assert_eq!(entries(&m), vec![(1, 2), (5, 6), (7, 8)]);
    }
}

#[test]
fn first_insert_wins() {
    let mut m = FlatMap::new();
    assert_eq!(m.insert("k", 1), (0, true));
    assert_eq!(m.insert("k", 2), (0, false));
    assert_eq!(m["k"], 1);
}

#[test]
fn random_order_matches_btreemap() {
    let keys = shuffled(1000, 7);
    let mut map: FlatMap<u32, u32, Descending, SplitBuffer<u32, u32>> =
        Builder::new().compare(Descending).split().build();
    let mut model = BTreeMap::new();
    for k in keys.iter() {
        map.insert(*k % 300, *k);
        model.entry(*k % 300).or_insert(*k);
    }
    assert_eq!(map.len(), model.len());
    assert!(map.iter().eq(model.iter().rev()));

    let collected: FlatMap<u32, u32> = keys.iter().map(|k| (*k % 300, *k)).collect();
    assert!(collected.iter().eq(model.iter()));
}

#[test]
fn cursor_navigation() {
    let m = demo_map(Layout::Split);
    let mut cursor = m.find(&3);
    assert_eq!(cursor.get(), Some((&3, &4)));
    cursor.move_next();
    assert_eq!(cursor.key(), Some(&5));
    assert!(cursor.move_prev());
    assert_eq!(cursor.offset(2).and_then(|c| c.value().copied()), Some(8));
    assert_eq!(m.end().distance_from(&m.begin()), 4);
    assert!(m.find(&4) == m.end());
    assert_eq!(entries(m.cursor_at(2).map(|c| c.iter()).unwrap()), vec![(5, 6), (7, 8)]);
}

#[test]
fn positional_access() {
    let mut m = demo_map(Layout::Pairs);
    assert_eq!(m.at(0), Some((&1, &2)));
    assert_eq!(m.at(4), None);
    if let Some((_, v)) = m.at_mut(3) {
        *v = 80;
    }
    assert_eq!(m.get(&7), Some(&80));
    assert_eq!(m.remove_at(1), Some((3, 4)));
    assert_eq!(m.at(1), Some((&5, &6)));
    assert_eq!(m.erase_range(1..), 2);
    assert_eq!(entries(&m), vec![(1, 2)]);
}

#[test]
#[should_panic]
fn erase_range_out_of_bounds() {
    let mut m = demo_map(Layout::Pairs);
    m.erase_range(2..5);
}
