//! `serde` support.
//!
//! [`FlatMap`] serializes as a map, [`FlatMultiMap`] as a sequence of
//! `(key, value)` pairs and [`FlatSet`] as a sequence, all in sort order.
//! Deserialized entries go through the same bulk construction as
//! [`FromIterator`]: input order does not matter, and duplicate keys of a
//! map or a set keep their first occurrence.

use crate::compare::Compare;
use crate::storage::Storage;
use crate::{FlatMap, FlatMultiMap, FlatSet};
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<K, V, C, S> Serialize for FlatMap<K, V, C, S>
where
    K: Serialize,
    V: Serialize,
    S: Storage<K, V>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V, C, S> Serialize for FlatMultiMap<K, V, C, S>
where
    K: Serialize,
    V: Serialize,
    S: Storage<K, V>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<T, C, S> Serialize for FlatSet<T, C, S>
where
    T: Serialize,
    S: Storage<T, ()>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

/// Collects map entries or sequence elements into any `FromIterator`
/// container.
struct CollectVisitor<Item, Out> {
    expecting: &'static str,
    unused: PhantomData<(Item, Out)>,
}

impl<Item, Out> CollectVisitor<Item, Out> {
    fn new(expecting: &'static str) -> Self {
        CollectVisitor {
            expecting,
            unused: PhantomData,
        }
    }
}

impl<'de, K, V, Out> Visitor<'de> for CollectVisitor<(K, V), Out>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    Out: FromIterator<(K, V)>,
{
    type Value = Out;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Out, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(entries.into_iter().collect())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Out, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_element()? {
            entries.push(entry);
        }
        Ok(entries.into_iter().collect())
    }
}

/// Elements of a set.
struct Elements<T>(PhantomData<T>);

impl<'de, T, Out> Visitor<'de> for CollectVisitor<Elements<T>, Out>
where
    T: Deserialize<'de>,
    Out: FromIterator<T>,
{
    type Value = Out;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Out, A::Error> {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

impl<'de, K, V, C, S> Deserialize<'de> for FlatMap<K, V, C, S>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Compare<K> + Default,
    S: Storage<K, V> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectVisitor::<(K, V), Self>::new("a map"))
    }
}

impl<'de, K, V, C, S> Deserialize<'de> for FlatMultiMap<K, V, C, S>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Compare<K> + Default,
    S: Storage<K, V> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(CollectVisitor::<(K, V), Self>::new(
            "a sequence of key/value pairs",
        ))
    }
}

impl<'de, T, C, S> Deserialize<'de> for FlatSet<T, C, S>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
    S: Storage<T, ()> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(CollectVisitor::<Elements<T>, Self>::new(
            "a sequence",
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::{Ascending, Descending};
    use crate::storage::SplitBuffer;
    use crate::{FlatMap, FlatMultiMap, FlatSet};

    #[test]
    fn map_roundtrip() {
        let map: FlatMap<u32, String, Descending, SplitBuffer<u32, String>> =
            FlatMap::from([(1, String::from("a")), (2, String::from("b"))]);
        let bytes = bincode::serialize(&map).unwrap();
        let back: FlatMap<u32, String, Descending, SplitBuffer<u32, String>> =
            bincode::deserialize(&bytes).unwrap();
        assert!(back == map);
        assert_eq!(back.first(), Some((&2, &String::from("b"))));
    }

    #[test]
    fn deserialization_sorts_and_dedups() {
        // Bytes of an unsorted map with a duplicate key.
        let entries: Vec<(u8, u8)> = vec![(3, 0), (1, 1), (3, 2)];
        let bytes = bincode::serialize(&entries).unwrap();
        let set: FlatSet<(u8, u8)> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(set.len(), 3);
        let multi: FlatMultiMap<u8, u8> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(multi.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
                   vec![(1, 1), (3, 2), (3, 0)]);

        let by_key: FlatSet<u8, Ascending> =
            bincode::deserialize(&bincode::serialize(&vec![5u8, 1, 5]).unwrap()).unwrap();
        assert_eq!(by_key.iter().copied().collect::<Vec<_>>(), vec![1, 5]);
    }
}
