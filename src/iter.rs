use std::{collections::HashMap, hash::Hash, iter::FusedIterator, slice, vec};

/// Lazy iterator over the (key, value) pairs of an `OrderedMap`, in order.
/// Each value is looked up in the map as its key is reached.
pub struct Iter<'a, K, V> {
    keys: slice::Iter<'a, K>,
    map: &'a HashMap<K, V>,
}

impl<'a, K: Eq + Hash, V> Iter<'a, K, V> {
    pub(crate) fn new(keys: slice::Iter<'a, K>, map: &'a HashMap<K, V>) -> Self {
        Iter { keys, map }
    }
}

impl<'a, K: Eq + Hash, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.keys.next()?;
        self.map.get(k).map(|v| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, K: Eq + Hash, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let k = self.keys.next_back()?;
        self.map.get(k).map(|v| (k, v))
    }
}

impl<'a, K: Eq + Hash, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K: Eq + Hash, V> FusedIterator for Iter<'a, K, V> {}

// Manual impl so that K and V don't need to be Clone
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter { keys: self.keys.clone(), map: self.map }
    }
}

/// Lazy iterator over the values of an `OrderedMap`, in key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: Eq + Hash, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Values { inner }
    }
}

impl<'a, K: Eq + Hash, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: Eq + Hash, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<'a, K: Eq + Hash, V> ExactSizeIterator for Values<'a, K, V> {}
impl<'a, K: Eq + Hash, V> FusedIterator for Values<'a, K, V> {}

/// Owning iterator, which moves each (key, value) pair out of the map in order.
pub struct IntoIter<K, V> {
    keys: vec::IntoIter<K>,
    map: HashMap<K, V>,
}

impl<K: Eq + Hash, V> IntoIter<K, V> {
    pub(crate) fn new(keys: Vec<K>, map: HashMap<K, V>) -> Self {
        IntoIter { keys: keys.into_iter(), map }
    }
}

impl<K: Eq + Hash, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let k = self.keys.next()?;
        let v = self.map.remove(&k)?;
        Some((k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        let k = self.keys.next_back()?;
        let v = self.map.remove(&k)?;
        Some((k, v))
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for IntoIter<K, V> {}
