use std::{borrow::Borrow, cmp::Ordering, collections::HashMap, fmt::{self, Display}, hash::Hash, ops::Index};

use log::trace;

use crate::iter::{IntoIter, Iter, Values};

/// A map of K -> V which remembers the order in which keys were first added,
/// and uses this order when iterating.
/// Implemented simply as storing both a Vec and HashMap, and keeping these in sync.
///
/// Re-inserting a key that is already present replaces its value but leaves its position alone.
/// The only ways to move a key are the explicit reordering functions (`sort_keys_by`, `reverse_keys`).
///
/// Cloning gives a fully independent copy - nothing is shared between the two maps.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    // Note that the vec doesn't store V. This means we don't have to keep V up to date here
    // (e.g. in insert()). We have to do a lookup in the map anyway when iterating, so we also
    // fetch the V while we're there.
    // Every key in `order` is in `map` and vice versa, exactly once.
    order: Vec<K>,
    map: HashMap<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> OrderedMap<K, V> {
        OrderedMap { order: vec![], map: HashMap::new() }
    }

    /// Pre-reserves space in the lookup table. Doesn't change anything observable.
    pub fn with_capacity(capacity: usize) -> OrderedMap<K, V> {
        OrderedMap { order: Vec::with_capacity(capacity), map: HashMap::with_capacity(capacity) }
    }

    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The keys in iteration order. This is a view of the current state, and can't be
    /// used to modify the map.
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.map.clear();
    }

    /// Empties the map, replacing the storage with fresh storage sized for `capacity` entries.
    pub fn clear_with_capacity(&mut self, capacity: usize) {
        trace!("Clearing {} entries (new capacity {})", self.order.len(), capacity);
        self.order = Vec::with_capacity(capacity);
        self.map = HashMap::with_capacity(capacity);
    }

    /// Re-orders the keys according to `compare`. Values are not touched.
    /// The sort is stable, so keys that compare equal keep their relative order.
    pub fn sort_keys_by<F>(&mut self, compare: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        trace!("Sorting {} keys", self.order.len());
        self.order.sort_by(compare);
    }

    pub fn sort_keys(&mut self)
    where
        K: Ord,
    {
        self.sort_keys_by(K::cmp);
    }

    pub fn reverse_keys(&mut self) {
        trace!("Reversing {} keys", self.order.len());
        self.order.reverse();
    }
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// Builds a map from an unordered HashMap. There is no meaningful order to preserve here,
    /// so the resulting order is whatever order the HashMap happens to iterate in.
    pub fn from_hash_map(map: HashMap<K, V>) -> OrderedMap<K, V>
    where
        K: Clone,
    {
        trace!("Building from unordered map of {} entries", map.len());
        let order = map.keys().cloned().collect();
        OrderedMap { order, map }
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(k)
    }

    /// Mutable access to a value. Keys can't be changed through this, so the order is unaffected.
    pub fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get_mut(k)
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(k)
    }

    /// Adds or replaces the value for `k`, returning the previous value if there was one.
    /// New keys go on the end. Existing keys stay where they are.
    /// All other mutating functions that add entries go through here.
    pub fn insert(&mut self, k: K, v: V) -> Option<V>
    where
        K: Clone,
    {
        let old = match self.map.get_mut(&k) {
            Some(existing) => Some(std::mem::replace(existing, v)),
            None => {
                self.order.push(k.clone());
                self.map.insert(k, v);
                None
            }
        };
        self.debug_check_consistency();
        old
    }

    /// Assigns an optional value: `Some` inserts (or replaces), `None` removes.
    /// Returns the previous value, if any.
    pub fn set(&mut self, k: K, v: Option<V>) -> Option<V>
    where
        K: Clone,
    {
        match v {
            Some(v) => self.insert(k, v),
            None => self.remove(&k),
        }
    }

    /// Removes `k`, returning its value. Does nothing if `k` isn't present.
    pub fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let v = self.map.remove(k)?;
        // Present in the map means present exactly once in the vec.
        if let Some(pos) = self.order.iter().position(|x| <K as Borrow<Q>>::borrow(x) == k) {
            self.order.remove(pos);
        }
        self.debug_check_consistency();
        Some(v)
    }

    /// Keeps only the entries for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let before = self.order.len();
        let map = &mut self.map;
        self.order.retain(|k| {
            let keep_this = match map.get_mut(k) {
                Some(v) => keep(k, v),
                None => false,
            };
            if !keep_this {
                map.remove(k);
            }
            keep_this
        });
        trace!("Retained {} of {} entries", self.order.len(), before);
        self.debug_check_consistency();
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.order.first().and_then(|k| self.map.get(k).map(|v| (k, v)))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.order.last().and_then(|k| self.map.get(k).map(|v| (k, v)))
    }

    /// Iterates over (key, value) pairs in order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.order.iter(), &self.map)
    }

    /// Iterates over the values, in the same order as `keys()`.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    fn debug_check_consistency(&self) {
        debug_assert_eq!(self.order.len(), self.map.len(), "Order list and lookup table are out of sync");
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> From<HashMap<K, V>> for OrderedMap<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        Self::from_hash_map(map)
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut result = Self::with_capacity(iter.size_hint().0);
        result.extend(iter);
        result
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = V;

    /// Panics if the key isn't present, the same as HashMap.
    fn index(&self, k: &Q) -> &V {
        &self.map[k]
    }
}

/// Equal only if both the entries and their order match.
impl<K: Eq + Hash, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.map == other.map
    }
}
impl<K: Eq + Hash, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Eq + Hash + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Human-readable rendering for diagnostics, e.g. `"a" : "1", "b" : "2"`.
/// Not intended to be parsed.
impl<K: Eq + Hash + Display, V: Display> Display for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{k}\" : \"{v}\"")?;
        }
        Ok(())
    }
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Eq + Hash, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.order, self.map)
    }
}
