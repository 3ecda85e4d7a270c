use std::marker::PhantomData;

/// Anything that carries a stable, dense integer identity.
pub trait HasId {
    fn id(&self) -> usize;
}

impl HasId for usize {
    #[inline(always)]
    fn id(&self) -> usize {
        *self
    }
}

/// A map keyed by the id of its keys instead of their hash.
///
/// Values live in a vector addressed by `key.id()`, which grows lazily on
/// insertion. Lookups are a bounds check and an index, which is what the
/// search algorithms need for their per-node bookkeeping. Ids are expected to
/// be reasonably dense: the backing storage is as long as the biggest id ever
/// inserted.
pub struct IdMap<K: HasId, V> {
    entries: Vec<Option<V>>,
    len: usize,
    _key: PhantomData<fn(&K)>,
}

impl<K: HasId, V> Default for IdMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HasId, V: Clone> Clone for IdMap<K, V> {
    fn clone(&self) -> Self {
        IdMap {
            entries: self.entries.clone(),
            len: self.len,
            _key: PhantomData,
        }
    }
}

impl<K: HasId, V: std::fmt::Debug> std::fmt::Debug for IdMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: HasId, V> IdMap<K, V> {
    pub fn new() -> Self {
        IdMap {
            entries: Vec::new(),
            len: 0,
            _key: PhantomData,
        }
    }

    /// Pre-allocates room for ids in `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        IdMap {
            entries: Vec::with_capacity(capacity),
            len: 0,
            _key: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value, returning the value previously stored for the key.
    pub fn insert(&mut self, key: &K, value: V) -> Option<V> {
        let id = key.id();
        self.ensure_slot(id);

        let previous = self.entries[id].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    #[inline(always)]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key.id()).and_then(Option::as_ref)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key.id()).and_then(Option::as_mut)
    }

    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: &K, default: F) -> &mut V {
        let id = key.id();
        self.ensure_slot(id);

        let slot = &mut self.entries[id];
        if slot.is_none() {
            self.len += 1;
        }
        slot.get_or_insert_with(default)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.entries.get_mut(key.id()).and_then(Option::take);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    #[inline(always)]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }

    /// Live entries as `(id, value)`, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(id, value)| value.as_ref().map(|value| (id, value)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut V)> + '_ {
        self.entries
            .iter_mut()
            .enumerate()
            .filter_map(|(id, value)| value.as_mut().map(|value| (id, value)))
    }

    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|(id, _)| id)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().filter_map(Option::as_ref)
    }

    fn ensure_slot(&mut self, id: usize) {
        if id >= self.entries.len() {
            self.entries.resize_with(id + 1, || None);
        }
    }
}

impl<K: HasId, V: PartialEq> IdMap<K, V> {
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|candidate| candidate == value)
    }
}

impl<K: HasId, V> Extend<(K, V)> for IdMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

impl<K: HasId, V> IntoIterator for IdMap<K, V> {
    type Item = (usize, V);
    type IntoIter = std::iter::FilterMap<
        std::iter::Enumerate<std::vec::IntoIter<Option<V>>>,
        fn((usize, Option<V>)) -> Option<(usize, V)>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn live_entry<V>((id, value): (usize, Option<V>)) -> Option<(usize, V)> {
            value.map(|value| (id, value))
        }

        self.entries
            .into_iter()
            .enumerate()
            .filter_map(live_entry as fn((usize, Option<V>)) -> Option<(usize, V)>)
    }
}

impl<K: HasId, V> FromIterator<(K, V)> for IdMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = IdMap::new();
        map.extend(iter);
        map
    }
}
