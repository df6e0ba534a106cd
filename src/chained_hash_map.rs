//! ChainedHashMap: bucket array of chains that grows by full rehash.
//!
//! Each entry stores the `u64` hash computed at insertion. Bucket indices
//! are `hash % bucket_count` on that unsigned hash, and a rehash re-buckets
//! by the stored hash, so `K: Hash` is only ever called once per insert
//! and once per lookup.
//!
//! Keys are not deduplicated. Inserting an existing key appends a second
//! entry to the same chain, and lookups return the earliest one, so the
//! map behaves like a multi-map whose later entries are shadowed.

use crate::error::{Error, Result};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

type Chain<K, V> = Vec<Entry<K, V>>;

pub struct ChainedHashMap<K, V, S = DefaultHashBuilder> {
    hasher: S,
    buckets: Box<[Chain<K, V>]>,
    len: usize,
    growth_factor: usize,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    pub const DEFAULT_CAPACITY: usize = 2;
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create an empty map with `capacity` buckets.
    ///
    /// Fails with `Error::InvalidArgument` if `capacity < 2` or
    /// `growth_factor < 2`.
    pub fn new(capacity: usize, growth_factor: usize) -> Result<Self> {
        Self::with_hasher(capacity, growth_factor, DefaultHashBuilder::default())
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            hasher: DefaultHashBuilder::default(),
            buckets: empty_buckets(Self::DEFAULT_CAPACITY),
            len: 0,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub const MIN_CAPACITY: usize = 2;
    pub const MIN_GROWTH_FACTOR: usize = 2;

    pub(crate) fn with_hasher(capacity: usize, growth_factor: usize, hasher: S) -> Result<Self> {
        Error::check_at_least("capacity", capacity, Self::MIN_CAPACITY)?;
        Error::check_at_least("growth_factor", growth_factor, Self::MIN_GROWTH_FACTOR)?;
        Ok(Self {
            hasher,
            buckets: empty_buckets(capacity),
            len: 0,
            growth_factor,
        })
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of entries, counting every duplicate.
    pub fn len(&self) -> usize {
        self.len
    }
    /// Whether no entry has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Current size of the bucket array; never below `len()`.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
    /// Multiplier applied to the bucket count on each rehash.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Append `(key, value)` to the tail of its bucket's chain.
    ///
    /// When the load factor has reached 1.0 the bucket array is first
    /// rebuilt at `bucket_count * growth_factor`. An existing equal key is
    /// neither replaced nor rejected.
    pub fn insert(&mut self, key: K, value: V) {
        let hash = self.make_hash(&key);
        if self.len == self.buckets.len() {
            let bucket_count = next_bucket_count(self.buckets.len(), self.growth_factor);
            let old = core::mem::take(&mut self.buckets);
            self.buckets = rehash(old, bucket_count);
        }
        let index = bucket_index(hash, self.buckets.len());
        self.buckets[index].push(Entry { key, value, hash });
        self.len += 1;
    }

    /// Value of the first-inserted entry whose key equals `q`, or `None`
    /// when no entry matches. Never fails.
    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(q).map(|e| &e.value)
    }

    /// Like `get`, but yields `V::default()` when the key is absent.
    pub fn get_or_default<Q>(&self, q: &Q) -> V
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone + Default,
    {
        self.get(q).cloned().unwrap_or_default()
    }

    /// Whether any entry's key equals `q`.
    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(q).is_some()
    }

    fn find<Q>(&self, q: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        self.buckets[bucket_index(hash, self.buckets.len())]
            .iter()
            .find(|e| e.hash == hash && e.key.borrow() == q)
    }

    /// Iterate all entries: buckets in index order, each chain in
    /// insertion order. Holds a shared borrow of the map.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: <&[Entry<K, V>]>::default().iter(),
            remaining: self.len,
        }
    }
}

#[inline]
fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    // The remainder is below `bucket_count`, so it always fits back in usize.
    (hash % bucket_count as u64) as usize
}

fn next_bucket_count(bucket_count: usize, growth_factor: usize) -> usize {
    match bucket_count.checked_mul(growth_factor) {
        Some(n) => n,
        None => panic!("capacity overflow"),
    }
}

fn empty_buckets<K, V>(n: usize) -> Box<[Chain<K, V>]> {
    core::iter::repeat_with(Vec::new).take(n).collect()
}

/// Move every entry of `old`, in iteration order, into a new array of
/// `bucket_count` chains.
fn rehash<K, V>(old: Box<[Chain<K, V>]>, bucket_count: usize) -> Box<[Chain<K, V>]> {
    let mut buckets = empty_buckets(bucket_count);
    for entry in old.into_vec().into_iter().flatten() {
        buckets[bucket_index(entry.hash, bucket_count)].push(entry);
    }
    buckets
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> fmt::Debug for ChainedHashMap<K, V, S>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over the entries of a `ChainedHashMap`.
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Chain<K, V>>,
    chain: core::slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                self.remaining -= 1;
                return Some((&e.key, &e.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
