//! expandable-collections: a growable array and a separately chained hash
//! map, each with an explicit, caller-chosen growth factor.
//!
//! Containers
//! - `ExpandableArray<T>`: contiguous slots, bounds-checked indexed access,
//!   append-only growth. A full array grows to `capacity * growth_factor`
//!   (a zero-capacity array grows to one slot).
//! - `ChainedHashMap<K, V>`: bucket array of chains. When the entry count
//!   reaches the bucket count the whole table is rebuilt at
//!   `bucket_count * growth_factor` buckets.
//!
//! Constraints
//! - No internal locking. Both containers are `Send`/`Sync` when their
//!   element types are; concurrent mutation needs external synchronization
//!   such as a `Mutex`.
//! - No removal. Both containers only grow.
//! - Keys need `Eq + Hash`; hashing uses `hashbrown`'s default builder and
//!   is not configurable.
//! - Duplicate keys are kept, not rejected or overwritten. Lookups see the
//!   earliest inserted entry; later ones are shadowed but still counted
//!   and still yielded by iteration.
//!
//! Iteration borrows the container, so growing it while an iterator is
//! alive does not compile.
//!
//! Errors
//! - `Error::InvalidArgument` from constructors (growth factor below 2,
//!   map capacity below 2).
//! - `Error::IndexOutOfRange` from array `get`/`get_mut`/`set`.
//! Missing map keys are reported as `None`, never as an error.

pub mod chained_hash_map;
mod chained_hash_map_proptest;
mod error;
pub mod expandable_array;

// Public surface
pub use chained_hash_map::ChainedHashMap;
pub use error::{Error, Result};
pub use expandable_array::ExpandableArray;
