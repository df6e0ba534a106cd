//! ExpandableArray: contiguous, append-only growable sequence with an
//! explicit growth factor.
//!
//! Storage is a boxed slice of slots. Slots `[0, len)` are occupied; the
//! rest are `None`. Growth allocates a fresh slice of `capacity * factor`
//! slots (or a single slot when starting from zero), moves the live
//! elements over in order and drops the old slice.

use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Index, IndexMut};

pub struct ExpandableArray<T> {
    storage: Box<[Option<T>]>,
    len: usize,
    growth_factor: usize,
}

impl<T> ExpandableArray<T> {
    pub const DEFAULT_CAPACITY: usize = 1;
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;
    pub const MIN_GROWTH_FACTOR: usize = 2;

    /// Create an empty array with room for `initial_capacity` elements.
    ///
    /// Fails with `Error::InvalidArgument` if `growth_factor < 2`. A zero
    /// initial capacity is allowed; the first push then allocates one slot.
    pub fn new(initial_capacity: usize, growth_factor: usize) -> Result<Self> {
        Error::check_at_least("growth_factor", growth_factor, Self::MIN_GROWTH_FACTOR)?;
        Ok(Self {
            storage: empty_slots(initial_capacity),
            len: 0,
            growth_factor,
        })
    }

    /// Number of elements pushed so far.
    pub fn len(&self) -> usize {
        self.len
    }
    /// Whether nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Number of allocated slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }
    /// Multiplier applied to the capacity when a push finds the array full.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Element at `index`, or `Error::IndexOutOfRange` unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.storage[index].as_ref().ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Mutable element at `index`, with the same bounds rule as `get`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let len = self.len;
        self.storage[index]
            .as_mut()
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Overwrite the element at `index`. On error the array is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Append `value`, growing the backing storage first if it is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.storage[self.len] = Some(value);
        self.len += 1;
    }

    /// Iterate the elements in index order.
    ///
    /// The iterator borrows the array, so pushing or assigning while it is
    /// alive is rejected at compile time.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.storage[..self.len].iter(),
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn grow(&mut self) {
        let new_capacity = next_capacity(self.capacity(), self.growth_factor);
        let mut storage = empty_slots(new_capacity);
        for (dst, src) in storage.iter_mut().zip(self.storage[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.storage = storage;
        debug_assert!(self.storage[..self.len].iter().all(Option::is_some));
    }
}

/// Capacity after one growth step. Strictly greater than `capacity`.
fn next_capacity(capacity: usize, growth_factor: usize) -> usize {
    if capacity == 0 {
        return 1;
    }
    match capacity.checked_mul(growth_factor) {
        Some(n) => n,
        None => panic!("capacity overflow"),
    }
}

fn empty_slots<T>(n: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(n).collect()
}

impl<T> Default for ExpandableArray<T> {
    fn default() -> Self {
        Self {
            storage: empty_slots(Self::DEFAULT_CAPACITY),
            len: 0,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ExpandableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for ExpandableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for ExpandableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Extend<T> for ExpandableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ExpandableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::default();
        array.extend(iter);
        array
    }
}

/// Iterator over the elements of an `ExpandableArray`, in index order.
pub struct Iter<'a, T> {
    slots: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ExpandableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
