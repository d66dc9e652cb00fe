use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::bounds::{check_from_to_index, check_index};
use crate::error::{Error, Result};
use crate::{Iter, Sequence};

/// A growable list backed by one contiguous buffer of slots.
///
/// # Features
/// - **Indexed access**: `get` and `set` are O(1).
/// - **Amortized append**: the buffer grows to `capacity * 3 / 2 + 1` slots
///   whenever the next write would leave no spare slot behind it.
/// - **Absent values**: slots hold `Option<T>`, and `None` is stored like any
///   other value.
///
/// # Example
/// ```rust
/// use seqlist::{ArrayBackedList, Sequence};
///
/// let mut list = ArrayBackedList::new();
/// list.append("Java");
/// list.append(None);
/// list.append("Spring");
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1), Ok(None));
///
/// assert_eq!(list.set(2, "Spring2"), Ok(Some("Spring")));
/// assert!(list.remove_first_occurrence(&"Java"));
/// assert_eq!(list.get(1), Ok(Some(&"Spring2")));
/// ```
pub struct ArrayBackedList<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for ArrayBackedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayBackedList<T> {
    /// Number of slots allocated by [`ArrayBackedList::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates an empty list with [`Self::DEFAULT_CAPACITY`] slots.
    ///
    /// # Example
    /// ```rust
    /// use seqlist::{ArrayBackedList, Sequence};
    ///
    /// let list: ArrayBackedList<i64> = ArrayBackedList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::with_slots(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` slots.
    ///
    /// A capacity of zero is allowed; the first append grows the buffer.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `capacity` is negative.
    ///
    /// # Example
    /// ```rust
    /// use seqlist::{ArrayBackedList, Error};
    ///
    /// let list: ArrayBackedList<i64> = ArrayBackedList::with_capacity(4).unwrap();
    /// assert_eq!(list.capacity(), 4);
    ///
    /// assert_eq!(
    ///     ArrayBackedList::<i64>::with_capacity(-1).err(),
    ///     Some(Error::InvalidArgument { capacity: -1 })
    /// );
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        match usize::try_from(capacity) {
            Ok(capacity) => Ok(Self::with_slots(capacity)),
            Err(_) => {
                debug!(capacity, "rejecting negative capacity hint");
                Err(Error::InvalidArgument { capacity })
            }
        }
    }

    fn with_slots(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self { slots, len: 0 }
    }

    /// Returns the number of slots in the backing buffer.
    ///
    /// Always at least `len()`; the slots past `len()` hold nothing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Provides an iterator over the list's slots.
    ///
    /// # Example
    /// ```rust
    /// use seqlist::{ArrayBackedList, Sequence};
    ///
    /// let mut list = ArrayBackedList::new();
    /// list.append(0);
    /// list.append(None);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(Some(&0)));
    /// assert_eq!(iter.next(), Some(None));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_slots(&self.slots[..self.len])
    }

    /// Returns the first slot, or `None` if the list is empty.
    pub fn front(&self) -> Option<Option<&T>> {
        self.iter().next()
    }

    /// Returns the last slot, or `None` if the list is empty.
    pub fn back(&self) -> Option<Option<&T>> {
        self.iter().next_back()
    }

    // Grows one slot early: after this the slot at `len` is writable and at
    // least one more slot sits behind it, except when starting from zero.
    fn grow_if_needed(&mut self) {
        let capacity = self.capacity();
        if self.len + 1 < capacity {
            return;
        }

        let new_capacity = capacity * 3 / 2 + 1;
        trace!(capacity, new_capacity, "growing backing storage");
        self.slots.resize_with(new_capacity, || None);
    }

    fn position(&self, value: Option<&T>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_ref() == value)
    }
}

impl<T> Sequence<T> for ArrayBackedList<T> {
    fn append(&mut self, value: impl Into<Option<T>>) -> bool {
        self.grow_if_needed();
        self.slots[self.len] = value.into();
        self.len += 1;
        true
    }

    fn remove_first_occurrence<'a>(&mut self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: PartialEq + 'a,
    {
        let Some(index) = self.position(value.into()) else {
            return false;
        };

        // The emptied slot rotates to the end of the live range, which then
        // becomes the cleared trailing slot.
        self.slots[index] = None;
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        true
    }

    fn get(&self, index: isize) -> Result<Option<&T>> {
        let index = check_index(index, self.len)?;
        Ok(self.slots[index].as_ref())
    }

    fn set(&mut self, index: isize, value: impl Into<Option<T>>) -> Result<Option<T>> {
        let index = check_index(index, self.len)?;
        Ok(std::mem::replace(&mut self.slots[index], value.into()))
    }

    fn range_copy(&self, from: isize, to: isize) -> Result<Self>
    where
        T: Clone,
    {
        let range = check_from_to_index(from, to, self.len)?;
        trace!(from, to, len = range.len(), "copying range");

        let mut copy = Self::with_slots(range.len() * 3 / 2 + 1);
        for slot in &self.slots[range] {
            copy.append(slot.clone());
        }

        Ok(copy)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = Option<&'a T>>
    where
        T: 'a,
    {
        ArrayBackedList::iter(self)
    }
}

impl<T: Clone> Clone for ArrayBackedList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayBackedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayBackedList<T> {}

impl<T: Hash> Hash for ArrayBackedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayBackedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ArrayBackedList<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
