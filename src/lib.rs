//! # seqlist
//!
//! `seqlist` provides two ordered, mutable sequence containers that honour the
//! same contract:
//!
//! - [`ArrayBackedList`]: contiguous growable storage with O(1) indexed access
//!   and amortized O(1) append.
//! - [`LinkedNodeList`]: a doubly-linked node chain with O(1) append and index
//!   lookups that walk from whichever end is closer.
//!
//! The shared capability set lives in the [`Sequence`] trait, so code and tests
//! can be written once and run against either variant.
//!
//! ## Absent values
//! Every slot holds an `Option<T>`. `None` is a regular value: it can be stored
//! any number of times, it equals only another `None`, and it contributes `0`
//! to [`Sequence::hash_code`]. Accessing a slot that does not exist is an
//! [`Error::IndexOutOfRange`], never a `None`.
//!
//! ## Example
//! ```rust
//! use seqlist::{ArrayBackedList, LinkedNodeList, Sequence};
//!
//! let mut array = ArrayBackedList::new();
//! let mut linked = LinkedNodeList::new();
//!
//! for value in ["Java", "Kotlin", "Groovy"] {
//!     array.append(value);
//!     linked.append(value);
//! }
//! linked.append(None);
//!
//! assert_eq!(array.get(1), Ok(Some(&"Kotlin")));
//! assert_eq!(linked.get(3), Ok(None));
//! assert!(linked.get(4).is_err());
//!
//! assert!(linked.remove_first_occurrence(None));
//! assert_eq!(array.hash_code(), linked.hash_code());
//! ```

mod array_list;
mod bounds;
mod error;
mod iter;
mod linked_list;
mod node;

pub use array_list::ArrayBackedList;
pub use error::{Bounds, Error, Result};
pub use iter::Iter;
pub use linked_list::LinkedNodeList;

use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash};

/// The capability set shared by every list in this crate.
///
/// Indices are signed so that a negative index is a reportable error rather
/// than something the caller has to prevent up front.
pub trait Sequence<T> {
    /// Appends `value` at index `len()`. Always returns `true`.
    fn append(&mut self, value: impl Into<Option<T>>) -> bool;

    /// Removes the lowest-index slot equal to `value`, shifting later slots
    /// down by one.
    ///
    /// Returns `false`, leaving the list untouched, when nothing matches.
    fn remove_first_occurrence<'a>(&mut self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: PartialEq + 'a;

    /// Returns the value stored at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index < 0` or `index >= len()`.
    fn get(&self, index: isize) -> Result<Option<&T>>;

    /// Replaces the value stored at `index`, returning the previous one.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index < 0` or `index >= len()`.
    fn set(&mut self, index: isize, value: impl Into<Option<T>>) -> Result<Option<T>>;

    /// Copies the slots in `[from, to)` into a new, independent list of the
    /// same kind.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `from < 0`, `to > len()` or `from > to`.
    fn range_copy(&self, from: isize, to: isize) -> Result<Self>
    where
        Self: Sized,
        T: Clone;

    /// Returns the number of slots in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every slot in index order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = Option<&'a T>>
    where
        T: 'a;

    /// Returns `true` if some slot equals `value`.
    fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: PartialEq + 'a,
    {
        let value = value.into();
        self.iter().any(|slot| slot == value)
    }

    /// Order-sensitive hash of the contents.
    ///
    /// Starts from `1` and folds every slot as `acc * 31 + h`, where `h` is `0`
    /// for an absent value. Lists that compare equal hash equal.
    fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        hash_combine(self.iter())
    }
}

pub(crate) fn hash_combine<'a, T>(slots: impl IntoIterator<Item = Option<&'a T>>) -> u64
where
    T: Hash + 'a,
{
    let hasher = BuildHasherDefault::<DefaultHasher>::default();

    slots.into_iter().fold(1, |acc: u64, slot| {
        let hash = slot.map_or(0, |value| hasher.hash_one(value));
        acc.wrapping_mul(31).wrapping_add(hash)
    })
}
