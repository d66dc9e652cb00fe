use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::bounds::{check_from_to_index, check_index};
use crate::error::Result;
use crate::node::Node;
use crate::{Iter, Sequence};

/// A doubly-linked list of slots.
///
/// # Features
/// - **Constant time append**: the tail is always at hand.
/// - **Directional lookups**: `get` and `set` walk from the head when the
///   index lies in the first half of the list and from the tail otherwise.
/// - **Single ownership**: the list owns every node along the `next` chain,
///   while the backward links only observe.
///
/// # Example
/// ```rust
/// use seqlist::{LinkedNodeList, Sequence};
///
/// let mut list = LinkedNodeList::new();
/// list.append("Java");
/// list.append("Kotlin");
/// list.append("Groovy");
///
/// assert_eq!(list.get(2), Ok(Some(&"Groovy")));
/// assert!(list.remove_first_occurrence(&"Kotlin"));
/// assert_eq!(list.get(1), Ok(Some(&"Groovy")));
/// assert_eq!(list.len(), 2);
/// ```
pub struct LinkedNodeList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for LinkedNodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedNodeList<T> {
    /// Creates a new, empty `LinkedNodeList`.
    ///
    /// # Example
    /// ```rust
    /// use seqlist::{LinkedNodeList, Sequence};
    ///
    /// let list: LinkedNodeList<i64> = LinkedNodeList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Provides an iterator over the list's slots.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_nodes(self.head, self.tail, self.len)
    }

    /// Returns the first slot, or `None` if the list is empty.
    pub fn front(&self) -> Option<Option<&T>> {
        // SAFETY: `head` points at a live node owned by this list.
        self.head.map(|head| unsafe { head.as_ref() }.value())
    }

    /// Returns the last slot, or `None` if the list is empty.
    pub fn back(&self) -> Option<Option<&T>> {
        // SAFETY: `tail` points at a live node owned by this list.
        self.tail.map(|tail| unsafe { tail.as_ref() }.value())
    }

    fn walks_from_head(&self, index: usize) -> bool {
        index < self.len / 2
    }

    fn locate(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }

        if self.walks_from_head(index) {
            let mut node = self.head?;
            for _ in 0..index {
                // SAFETY: every `next` link points at a live node of this list.
                node = unsafe { node.as_ref() }.next()?;
            }
            return Some(node);
        }

        let mut node = self.tail?;
        for _ in index + 1..self.len {
            // SAFETY: every `prev` link points at a live node of this list.
            node = unsafe { node.as_ref() }.prev()?;
        }
        Some(node)
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        // SAFETY: the node is owned by this list, which `&self` keeps alive.
        self.locate(index).map(|node| unsafe { node.as_ref() })
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        // SAFETY: `&mut self` guarantees no other reference into the chain.
        self.locate(index).map(|mut node| unsafe { node.as_mut() })
    }

    /// Detaches `node` from the chain and hands back ownership of it.
    ///
    /// # Safety
    /// `node` must be a node currently linked into this list, and no reference
    /// into it may be alive.
    unsafe fn unlink(&mut self, mut node: NonNull<Node<T>>) -> Box<Node<T>> {
        // SAFETY: guaranteed by the caller.
        let links = unsafe { node.as_mut() };
        let prev = links.prev_mut().take();
        let next = links.next_mut().take();

        match prev {
            // SAFETY: `prev` is a live node distinct from `node`.
            Some(mut prev) => *unsafe { prev.as_mut() }.next_mut() = next,
            None => self.head = next,
        }

        match next {
            // SAFETY: `next` is a live node distinct from `node`.
            Some(mut next) => *unsafe { next.as_mut() }.prev_mut() = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
        // SAFETY: `node` is no longer reachable from the list.
        unsafe { Node::from_ptr(node) }
    }
}

impl<T> Sequence<T> for LinkedNodeList<T> {
    fn append(&mut self, value: impl Into<Option<T>>) -> bool {
        let node = Node::new(value.into(), self.tail).into_ptr();

        match self.tail {
            // SAFETY: `tail` points at a live node owned by this list.
            Some(mut tail) => *unsafe { tail.as_mut() }.next_mut() = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
        true
    }

    fn remove_first_occurrence<'a>(&mut self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: PartialEq + 'a,
    {
        let value = value.into();

        let mut cursor = self.head;
        while let Some(node) = cursor {
            // SAFETY: `cursor` only ever holds nodes reached from `head`.
            let current = unsafe { node.as_ref() };
            if current.value() == value {
                // SAFETY: `node` was reached from `head`, so it is linked here.
                drop(unsafe { self.unlink(node) });
                return true;
            }

            cursor = current.next();
        }

        false
    }

    fn get(&self, index: isize) -> Result<Option<&T>> {
        let index = check_index(index, self.len)?;
        Ok(self.node(index).and_then(Node::value))
    }

    fn set(&mut self, index: isize, value: impl Into<Option<T>>) -> Result<Option<T>> {
        let index = check_index(index, self.len)?;
        Ok(self
            .node_mut(index)
            .and_then(|node| node.replace(value.into())))
    }

    fn range_copy(&self, from: isize, to: isize) -> Result<Self>
    where
        T: Clone,
    {
        let range = check_from_to_index(from, to, self.len)?;
        trace!(from, to, len = range.len(), "copying range");

        let mut copy = Self::new();
        let mut node = self.locate(range.start);
        for _ in range {
            let Some(current) = node else {
                break;
            };

            // SAFETY: `current` was reached from this list, which `&self` keeps alive.
            let current = unsafe { current.as_ref() };
            copy.append(current.value().cloned());
            node = current.next();
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
        LinkedNodeList::iter(self)
    }
}

impl<T> Drop for LinkedNodeList<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            // SAFETY: each node is reclaimed once, walking forward from `head`.
            let node = unsafe { Node::from_ptr(node) };
            head = node.next();
        }

        self.tail = None;
        self.len = 0;
    }
}

// SAFETY: the list owns every node it points to, like `Box` does.
unsafe impl<T: Send> Send for LinkedNodeList<T> {}
unsafe impl<T: Sync> Sync for LinkedNodeList<T> {}

impl<T: Clone> Clone for LinkedNodeList<T> {
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        for value in self.iter() {
            clone.append(value.cloned());
        }
        clone
    }
}

impl<T: PartialEq> PartialEq for LinkedNodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedNodeList<T> {}

impl<T: Hash> Hash for LinkedNodeList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedNodeList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedNodeList<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
