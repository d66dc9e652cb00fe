use std::ptr::NonNull;

/// A link in a [`LinkedNodeList`](crate::LinkedNodeList).
///
/// Nodes live on the heap behind raw pointers handed out by [`Node::into_ptr`].
/// The list frees each one exactly once through [`Node::from_ptr`], walking the
/// `next` links, so `prev` only ever observes.
pub struct Node<T> {
    value: Option<T>,
    prev: Option<NonNull<Node<T>>>,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: Option<T>, prev: Option<NonNull<Node<T>>>) -> Self {
        Self {
            value,
            prev,
            next: None,
        }
    }

    /// Moves the node to the heap and releases it as a raw pointer.
    #[inline]
    pub fn into_ptr(self) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(self)))
    }

    /// Takes back ownership of a node released by [`Node::into_ptr`].
    ///
    /// # Safety
    /// `ptr` must come from [`Node::into_ptr`], must not have been reclaimed
    /// yet, and no reference into the node may outlive this call.
    #[inline]
    pub unsafe fn from_ptr(ptr: NonNull<Node<T>>) -> Box<Node<T>> {
        // SAFETY: guaranteed by the caller.
        unsafe { Box::from_raw(ptr.as_ptr()) }
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub fn replace(&mut self, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn prev(&self) -> Option<NonNull<Node<T>>> {
        self.prev
    }

    #[inline]
    pub fn prev_mut(&mut self) -> &mut Option<NonNull<Node<T>>> {
        &mut self.prev
    }

    #[inline]
    pub fn next(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    #[inline]
    pub fn next_mut(&mut self) -> &mut Option<NonNull<Node<T>>> {
        &mut self.next
    }
}
