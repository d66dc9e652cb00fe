use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::slice;

use crate::node::Node;

/// An iterator over the slots of an [`ArrayBackedList`](crate::ArrayBackedList)
/// or a [`LinkedNodeList`](crate::LinkedNodeList).
///
/// Yields `Option<&T>` per slot, so absent values are visited like any other.
///
/// This struct is created by `iter()` on either list.
pub struct Iter<'a, T> {
    source: Source<'a, T>,
}

enum Source<'a, T> {
    Slots(slice::Iter<'a, Option<T>>),
    Nodes {
        front: Option<NonNull<Node<T>>>,
        back: Option<NonNull<Node<T>>>,
        len: usize,
        marker: PhantomData<&'a Node<T>>,
    },
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_slots(slots: &'a [Option<T>]) -> Self {
        Self {
            source: Source::Slots(slots.iter()),
        }
    }

    pub(crate) fn from_nodes(
        head: Option<NonNull<Node<T>>>,
        tail: Option<NonNull<Node<T>>>,
        len: usize,
    ) -> Self {
        Self {
            source: Source::Nodes {
                front: head,
                back: tail,
                len,
                marker: PhantomData,
            },
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        let source = match &self.source {
            Source::Slots(slots) => Source::Slots(slots.clone()),
            Source::Nodes {
                front, back, len, ..
            } => Source::Nodes {
                front: *front,
                back: *back,
                len: *len,
                marker: PhantomData,
            },
        };

        Self { source }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            Source::Slots(slots) => slots.next().map(Option::as_ref),
            Source::Nodes { front, len, .. } => {
                if *len == 0 {
                    return None;
                }

                // SAFETY: `len` counts the nodes still ahead of `front`, all of
                // which are kept alive by the list borrowed for `'a`.
                let node: &'a Node<T> = unsafe { (*front)?.as_ref() };
                *front = node.next();
                *len -= 1;
                Some(node.value())
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            Source::Slots(slots) => slots.next_back().map(Option::as_ref),
            Source::Nodes { back, len, .. } => {
                if *len == 0 {
                    return None;
                }

                // SAFETY: same as `next`, walking from the other end.
                let node: &Node<T> = unsafe { (*back)?.as_ref() };
                *back = node.prev();
                *len -= 1;
                Some(node.value())
            }
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        match &self.source {
            Source::Slots(slots) => slots.len(),
            Source::Nodes { len, .. } => *len,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// SAFETY: `Iter` only hands out shared references into a borrowed list.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::{ArrayBackedList, LinkedNodeList, Sequence};

    #[test]
    fn test_iter_over_slots_yields_every_slot_in_order() {
        let mut list: ArrayBackedList<i32> = ArrayBackedList::new();
        list.append(10);
        list.append(None);
        list.append(30);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.next(), Some(Some(&10)));
        assert_eq!(sut.next(), Some(None));
        assert_eq!(sut.next(), Some(Some(&30)));
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_iter_over_nodes_yields_every_slot_in_order() {
        let mut list: LinkedNodeList<i32> = LinkedNodeList::new();
        list.append(10);
        list.append(None);
        list.append(30);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.next(), Some(Some(&10)));
        assert_eq!(sut.next(), Some(None));
        assert_eq!(sut.next(), Some(Some(&30)));
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_iter_over_nodes_is_double_ended() {
        let mut list: LinkedNodeList<i32> = LinkedNodeList::new();
        for value in 0..5 {
            list.append(value);
        }

        let mut sut = list.iter();
        assert_eq!(sut.next(), Some(Some(&0)));
        assert_eq!(sut.next_back(), Some(Some(&4)));
        assert_eq!(sut.next_back(), Some(Some(&3)));
        assert_eq!(sut.len(), 2);
        assert_eq!(sut.next(), Some(Some(&1)));
        assert_eq!(sut.next(), Some(Some(&2)));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_iter_over_empty_lists() {
        let array: ArrayBackedList<i64> = ArrayBackedList::new();
        let linked: LinkedNodeList<i64> = LinkedNodeList::new();

        assert_eq!(array.iter().next(), None);
        assert_eq!(linked.iter().next(), None);
        assert_eq!(linked.iter().next_back(), None);
        assert_eq!(linked.iter().last(), None);
    }

    #[test]
    fn test_iter_clone_is_independent() {
        let mut list: LinkedNodeList<i32> = LinkedNodeList::new();
        list.append(1);
        list.append(2);

        let mut sut = list.iter();
        sut.next();

        let cloned = sut.clone();
        assert_eq!(sut.collect::<Vec<_>>(), [Some(&2)]);
        assert_eq!(cloned.collect::<Vec<_>>(), [Some(&2)]);
    }
}
