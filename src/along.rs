//! Follows a chain of single successors, e.g., the sources of a nested error.

use std::{iter::FusedIterator, mem};

enum Link<T> {
    Start(Option<T>),
    After(T),
    End,
}

/// Iterator returned by [along].
pub struct Along<T, F> {
    link: Link<T>,
    next: F,
}

impl<T, F> Iterator for Along<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = match mem::replace(&mut self.link, Link::End) {
            Link::Start(start) => start,
            Link::After(previous) => (self.next)(&previous),
            Link::End => None,
        }?;
        self.link = Link::After(node.clone());
        Some(node)
    }
}

impl<T, F> FusedIterator for Along<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
}

/// Yields `start` and then the successors returned by `next` until it returns `None`.
/// `next` is called for a node only when the element after it is requested.
///
/// ```
/// let halvings: Vec<u32> = traverse::along(Some(12), |n| (n % 2 == 0).then(|| n / 2)).collect();
/// assert_eq!(halvings, [12, 6, 3]);
/// ```
pub fn along<T, F>(start: Option<T>, next: F) -> Along<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    Along {
        link: Link::Start(start),
        next,
    }
}
