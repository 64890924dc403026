//! Breadth-first traversal of implicit trees.

use crate::{
    children::{Nodes, Plain},
    Children, SingleRoot,
};
use std::{collections::VecDeque, convert::Infallible, iter::FusedIterator};
use tracing::{debug, trace, warn};
use tracing_attributes::instrument;

/// Lazy breadth-first iterator over the trees spanned by a sequence of roots.
///
/// All roots come first, then their children in root order, then the grandchildren and
/// so on. Nodes are queued when they are yielded and expanded only once every node
/// discovered before them has been drained, so at most one child sequence is open at a
/// time.
pub struct BreadthFirstIterator<T, R, F, C>
where
    C: Children<Item = T>,
{
    roots: Option<R>,
    expand: F,
    /// Child sequence being drained
    current: Option<C>,
    /// Yielded nodes waiting for their expansion, in discovery order
    queue: VecDeque<T>,
    done: bool,
}

impl<T, R, F, C> BreadthFirstIterator<T, R, F, C>
where
    C: Children<Item = T>,
{
    pub fn new<S>(roots: S, expand: F) -> Self
    where
        S: IntoIterator<IntoIter = R>,
    {
        BreadthFirstIterator {
            roots: Some(roots.into_iter()),
            expand,
            current: None,
            queue: VecDeque::new(),
            done: false,
        }
    }

    /// Number of yielded nodes that have not been expanded yet.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Ends the traversal early and releases the open child sequence, if any.
    pub fn close(mut self) -> Result<(), C::Error> {
        self.done = true;
        self.unwind()
    }

    #[instrument(level = "trace", skip_all)]
    fn unwind(&mut self) -> Result<(), C::Error> {
        self.roots = None;
        self.queue.clear();
        match self.current.take() {
            Some(mut children) => children.release(),
            None => Ok(()),
        }
    }
}

impl<T, R, F, C, E> BreadthFirstIterator<T, R, F, C>
where
    T: Clone,
    R: Iterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    fn step(&mut self) -> Result<Option<T>, E> {
        if let Some(roots) = &mut self.roots {
            if let Some(root) = roots.next() {
                self.queue.push_back(root.clone());
                return Ok(Some(root));
            }
            self.roots = None;
        }
        loop {
            if let Some(children) = &mut self.current {
                if let Some(child) = children.advance()? {
                    self.queue.push_back(child.clone());
                    return Ok(Some(child));
                }
                // taken before releasing so a failed release is not attempted again
                if let Some(mut exhausted) = self.current.take() {
                    exhausted.release()?;
                }
            }
            let Some(node) = self.queue.pop_front() else {
                return Ok(None);
            };
            trace!(queued = self.queue.len(), "expanding");
            self.current = Some((self.expand)(&node)?);
        }
    }
}

impl<T, R, F, C, E> Iterator for BreadthFirstIterator<T, R, F, C>
where
    T: Clone,
    R: Iterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.step() {
            Ok(Some(node)) => Some(Ok(node)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(fault) => {
                self.done = true;
                debug!(queued = self.queue.len(), "breadth-first traversal failed");
                Some(Err(self.unwind().err().unwrap_or(fault)))
            }
        }
    }
}

impl<T, R, F, C, E> FusedIterator for BreadthFirstIterator<T, R, F, C>
where
    T: Clone,
    R: Iterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
}

impl<T, R, F, C> Drop for BreadthFirstIterator<T, R, F, C>
where
    C: Children<Item = T>,
{
    fn drop(&mut self) {
        if self.unwind().is_err() {
            warn!("discarding release failure of an abandoned breadth-first traversal");
        }
    }
}

/// Fallible breadth-first traversal of the tree below `root`.
pub fn try_breadth_first<T, F, C, E>(root: T, expand: F) -> BreadthFirstIterator<T, SingleRoot<T>, F, C>
where
    T: Clone,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    BreadthFirstIterator::new(SingleRoot::new(root), expand)
}

/// Fallible breadth-first traversal of the forest below `roots`.
pub fn try_breadth_first_roots<T, S, F, C, E>(roots: S, expand: F) -> BreadthFirstIterator<T, S::IntoIter, F, C>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    BreadthFirstIterator::new(roots, expand)
}

/// Breadth-first traversal of the tree below `root` with an expansion that cannot fail.
pub fn breadth_first<T, F, I>(root: T, mut expand: F) -> impl FusedIterator<Item = T>
where
    T: Clone,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    Nodes::new(try_breadth_first(root, move |node: &T| {
        Ok::<_, Infallible>(Plain::<_, Infallible>::new(expand(node)))
    }))
}

/// Breadth-first traversal of the forest below `roots` with an expansion that cannot fail.
///
/// ```
/// let levels = traverse::breadth_first_roots([2, 3], |&n: &u32| if n > 1 { vec![n - 1] } else { vec![] });
/// assert_eq!(levels.collect::<Vec<_>>(), [2, 3, 1, 2, 1]);
/// ```
pub fn breadth_first_roots<T, S, F, I>(roots: S, mut expand: F) -> impl FusedIterator<Item = T>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    Nodes::new(try_breadth_first_roots(roots, move |node: &T| {
        Ok::<_, Infallible>(Plain::<_, Infallible>::new(expand(node)))
    }))
}
