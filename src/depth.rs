//! Depth-first traversal (pre-order and post-order) of implicit trees.
//!
//! The engine keeps a stack with one frame per open ancestor. A frame owns the node it was
//! expanded from and the child sequence produced by that expansion, so post-order can
//! yield a node when its frame is exhausted without re-visiting anything.

use crate::{
    children::{Nodes, Plain},
    Children, SingleRoot,
};
use std::{convert::Infallible, iter::FusedIterator};
use tracing::{debug, trace, warn};
use tracing_attributes::instrument;

struct Frame<T, C> {
    node: T,
    children: C,
}

/// Lazy depth-first iterator over the trees spanned by a sequence of roots.
///
/// Multiple roots are traversed one after another, which is the same as concatenating
/// the traversals of the individual roots. Yields `Err` once if the expansion, a child
/// sequence or the release of a child sequence fails; the iterator is fused afterwards.
///
/// Every child sequence is released exactly once: when it is exhausted, when the
/// iterator is [closed](DepthFirstIterator::close) or dropped, or when a fault unwinds
/// the stack. If several releases fail during an unwind, the failure of the outermost
/// frame is kept.
///
/// Iterating requires `T: Clone` in both orders, although only pre-order clones: the
/// yielded node is kept to be expanded on the next request. For heavy nodes traverse
/// `&Node`, `Rc<Node>` or indices instead.
pub struct DepthFirstIterator<T, R, F, C>
where
    C: Children<Item = T>,
{
    roots: R,
    expand: F,
    stack: Vec<Frame<T, C>>,
    /// Pre-order: the node yielded last, expanded on the next request
    pending: Option<T>,
    post_order: bool,
    done: bool,
}

impl<T, R, F, C> DepthFirstIterator<T, R, F, C>
where
    C: Children<Item = T>,
{
    pub fn new<S>(roots: S, expand: F, post_order: bool) -> Self
    where
        S: IntoIterator<IntoIter = R>,
    {
        DepthFirstIterator {
            roots: roots.into_iter(),
            expand,
            stack: Vec::new(),
            pending: None,
            post_order,
            done: false,
        }
    }

    pub fn is_post_order(&self) -> bool {
        self.post_order
    }

    /// Number of open frames, i.e., the distance of the current position from its root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Ends the traversal early and releases every open child sequence.
    pub fn close(mut self) -> Result<(), C::Error> {
        self.done = true;
        self.unwind()
    }

    /// Pops and releases all frames, innermost first. Returns the last failure, which
    /// belongs to the outermost frame that failed.
    #[instrument(level = "trace", skip_all)]
    fn unwind(&mut self) -> Result<(), C::Error> {
        self.pending = None;
        let mut outcome = Ok(());
        while let Some(mut frame) = self.stack.pop() {
            if let Err(err) = frame.children.release() {
                debug!(depth = self.stack.len(), "release failed during unwind");
                outcome = Err(err);
            }
        }
        outcome
    }
}

impl<T, R, F, C, E> DepthFirstIterator<T, R, F, C>
where
    T: Clone,
    R: Iterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    fn descend(&mut self, node: T) -> Result<(), E> {
        let children = (self.expand)(&node)?;
        self.stack.push(Frame { node, children });
        trace!(depth = self.stack.len(), "descended");
        Ok(())
    }

    fn step(&mut self) -> Result<Option<T>, E> {
        if let Some(node) = self.pending.take() {
            self.descend(node)?;
        }
        loop {
            let discovered = match self.stack.last_mut() {
                Some(frame) => frame.children.advance()?,
                None => match self.roots.next() {
                    Some(root) => Some(root),
                    None => return Ok(None),
                },
            };
            match discovered {
                Some(node) if self.post_order => self.descend(node)?,
                Some(node) => {
                    self.pending = Some(node.clone());
                    return Ok(Some(node));
                }
                None => {
                    // popped before releasing so a failed release is not attempted again
                    if let Some(mut frame) = self.stack.pop() {
                        frame.children.release()?;
                        trace!(depth = self.stack.len(), "backtracked");
                        if self.post_order {
                            return Ok(Some(frame.node));
                        }
                    }
                }
            }
        }
    }
}

impl<T, R, F, C, E> Iterator for DepthFirstIterator<T, R, F, C>
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
                debug!(depth = self.stack.len(), "depth-first traversal failed, releasing open frames");
                Some(Err(self.unwind().err().unwrap_or(fault)))
            }
        }
    }
}

impl<T, R, F, C, E> FusedIterator for DepthFirstIterator<T, R, F, C>
where
    T: Clone,
    R: Iterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
}

impl<T, R, F, C> Drop for DepthFirstIterator<T, R, F, C>
where
    C: Children<Item = T>,
{
    fn drop(&mut self) {
        if self.unwind().is_err() {
            warn!("discarding release failure of an abandoned depth-first traversal");
        }
    }
}

/// Fallible depth-first traversal of the tree below `root`.
///
/// Pre-order yields a node before its children and calls `expand` for it only once the
/// next element is requested. Post-order yields a node after all of its descendants.
pub fn try_depth_first<T, F, C, E>(root: T, expand: F, post_order: bool) -> DepthFirstIterator<T, SingleRoot<T>, F, C>
where
    T: Clone,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    DepthFirstIterator::new(SingleRoot::new(root), expand, post_order)
}

/// Fallible depth-first traversal of the trees below each of `roots`, one after another.
pub fn try_depth_first_roots<T, S, F, C, E>(
    roots: S,
    expand: F,
    post_order: bool,
) -> DepthFirstIterator<T, S::IntoIter, F, C>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    DepthFirstIterator::new(roots, expand, post_order)
}

/// Depth-first traversal of the tree below `root` with an expansion that cannot fail.
///
/// ```
/// let chain = traverse::depth_first(3, |&n: &u32| (0..n).rev().take(1), false);
/// assert_eq!(chain.collect::<Vec<_>>(), [3, 2, 1, 0]);
/// ```
pub fn depth_first<T, F, I>(root: T, mut expand: F, post_order: bool) -> impl FusedIterator<Item = T>
where
    T: Clone,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    Nodes::new(try_depth_first(
        root,
        move |node: &T| Ok::<_, Infallible>(Plain::<_, Infallible>::new(expand(node))),
        post_order,
    ))
}

/// Depth-first traversal of the trees below each of `roots` with an expansion that cannot fail.
pub fn depth_first_roots<T, S, F, I>(roots: S, mut expand: F, post_order: bool) -> impl FusedIterator<Item = T>
where
    T: Clone,
    S: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    Nodes::new(try_depth_first_roots(
        roots,
        move |node: &T| Ok::<_, Infallible>(Plain::<_, Infallible>::new(expand(node))),
        post_order,
    ))
}
