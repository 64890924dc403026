//! Builder that collects the parts of a traversal, validates them up front and picks the
//! engine for the requested [Order].

use crate::{BreadthFirstIterator, Children, DepthFirstIterator, TraverseError};
use std::iter::FusedIterator;

/// Order of iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Depth-first, parents before their children
    #[default]
    DepthFirst,
    /// Depth-first, children before their parents
    DepthFirstPostOrder,
    BreadthFirst,
}

/// Collects roots, expansion and order of a traversal.
///
/// Parts may be missing while the traversal is assembled (e.g., from optional
/// configuration); [Traverse::build] reports a missing part before anything is iterated.
///
/// ```
/// use traverse::{Order, Plain, Traverse};
///
/// let traversal = Traverse::new()
///     .roots([6u32])
///     .expand(|&n: &u32| Ok::<_, String>(Plain::<_, String>::new((1..n).filter(move |d| n % d == 0))))
///     .order(Order::BreadthFirst)
///     .build()
///     .unwrap();
/// let divisors: Result<Vec<u32>, String> = traversal.collect();
/// assert_eq!(divisors.unwrap(), [6, 1, 2, 3, 1, 1]);
/// ```
pub struct Traverse<R, F> {
    roots: Option<R>,
    expand: Option<F>,
    order: Order,
}

impl<R, F> Default for Traverse<R, F> {
    fn default() -> Self {
        Traverse {
            roots: None,
            expand: None,
            order: Order::default(),
        }
    }
}

impl<R, F> Traverse<R, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(mut self, roots: R) -> Self {
        self.roots = Some(roots);
        self
    }

    pub fn expand(mut self, expand: F) -> Self {
        self.expand = Some(expand);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Checks that roots and expansion are set and creates the traversal. Neither the
    /// roots nor the expansion are touched before the first call to `next`.
    pub fn build<T, C, E>(self) -> Result<Traversal<T, R::IntoIter, F, C>, TraverseError>
    where
        T: Clone,
        R: IntoIterator<Item = T>,
        F: FnMut(&T) -> Result<C, E>,
        C: Children<Item = T, Error = E>,
    {
        let roots = self.roots.ok_or(TraverseError::RootsNotSet)?;
        let expand = self.expand.ok_or(TraverseError::ExpandNotSet)?;
        Ok(match self.order {
            Order::DepthFirst => Traversal::DepthFirst(DepthFirstIterator::new(roots, expand, false)),
            Order::DepthFirstPostOrder => Traversal::DepthFirst(DepthFirstIterator::new(roots, expand, true)),
            Order::BreadthFirst => Traversal::BreadthFirst(BreadthFirstIterator::new(roots, expand)),
        })
    }
}

/// A traversal created by [Traverse::build].
pub enum Traversal<T, R, F, C>
where
    C: Children<Item = T>,
{
    DepthFirst(DepthFirstIterator<T, R, F, C>),
    BreadthFirst(BreadthFirstIterator<T, R, F, C>),
}

impl<T, R, F, C> Traversal<T, R, F, C>
where
    C: Children<Item = T>,
{
    pub fn order(&self) -> Order {
        match self {
            Traversal::DepthFirst(traversal) if traversal.is_post_order() => Order::DepthFirstPostOrder,
            Traversal::DepthFirst(_) => Order::DepthFirst,
            Traversal::BreadthFirst(_) => Order::BreadthFirst,
        }
    }

    /// Ends the traversal early and releases every open child sequence.
    pub fn close(self) -> Result<(), C::Error> {
        match self {
            Traversal::DepthFirst(traversal) => traversal.close(),
            Traversal::BreadthFirst(traversal) => traversal.close(),
        }
    }
}

impl<T, R, F, C, E> Iterator for Traversal<T, R, F, C>
where
    T: Clone,
    R: Iterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::DepthFirst(traversal) => traversal.next(),
            Traversal::BreadthFirst(traversal) => traversal.next(),
        }
    }
}

impl<T, R, F, C, E> FusedIterator for Traversal<T, R, F, C>
where
    T: Clone,
    R: Iterator<Item = T>,
    F: FnMut(&T) -> Result<C, E>,
    C: Children<Item = T, Error = E>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dummy::{halves, Tally},
        Plain,
    };
    use itertools::Itertools;
    use std::{cell::Cell, convert::Infallible, vec};

    type Expansion = fn(&u32) -> Result<Plain<vec::IntoIter<u32>, Infallible>, Infallible>;

    fn expansion(value: &u32) -> Result<Plain<vec::IntoIter<u32>, Infallible>, Infallible> {
        Ok(Plain::new(halves(value)))
    }

    #[test]
    fn test_missing_parts() {
        let missing_roots = Traverse::<Vec<u32>, Expansion>::new().expand(expansion).build();
        assert_eq!(missing_roots.err(), Some(TraverseError::RootsNotSet));

        let missing_expand = Traverse::<Vec<u32>, Expansion>::new().roots(vec![3]).build();
        assert_eq!(missing_expand.err(), Some(TraverseError::ExpandNotSet));

        let nothing = Traverse::<Vec<u32>, Expansion>::new().build();
        assert_eq!(nothing.err(), Some(TraverseError::RootsNotSet));
    }

    #[test]
    fn test_validation_is_eager() {
        let pulled = Cell::new(0);
        let roots = (0..3u32).inspect(|_| pulled.set(pulled.get() + 1));
        let missing_expand = Traverse::<_, Expansion>::new().roots(roots).build();
        assert!(missing_expand.is_err());
        assert_eq!(pulled.get(), 0);
    }

    #[test_log::test]
    fn test_orders() {
        for order in [Order::DepthFirst, Order::DepthFirstPostOrder, Order::BreadthFirst] {
            let traversal = Traverse::new()
                .roots([3, 5, 4])
                .expand(expansion as Expansion)
                .order(order)
                .build()
                .unwrap();
            assert_eq!(traversal.order(), order);

            let expected = match order {
                Order::DepthFirst => crate::depth_first_roots([3, 5, 4], halves, false).collect_vec(),
                Order::DepthFirstPostOrder => crate::depth_first_roots([3, 5, 4], halves, true).collect_vec(),
                Order::BreadthFirst => crate::breadth_first_roots([3, 5, 4], halves).collect_vec(),
            };
            let result: Result<Vec<u32>, Infallible> = traversal.collect();
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_default_order_and_close() {
        let tally = Tally::default();
        let mut traversal = Traverse::new().roots([4]).expand(tally.expansion()).build().unwrap();
        assert_eq!(traversal.order(), Order::DepthFirst);

        assert_eq!(traversal.next(), Some(Ok(4)));
        assert_eq!(traversal.next(), Some(Ok(3)));
        assert_eq!(traversal.close(), Ok(()));
        assert_eq!(tally.opened(), 1);
        assert_eq!(tally.released(), 1);
    }
}
