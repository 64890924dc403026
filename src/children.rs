//! Definition of the expansion contract shared by the traversal engines.
//!
//! An expansion turns a node into a [Children] sequence. The engines pull from that
//! sequence one element at a time and release it exactly once when it is exhausted,
//! abandoned or unwound after a fault.

use std::{convert::Infallible, iter::FusedIterator, marker::PhantomData};

/// A pull-based sequence of child nodes that may fail while producing an element or
/// while being released.
///
/// Implementations are handed to the engines by an expansion closure. The engines call
/// [Children::advance] until it reports `Ok(None)` and then call [Children::release] once.
/// If the traversal ends early (the consumer drops the iterator) or faults, `release`
/// is still called exactly once for every sequence that was created.
pub trait Children {
    type Item;
    type Error;

    /// Produce the next child, `Ok(None)` once the sequence is exhausted.
    fn advance(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Release whatever the sequence holds. Called exactly once by the engines, after the
    /// sequence has been removed from the traversal state.
    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<C> Children for Box<C>
where
    C: Children + ?Sized,
{
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).advance()
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        (**self).release()
    }
}

/// Lifts an ordinary iterator into [Children]. Advancing never fails and releasing
/// simply lets the iterator be dropped.
///
/// The error type is a free parameter so plain sequences can be mixed with fallible
/// ones under one expansion closure.
pub struct Plain<I, E> {
    iter: I,
    error: PhantomData<fn() -> E>,
}

impl<I, E> Plain<I, E>
where
    I: Iterator,
{
    pub fn new<S>(sequence: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Plain {
            iter: sequence.into_iter(),
            error: PhantomData,
        }
    }
}

impl<I, E> Children for Plain<I, E>
where
    I: Iterator,
{
    type Item = I::Item;
    type Error = E;

    fn advance(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.iter.next())
    }
}

/// Lifts an iterator of `Result`s into [Children]: an `Err` element is a fault raised
/// while the sequence is being iterated.
pub struct Fallible<I> {
    iter: I,
}

impl<I> Fallible<I> {
    pub fn new<S>(sequence: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Fallible {
            iter: sequence.into_iter(),
        }
    }
}

impl<I, T, E> Children for Fallible<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.iter.next().transpose()
    }
}

/// Adapts a fallible engine into a plain iterator when its error type is uninhabited.
pub(crate) struct Nodes<I> {
    inner: I,
}

impl<I> Nodes<I> {
    pub(crate) fn new(inner: I) -> Self {
        Nodes { inner }
    }
}

impl<I, T> Iterator for Nodes<I>
where
    I: Iterator<Item = Result<T, Infallible>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| match item {
            Ok(node) => node,
            Err(never) => match never {},
        })
    }
}

impl<I, T> FusedIterator for Nodes<I> where I: FusedIterator<Item = Result<T, Infallible>> {}
