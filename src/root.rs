//! Lifts a single root into the multi-root sequence the engines consume.

use std::mem;

enum RootState<T> {
    Pending(T),
    Yielded,
    Exhausted,
}

/// One-shot sequence holding exactly one root.
///
/// Yields the root, then reports the end once. The engines never restart their root
/// sequence, so pulling from a `SingleRoot` after it has reported its end is a bug in the
/// caller and panics.
pub struct SingleRoot<T> {
    state: RootState<T>,
}

impl<T> SingleRoot<T> {
    pub fn new(root: T) -> Self {
        SingleRoot {
            state: RootState::Pending(root),
        }
    }
}

impl<T> Iterator for SingleRoot<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.state, RootState::Exhausted) {
            RootState::Pending(root) => {
                self.state = RootState::Yielded;
                Some(root)
            }
            RootState::Yielded => None,
            RootState::Exhausted => panic!("single root sequence can only be iterated once"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            RootState::Pending(_) => (1, Some(1)),
            _ => (0, Some(0)),
        }
    }
}
