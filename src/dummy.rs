/*! Dummy trees and child sequences used for testing */

use crate::Children;
use std::{cell::Cell, convert::Infallible, rc::Rc};

/// Splits a number into its rounded-up and rounded-down halves until it reaches one.
pub fn halves(value: &u32) -> Vec<u32> {
    if *value <= 1 {
        vec![]
    } else {
        vec![value.div_ceil(2), value / 2]
    }
}

/// Splits a word into the word without its last and without its first letter.
pub fn shorten(word: &String) -> Vec<String> {
    if word.len() < 2 {
        vec![]
    } else {
        vec![word[..word.len() - 1].to_string(), word[1..].to_string()]
    }
}

/// Counts how child sequences created by [Tally::expansion] are used.
#[derive(Clone, Default)]
pub struct Tally {
    opened: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
    advanced: Rc<Cell<usize>>,
}

impl Tally {
    pub fn opened(&self) -> usize {
        self.opened.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn advanced(&self) -> usize {
        self.advanced.get()
    }

    /// Expansion of `n` into `n - 1` copies of `n - 1`.
    pub fn expansion(&self) -> impl FnMut(&u32) -> Result<Repeat, Infallible> {
        let tally = self.clone();
        move |value: &u32| {
            tally.opened.set(tally.opened.get() + 1);
            let value = value.saturating_sub(1);
            Ok(Repeat {
                value,
                remaining: value,
                tally: tally.clone(),
            })
        }
    }
}

pub struct Repeat {
    value: u32,
    remaining: u32,
    tally: Tally,
}

impl Children for Repeat {
    type Item = u32;
    type Error = Infallible;

    fn advance(&mut self) -> Result<Option<u32>, Infallible> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        self.tally.advanced.set(self.tally.advanced.get() + 1);
        Ok(Some(self.value))
    }

    fn release(&mut self) -> Result<(), Infallible> {
        self.tally.released.set(self.tally.released.get() + 1);
        Ok(())
    }
}

/// A sequence with at most one element whose release always fails. Without a value,
/// advancing fails instead of producing the element.
pub struct Brittle {
    value: Option<u32>,
    started: bool,
    released: Rc<Cell<usize>>,
}

impl Brittle {
    /// Returns the sequence and the number of times it has been released.
    pub fn new(value: Option<u32>) -> (Self, Rc<Cell<usize>>) {
        let released = Rc::new(Cell::new(0));
        let brittle = Brittle {
            value,
            started: false,
            released: released.clone(),
        };
        (brittle, released)
    }
}

impl Children for Brittle {
    type Item = u32;
    type Error = String;

    fn advance(&mut self) -> Result<Option<u32>, String> {
        if self.started {
            return Ok(None);
        }
        self.started = true;
        match self.value {
            Some(value) => Ok(Some(value)),
            None => Err("failed to advance".to_string()),
        }
    }

    fn release(&mut self) -> Result<(), String> {
        self.released.set(self.released.get() + 1);
        match self.value {
            Some(value) => Err(format!("failed to release {value}")),
            None => Err("failed to release".to_string()),
        }
    }
}
