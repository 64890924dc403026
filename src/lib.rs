//! ## About
//!
//! Lazy traversal of *implicit* trees: instead of building a tree, callers provide one or
//! more roots and a function that expands a node into its children. The traversals
//! enumerate the reachable nodes on demand, in depth-first (pre- or post-order) or
//! breadth-first order, and never call the expansion for a node before it is needed.
//!
//! ```
//! use traverse::{breadth_first, depth_first};
//!
//! let split = |word: &String| -> Vec<String> {
//!     if word.len() < 2 {
//!         vec![]
//!     } else {
//!         vec![word[..word.len() - 1].to_string(), word[1..].to_string()]
//!     }
//! };
//! let pre_order: Vec<String> = depth_first("abc".to_string(), split, false).collect();
//! assert_eq!(pre_order, ["abc", "ab", "a", "b", "bc", "b", "c"]);
//! let post_order: Vec<String> = depth_first("abc".to_string(), split, true).collect();
//! assert_eq!(post_order, ["a", "b", "ab", "b", "c", "bc", "abc"]);
//! let levels: Vec<String> = breadth_first("abc".to_string(), split).collect();
//! assert_eq!(levels, ["abc", "ab", "bc", "a", "b", "b", "c"]);
//! ```
//!
//! Structures may be infinite; stop consuming to bound them. Cycles are not detected.
//!
//! ## Fallible expansions
//!
//! The `try_` functions accept an expansion returning `Result<C, E>` where `C` implements
//! [Children], a pull-based sequence that may fail to produce an element or to release
//! itself. Each child sequence is released exactly once, whether the traversal is
//! exhausted, dropped early or ended by a fault. Faults are yielded as `Err(E)` and end
//! the traversal.
//!
//! A traversal is advanced through `&mut self` and therefore by one consumer at a time.
//! Independent traversals share no state.
//!
//! ## Naming conventions
//! * Traits – capabilities ([Children])
//! * Structs – the iterators implementing a traversal
//! * Functions – the traversal order, prefixed by `try_` for fallible expansions and
//!               suffixed by `_roots` for several roots

pub mod along;
pub mod breadth;
pub mod children;
pub mod depth;
pub mod errors;
pub mod root;
pub mod traverse;

#[cfg(test)]
mod dummy;

pub use along::{along, Along};
pub use breadth::{breadth_first, breadth_first_roots, try_breadth_first, try_breadth_first_roots, BreadthFirstIterator};
pub use children::{Children, Fallible, Plain};
pub use depth::{depth_first, depth_first_roots, try_depth_first, try_depth_first_roots, DepthFirstIterator};
pub use errors::TraverseError;
pub use root::SingleRoot;
pub use traverse::{Order, Traversal, Traverse};
