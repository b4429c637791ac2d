//! Nim under the normal play convention: players alternately remove one or
//! more sticks from a single heap, and whoever takes the last stick wins.
//!
//! The environment is pure. Every transition returns a new [`Heaps`].

mod heaps;
mod take;

pub use heaps::*;
pub use take::*;
