//! Tabular storage for Monte Carlo control.
//!
//! - [`Table`]: action values keyed by (Heaps, Take)
//! - [`Visits`]: first-visit counts, the denominator of the running mean
//! - [`Disk`]: persistence of trained tables

mod disk;
mod values;
mod visits;

pub use disk::*;
pub use values::*;
pub use visits::*;

use crate::*;
