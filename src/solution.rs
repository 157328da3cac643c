use std::fmt;

use crate::color::Coloring;

/// default maximum number of stored solutions
pub const DEFAULT_NB_SOLUTIONS: usize = 100;

/** raised when the solution store would overflow its fixed capacity.
Surfaced immediately to the caller: silently dropping solutions would corrupt
the completeness expectations of an exhaustive enumeration. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// configured maximum number of solutions
    pub capacity: usize,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "solution store capacity exceeded ({} solutions)", self.capacity)
    }
}

impl std::error::Error for CapacityExceeded {}

/** ordered store of the colorings found during a search.
Solutions are appended during the search and never mutated afterwards. */
#[derive(Debug)]
pub struct SolutionStore {
    colorings: Vec<Coloring>,
    capacity: usize,
}

impl SolutionStore {

    /// creates a store holding at most `capacity` solutions
    pub fn with_capacity(capacity: usize) -> Self {
        Self { colorings: Vec::new(), capacity }
    }

    /// appends a coloring, or fails if the store is full
    pub fn record(&mut self, coloring: Coloring) -> Result<(), CapacityExceeded> {
        if self.colorings.len() == self.capacity {
            return Err(CapacityExceeded { capacity: self.capacity });
        }
        self.colorings.push(coloring);
        Ok(())
    }

    /// number of stored solutions
    pub fn len(&self) -> usize { self.colorings.len() }

    /// true iff no solution was recorded
    pub fn is_empty(&self) -> bool { self.colorings.is_empty() }

    /// stored solutions, in discovery order
    pub fn colorings(&self) -> &[Coloring] { &self.colorings }

    /// consumes the store, yielding the solutions in discovery order
    pub fn into_colorings(self) -> Vec<Coloring> { self.colorings }
}

impl Default for SolutionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_NB_SOLUTIONS)
    }
}
