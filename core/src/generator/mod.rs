use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait AtomGenerator {
    fn generate(self) -> Vec<Position>;
}

/// Every cell an atom may occupy, in row-major order.
pub fn interior_cells() -> impl Iterator<Item = Position> {
    (1..LAST).flat_map(|row| (1..LAST).map(move |col| (row, col)))
}
