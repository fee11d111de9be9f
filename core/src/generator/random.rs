use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Places `count` distinct atoms uniformly over the interior, reproducibly
/// for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomAtomGenerator {
    seed: u64,
    count: usize,
}

impl RandomAtomGenerator {
    pub fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }
}

impl AtomGenerator for RandomAtomGenerator {
    fn generate(self) -> Vec<Position> {
        let mut free: Vec<Position> = interior_cells().collect();

        let count = if self.count > free.len() {
            log::warn!(
                "Interior already full, requested {} atoms but only fits {}",
                self.count,
                free.len()
            );
            free.len()
        } else {
            self.count
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut atoms = Vec::with_capacity(count);
        for _ in 0..count {
            let pick = rng.random_range(0..free.len());
            atoms.push(free.swap_remove(pick));
        }
        atoms.sort_unstable();

        log::debug!("generated {} atoms from seed {}", atoms.len(), self.seed);
        atoms
    }
}
