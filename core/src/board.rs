use alloc::collections::BTreeSet;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cell grid plus the set of atoms still waiting to be found.
///
/// The grid keeps `Atom` cells for the whole game; only `atoms` shrinks when
/// a guess lands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellKind>,
    atoms: BTreeSet<Position>,
}

impl Board {
    pub fn new(atoms: &[Position]) -> Result<Self> {
        let mut atom_set = BTreeSet::new();
        for &atom in atoms {
            if !is_interior(atom) || !atom_set.insert(atom) {
                return Err(GameError::InvalidAtomPlacement(atom));
            }
        }

        let size = usize::from(BOARD_SIZE);
        let cells = Array2::from_shape_fn([size, size], |(row, col)| {
            // size fits in Coord, so both casts are lossless
            let pos = (row as Coord, col as Coord);
            if is_corner(pos) {
                CellKind::Corner
            } else if is_border(pos) {
                CellKind::BorderFresh
            } else if atom_set.contains(&pos) {
                CellKind::Atom
            } else {
                CellKind::Interior
            }
        });

        Ok(Self {
            cells,
            atoms: atom_set,
        })
    }

    pub fn validate_coords(&self, pos: Position) -> Result<Position> {
        if in_bounds(pos) {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// # Panics
    ///
    /// Panics if `pos` is off the board; use [`Board::try_kind_at`] for
    /// unchecked input.
    pub fn kind_at(&self, pos: Position) -> CellKind {
        self[pos]
    }

    pub fn try_kind_at(&self, pos: Position) -> Result<CellKind> {
        let pos = self.validate_coords(pos)?;
        Ok(self[pos])
    }

    /// Flips a fresh border cell to visited.
    ///
    /// Calling this on anything but a non-corner border cell is a bug in the
    /// caller; debug builds assert on it.
    pub fn mark_visited(&mut self, pos: Position) -> MarkOutcome {
        debug_assert!(is_border(pos), "{pos:?} is not a border cell");

        let cell = &mut self.cells[pos.to_nd_index()];
        match *cell {
            CellKind::BorderFresh => {
                *cell = CellKind::BorderVisited;
                MarkOutcome::Changed
            }
            _ => MarkOutcome::NoChange,
        }
    }

    /// Drops `pos` from the atom set. The cell itself stays `Atom`.
    pub fn remove_atom(&mut self, pos: Position) -> bool {
        self.atoms.remove(&pos)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the neighbor at `offset` from `pos` holds an atom.
    pub(crate) fn atom_at_offset(&self, pos: Position, offset: (i8, i8)) -> bool {
        apply_delta(pos, offset).is_some_and(|neighbor| self[neighbor] == CellKind::Atom)
    }
}

impl Index<Position> for Board {
    type Output = CellKind;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
