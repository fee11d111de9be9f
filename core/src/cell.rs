use serde::{Deserialize, Serialize};

/// What occupies a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Interior,
    BorderFresh,
    BorderVisited,
    Corner,
    Atom,
}

impl CellKind {
    pub const fn symbol(self) -> char {
        match self {
            Self::Interior => '.',
            Self::BorderFresh => 'E',
            Self::BorderVisited => 'e',
            Self::Corner => 'X',
            Self::Atom => 'A',
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Interior
    }
}
