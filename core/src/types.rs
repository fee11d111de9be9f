use serde::{Deserialize, Serialize};

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Board coordinates `(row, col)`.
pub type Position = (Coord, Coord);

/// Width and height of the board, border included.
pub const BOARD_SIZE: Coord = 10;

/// Last row/column index, the far border.
pub const LAST: Coord = BOARD_SIZE - 1;

/// Upper bound on walk steps, one per cell.
pub const MAX_STEPS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

pub const CORNERS: [Position; 4] = [(0, 0), (0, LAST), (LAST, 0), (LAST, LAST)];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((row, col): Position) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

pub const fn is_interior((row, col): Position) -> bool {
    row >= 1 && row < LAST && col >= 1 && col < LAST
}

pub const fn is_corner((row, col): Position) -> bool {
    (row == 0 || row == LAST) && (col == 0 || col == LAST)
}

/// Non-corner cell on the outer ring.
pub const fn is_border(pos: Position) -> bool {
    in_bounds(pos) && !is_interior(pos) && !is_corner(pos)
}

/// Applies `delta` to `pos`, returning a value only when it stays on the board.
pub fn apply_delta(pos: Position, delta: (i8, i8)) -> Option<Position> {
    let (row, col) = pos;
    let (dr, dc) = delta;

    let next_row = row.checked_add_signed(dr)?;
    let next_col = col.checked_add_signed(dc)?;
    let next = (next_row, next_col);

    in_bounds(next).then_some(next)
}

/// Heading of a ray as a `(row, col)` step.
///
/// Rays enter along unit vectors. Folding several diagonal deflections can
/// leave that set; the ray still takes that step, but only a unit heading can
/// be turned again, which is what [`Direction::is_unit`] is for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub row: i8,
    pub col: i8,
}

impl Direction {
    pub const DOWN: Self = Self::new(1, 0);
    pub const UP: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(0, -1);

    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Heading a ray takes when fired from the border cell `entry`.
    ///
    /// Rows are checked before columns; corners and interior cells have no
    /// inward heading.
    pub const fn inward_from(entry: Position) -> Option<Self> {
        if !is_border(entry) {
            return None;
        }
        Some(match entry {
            (0, _) => Self::DOWN,
            (LAST, _) => Self::UP,
            (_, 0) => Self::RIGHT,
            _ => Self::LEFT,
        })
    }

    pub const fn reverse(self) -> Self {
        Self::new(-self.row, -self.col)
    }

    /// Points away from a neighbor sitting at `offset` from the current cell.
    pub const fn deflect_away_from(self, offset: (i8, i8)) -> Self {
        Self::new(self.row - offset.0, self.col - offset.1)
    }

    pub const fn is_unit(self) -> bool {
        matches!((self.row, self.col), (1, 0) | (-1, 0) | (0, 1) | (0, -1))
    }

    pub const fn as_delta(self) -> (i8, i8) {
        (self.row, self.col)
    }

    /// Cell one step ahead of `pos`, if it is on the board.
    pub fn step(self, pos: Position) -> Option<Position> {
        apply_delta(pos, self.as_delta())
    }
}

/// Cardinal neighbor offsets in inspection order: down, up, right, left.
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal neighbor offsets in inspection order.
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_ring_cells() {
        assert!(is_corner((0, 0)));
        assert!(is_corner((LAST, LAST)));
        assert!(!is_border((0, LAST)));
        assert!(is_border((0, 4)));
        assert!(is_border((7, LAST)));
        assert!(is_interior((1, 8)));
        assert!(!is_interior((9, 4)));
        assert!(!is_border((10, 4)));
    }

    #[test]
    fn inward_heading_prefers_rows() {
        assert_eq!(Direction::inward_from((0, 4)), Some(Direction::DOWN));
        assert_eq!(Direction::inward_from((LAST, 4)), Some(Direction::UP));
        assert_eq!(Direction::inward_from((4, 0)), Some(Direction::RIGHT));
        assert_eq!(Direction::inward_from((4, LAST)), Some(Direction::LEFT));
        assert_eq!(Direction::inward_from((0, 0)), None);
        assert_eq!(Direction::inward_from((4, 4)), None);
    }

    #[test]
    fn deflection_points_away_from_atom() {
        // moving down, atom ahead-right turns the ray left
        assert_eq!(Direction::DOWN.deflect_away_from((1, 1)), Direction::LEFT);
        assert_eq!(Direction::DOWN.deflect_away_from((1, -1)), Direction::RIGHT);
        assert_eq!(Direction::RIGHT.deflect_away_from((-1, 1)), Direction::DOWN);
        assert!(!Direction::DOWN.deflect_away_from((-1, 1)).is_unit());
    }

    #[test]
    fn step_stays_on_board() {
        assert_eq!(Direction::UP.step((0, 3)), None);
        assert_eq!(Direction::LEFT.step((3, 0)), None);
        assert_eq!(Direction::DOWN.step((LAST, 3)), None);
        assert_eq!(Direction::RIGHT.step((3, 3)), Some((3, 4)));
        assert_eq!(Direction::DOWN.reverse(), Direction::UP);
    }
}
