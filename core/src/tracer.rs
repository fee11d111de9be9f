use serde::{Deserialize, Serialize};

use crate::*;

/// Walks rays through a [`Board`] and settles the entry/exit charges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RayTracer {
    max_steps: usize,
}

impl RayTracer {
    pub const fn new() -> Self {
        Self::with_max_steps(MAX_STEPS)
    }

    pub const fn with_max_steps(max_steps: usize) -> Self {
        Self { max_steps }
    }

    /// Fires a ray from the border cell `entry`.
    ///
    /// The path is traced against the unmodified board first; the board and
    /// score are only touched once it terminates, so any error leaves both
    /// unchanged.
    pub fn shoot_ray(
        &self,
        board: &mut Board,
        score: &mut ScoreTracker,
        entry: Position,
    ) -> Result<RayOutcome> {
        let entry = board.validate_coords(entry)?;
        let direction = Direction::inward_from(entry).ok_or(GameError::InvalidEntry(entry))?;

        let outcome = self.trace(board, entry, direction)?;

        if board.mark_visited(entry).has_update() {
            score.charge_visit();
        }
        if let Some(exit) = outcome.exit() {
            if board.mark_visited(exit).has_update() {
                score.charge_visit();
            }
        }

        log::debug!(
            "ray from {:?}: {:?}, score now {}",
            entry,
            outcome,
            score.score()
        );
        Ok(outcome)
    }

    /// Follows a ray from `start` without mutating anything.
    pub fn trace(&self, board: &Board, start: Position, direction: Direction) -> Result<RayOutcome> {
        let mut pos = start;
        let mut direction = direction;

        for _ in 0..self.max_steps {
            pos = direction.step(pos).ok_or_else(|| stray(pos))?;
            log::trace!("ray at {:?} heading {:?}", pos, direction);

            match board[pos] {
                CellKind::Atom => return Ok(RayOutcome::Hit),
                CellKind::BorderFresh | CellKind::BorderVisited => {
                    return Ok(RayOutcome::Exit(pos));
                }
                CellKind::Corner => return Err(stray(pos)),
                // a stacked deflection may have jumped the ray here; it can
                // still land on an atom or the border, but there is no
                // forward cell to inspect neighbors against
                CellKind::Interior if !direction.is_unit() => return Err(stray(pos)),
                CellKind::Interior => direction = turn(board, pos, direction),
            }
        }

        log::error!(
            "ray from {:?} still travelling after {} steps",
            start,
            self.max_steps
        );
        Err(GameError::TraversalOverrun)
    }
}

impl Default for RayTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// New heading at the interior cell `pos`.
///
/// An atom beside or behind the ray reflects it outright. Otherwise every
/// diagonal atom, in inspection order, bends the heading computed so far.
fn turn(board: &Board, pos: Position, direction: Direction) -> Direction {
    let forward = direction.as_delta();
    let reflects = ORTHOGONAL
        .iter()
        .filter(|&&offset| offset != forward)
        .any(|&offset| board.atom_at_offset(pos, offset));

    if reflects {
        return direction.reverse();
    }

    DIAGONAL
        .iter()
        .filter(|&&offset| board.atom_at_offset(pos, offset))
        .fold(direction, |heading, &offset| heading.deflect_away_from(offset))
}

fn stray(pos: Position) -> GameError {
    log::error!("ray left the traversable path at {:?}", pos);
    GameError::StrayRay(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoot(atoms: &[Position], entry: Position) -> (Result<RayOutcome>, Board, ScoreTracker) {
        let mut board = Board::new(atoms).unwrap();
        let mut score = ScoreTracker::default();
        let outcome = RayTracer::new().shoot_ray(&mut board, &mut score, entry);
        (outcome, board, score)
    }

    #[test]
    fn straight_ray_exits_opposite_side() {
        let (outcome, board, score) = shoot(&[(3, 3)], (0, 4));

        assert_eq!(outcome, Ok(RayOutcome::Exit((9, 4))));
        assert_eq!(score.score(), 23);
        assert_eq!(board.kind_at((0, 4)), CellKind::BorderVisited);
        assert_eq!(board.kind_at((9, 4)), CellKind::BorderVisited);
    }

    #[test]
    fn direct_hit_charges_entry_only() {
        let (outcome, _, score) = shoot(&[(5, 5)], (0, 5));

        assert_eq!(outcome, Ok(RayOutcome::Hit));
        assert_eq!(score.score(), 24);
    }

    #[test]
    fn atom_straight_ahead_is_a_hit_not_a_reflection() {
        let (outcome, _, _) = shoot(&[(2, 3)], (0, 3));

        assert_eq!(outcome, Ok(RayOutcome::Hit));
    }

    #[test]
    fn side_atom_reflects_back_to_entry() {
        let (outcome, _, score) = shoot(&[(1, 4)], (0, 3));

        assert_eq!(outcome, Ok(RayOutcome::Exit((0, 3))));
        assert_eq!(score.score(), 24);
    }

    #[test]
    fn diagonal_atom_deflects() {
        let (outcome, _, score) = shoot(&[(3, 4)], (0, 3));

        assert_eq!(outcome, Ok(RayOutcome::Exit((2, 0))));
        assert_eq!(score.score(), 23);
    }

    #[test]
    fn flanking_diagonal_atoms_send_ray_back() {
        let (outcome, _, score) = shoot(&[(3, 2), (3, 4)], (0, 3));

        assert_eq!(outcome, Ok(RayOutcome::Exit((0, 3))));
        assert_eq!(score.score(), 24);
    }

    #[test]
    fn stacked_deflection_jumps_to_border() {
        // (3,4) turns the ray left at (2,3), then (3,3) bends it to (-1,-2)
        let (outcome, board, score) = shoot(&[(3, 3), (3, 4)], (0, 3));

        assert_eq!(outcome, Ok(RayOutcome::Exit((1, 0))));
        assert_eq!(score.score(), 23);
        assert_eq!(board.kind_at((1, 0)), CellKind::BorderVisited);
    }

    #[test]
    fn jump_onto_interior_cell_is_a_stray_ray() {
        // the ray ends up heading (1,2) and lands on (3,5), where no forward
        // cell exists to inspect neighbors against
        let (outcome, board, score) = shoot(&[(1, 1), (1, 2)], (9, 2));

        assert_eq!(outcome, Err(GameError::StrayRay((3, 5))));
        assert_eq!(score.score(), 25);
        assert_eq!(board, Board::new(&[(1, 1), (1, 2)]).unwrap());
    }

    #[test]
    fn separated_atom_pairs_always_resolve() {
        let cells: alloc::vec::Vec<Position> = interior_cells().collect();
        let entries: alloc::vec::Vec<Position> = (1..LAST)
            .flat_map(|i| [(0, i), (LAST, i), (i, 0), (i, LAST)])
            .collect();

        for (i, &a) in cells.iter().enumerate() {
            for &b in &cells[i + 1..] {
                if a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1 {
                    continue;
                }
                for &entry in &entries {
                    let (outcome, _, _) = shoot(&[a, b], entry);
                    assert!(outcome.is_ok(), "{a:?} {b:?} from {entry:?}: {outcome:?}");
                }
            }
        }
    }

    #[test]
    fn orthogonal_atom_takes_precedence_over_diagonal() {
        // at (1,3): (1,4) is beside the ray and (2,2) is ahead-left
        let board = Board::new(&[(1, 4), (2, 2)]).unwrap();

        assert_eq!(turn(&board, (1, 3), Direction::DOWN), Direction::UP);
    }

    #[test]
    fn rays_from_each_side() {
        assert_eq!(shoot(&[], (4, 0)).0, Ok(RayOutcome::Exit((4, 9))));
        assert_eq!(shoot(&[], (4, 9)).0, Ok(RayOutcome::Exit((4, 0))));
        assert_eq!(shoot(&[], (9, 6)).0, Ok(RayOutcome::Exit((0, 6))));
    }

    #[test]
    fn invalid_entries_leave_state_alone() {
        for entry in [(0, 0), (9, 9), (5, 5)] {
            let (outcome, board, score) = shoot(&[(3, 3)], entry);

            assert_eq!(outcome, Err(GameError::InvalidEntry(entry)));
            assert_eq!(score.score(), 25);
            assert_eq!(board, Board::new(&[(3, 3)]).unwrap());
        }

        assert_eq!(shoot(&[], (0, 10)).0, Err(GameError::InvalidCoords));
    }

    #[test]
    fn repeated_shots_charge_each_cell_once() {
        let mut board = Board::new(&[(6, 6)]).unwrap();
        let mut score = ScoreTracker::default();
        let tracer = RayTracer::new();

        for _ in 0..3 {
            let outcome = tracer.shoot_ray(&mut board, &mut score, (0, 2));
            assert_eq!(outcome, Ok(RayOutcome::Exit((9, 2))));
        }
        // entering from the old exit costs nothing either
        tracer.shoot_ray(&mut board, &mut score, (9, 2)).unwrap();

        assert_eq!(score.score(), 23);
    }

    #[test]
    fn step_limit_overrun_is_reported_without_charges() {
        let mut board = Board::new(&[]).unwrap();
        let mut score = ScoreTracker::default();

        let outcome = RayTracer::with_max_steps(4).shoot_ray(&mut board, &mut score, (0, 5));

        assert_eq!(outcome, Err(GameError::TraversalOverrun));
        assert_eq!(score.score(), 25);
        assert_eq!(board.kind_at((0, 5)), CellKind::BorderFresh);
    }
}
