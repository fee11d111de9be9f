use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// Running score and the set of coordinates the player has guessed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    config: GameConfig,
    score: i32,
    guessed: BTreeSet<Position>,
}

impl ScoreTracker {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            score: config.initial_score,
            guessed: BTreeSet::new(),
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn atoms_left(&self, board: &Board) -> usize {
        board.atom_count()
    }

    pub fn has_guessed(&self, pos: Position) -> bool {
        self.guessed.contains(&pos)
    }

    /// Charges the first visit of a border cell.
    pub fn charge_visit(&mut self) {
        self.score -= self.config.visit_cost;
    }

    pub fn guess_atom(&mut self, board: &mut Board, pos: Position) -> Result<GuessOutcome> {
        let pos = board.validate_coords(pos)?;

        if board.kind_at(pos) == CellKind::Atom {
            if board.remove_atom(pos) {
                log::debug!("atom found at {:?}, {} left", pos, board.atom_count());
            }
            self.guessed.insert(pos);
            return Ok(GuessOutcome::Correct);
        }

        Ok(if self.guessed.insert(pos) {
            self.score -= self.config.miss_penalty;
            log::debug!("wrong guess at {:?}, score now {}", pos, self.score);
            GuessOutcome::Incorrect
        } else {
            GuessOutcome::DuplicateGuess
        })
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
