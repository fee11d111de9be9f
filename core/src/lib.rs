#![no_std]

extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use score::*;
pub use tracer::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod score;
mod tracer;
mod types;

/// Scoring rules. Missing fields fall back to the classic values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub initial_score: i32,
    /// Cost of the first visit to any border cell, as entry or exit.
    pub visit_cost: i32,
    /// Cost of each distinct wrong guess.
    pub miss_penalty: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_score: 25,
            visit_cost: 1,
            miss_penalty: 5,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Where a ray ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RayOutcome {
    Exit(Position),
    Hit,
}

impl RayOutcome {
    pub const fn exit(self) -> Option<Position> {
        match self {
            Self::Exit(pos) => Some(pos),
            Self::Hit => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    DuplicateGuess,
}

impl GuessOutcome {
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// A running game: the hidden board and the player's score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    score: ScoreTracker,
    tracer: RayTracer,
}

impl Game {
    pub fn new(atoms: &[Position]) -> Result<Self> {
        Self::with_config(GameConfig::default(), atoms)
    }

    pub fn with_config(config: GameConfig, atoms: &[Position]) -> Result<Self> {
        let board = Board::new(atoms)?;
        log::debug!("new game with {} atoms, {:?}", board.atom_count(), config);
        Ok(Self {
            board,
            score: ScoreTracker::new(config),
            tracer: RayTracer::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shoot_ray(&mut self, entry: Position) -> Result<RayOutcome> {
        self.tracer.shoot_ray(&mut self.board, &mut self.score, entry)
    }

    pub fn guess_atom(&mut self, pos: Position) -> Result<GuessOutcome> {
        self.score.guess_atom(&mut self.board, pos)
    }

    pub fn score(&self) -> i32 {
        self.score.score()
    }

    pub fn atoms_left(&self) -> usize {
        self.score.atoms_left(&self.board)
    }

    pub fn is_solved(&self) -> bool {
        self.atoms_left() == 0
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
