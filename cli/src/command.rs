use std::str::FromStr;

use blackbox_core::{Coord, Position};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Shoot(Position),
    Guess(Position),
    Score,
    Left,
    Board,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("Expected `{0} ROW COL`")]
    MissingCoords(&'static str),
    #[error("Not a coordinate: `{0}`")]
    BadCoord(String),
    #[error("Unexpected trailing input `{0}`")]
    Trailing(String),
}

pub const HELP: &str = "\
commands:
  shoot ROW COL   fire a ray from a border cell
  guess ROW COL   claim an atom sits at a cell
  score           show the current score
  left            show how many atoms are still hidden
  board           dump the board (spoils the game)
  help            show this message
  quit            leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "shoot" | "s" => Self::Shoot(coords(&mut words, "shoot")?),
            "guess" | "g" => Self::Guess(coords(&mut words, "guess")?),
            "score" => Self::Score,
            "left" => Self::Left,
            "board" => Self::Board,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(verb.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    verb: &'static str,
) -> Result<Position, CommandError> {
    let row = words.next().ok_or(CommandError::MissingCoords(verb))?;
    let col = words.next().ok_or(CommandError::MissingCoords(verb))?;
    Ok((coord(row)?, coord(col)?))
}

fn coord(word: &str) -> Result<Coord, CommandError> {
    word.parse().map_err(|_| CommandError::BadCoord(word.to_owned()))
}

/// Parses `ROW,COL`, as taken by `--atom`.
pub fn parse_position(text: &str) -> Result<Position, CommandError> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| CommandError::BadCoord(text.to_owned()))?;
    Ok((coord(row.trim())?, coord(col.trim())?))
}
