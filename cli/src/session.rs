use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use blackbox_core::{Game, GameError, GuessOutcome, RayOutcome};

use crate::command::{Command, HELP};

/// Whether the read loop should keep going after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Reads commands from `input` until `quit`, end of input, or every atom is
/// found, writing replies to `output`.
pub fn run(game: &mut Game, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(
        output,
        "{} atoms hidden, score {}. Type `help` for commands.",
        game.atoms_left(),
        game.score()
    )?;

    for line in input.lines() {
        let line = line.context("could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        if execute(game, command, &mut output)? == Flow::Stop {
            break;
        }
    }

    writeln!(output, "Final score: {}", game.score())?;
    Ok(())
}

fn execute(game: &mut Game, command: Command, output: &mut impl Write) -> Result<Flow> {
    match command {
        Command::Shoot(entry) => match game.shoot_ray(entry) {
            Ok(RayOutcome::Exit((row, col))) => writeln!(output, "Exit at {row} {col}")?,
            Ok(RayOutcome::Hit) => writeln!(output, "Hit")?,
            Err(err) => report(err, output)?,
        },
        Command::Guess(pos) => match game.guess_atom(pos) {
            Ok(outcome) if outcome.is_correct() => {
                writeln!(output, "Correct, {} left", game.atoms_left())?;
                if game.is_solved() {
                    writeln!(output, "All atoms found!")?;
                    return Ok(Flow::Stop);
                }
            }
            Ok(GuessOutcome::DuplicateGuess) => writeln!(output, "Already guessed")?,
            Ok(_) => writeln!(output, "Incorrect")?,
            Err(err) => report(err, output)?,
        },
        Command::Score => writeln!(output, "Score: {}", game.score())?,
        Command::Left => writeln!(output, "Atoms left: {}", game.atoms_left())?,
        Command::Board => write!(output, "{game}")?,
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => return Ok(Flow::Stop),
    }
    Ok(Flow::Continue)
}

/// Prints a rejected move. Failed moves leave the game untouched, so the
/// session carries on either way; internal faults are also logged.
fn report(err: GameError, output: &mut impl Write) -> Result<()> {
    if !err.is_recoverable() {
        log::error!("game engine fault: {err}");
    }
    writeln!(output, "{err}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(atoms: &[(u8, u8)], script: &str) -> (Game, String) {
        let mut game = Game::new(atoms).unwrap();
        let mut out = Vec::new();
        run(&mut game, script.as_bytes(), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_a_short_game() {
        let (game, out) = play(&[(3, 3)], "shoot 0 4\nguess 4 4\nguess 3 3\nshoot 0 1\n");

        assert!(out.contains("Exit at 2 9"));
        assert!(out.contains("Incorrect"));
        assert!(out.contains("All atoms found!"));
        // the loop stops once solved, so the last shot never fires
        assert_eq!(game.score(), 25 - 2 - 5);
        assert!(out.ends_with("Final score: 18\n"));
    }

    #[test]
    fn bad_input_keeps_the_game_going() {
        let (game, out) = play(&[(5, 5)], "shoot 0 0\nshoot 5\nbogus\nshoot 0 5\nquit\n");

        assert!(out.contains("non-corner border cell"));
        assert!(out.contains("Expected `shoot ROW COL`"));
        assert!(out.contains("Unknown command `bogus`"));
        assert!(out.contains("Hit"));
        assert_eq!(game.score(), 24);
    }

    #[test]
    fn engine_fault_does_not_end_the_session() {
        let (game, out) = play(&[(1, 1), (1, 2)], "shoot 9 2\nshoot 0 5\nscore\n");

        assert!(out.contains("Ray left the traversable path at (3, 5)"));
        assert!(out.contains("Exit at 9 5"));
        assert_eq!(game.score(), 23);
    }

    #[test]
    fn board_dump_is_printed() {
        let (_, out) = play(&[(1, 1)], "board\n");

        assert!(out.contains("E A . . . . . . . E"));
    }
}
