//! The interactive driving loop.
//!
//! A `Session` reads player commands line by line and writes prompts and
//! feedback, so it runs the same against a terminal or in-memory buffers.
//!
//! ## Commands
//!
//! - `?` requests a hint
//! - a single letter starts a guess; a second prompt asks for its substitute
//!
//! Rejected moves are reported and the prompt repeats; they never cost a
//! guess. End of input abandons the current round and ends the session.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::core::{parse_letter, Result};
use crate::display::{render, ColorMode};
use crate::puzzle::{Outcome, PuzzleEngine};

const HINT_COMMAND: &str = "?";

/// What happened on one prompt.
enum Turn {
    Played,
    Abandoned,
}

/// Console session over arbitrary input and output streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    color: ColorMode,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, color: ColorMode) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Consume the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play rounds until the player declines another or input ends.
    ///
    /// `new_engine` is called once per round. Returns each round's outcome;
    /// an abandoned round is recorded as `InProgress`.
    pub fn run<F>(&mut self, mut new_engine: F) -> Result<Vec<Outcome>>
    where
        F: FnMut() -> Result<PuzzleEngine>,
    {
        let mut outcomes = Vec::new();

        loop {
            let mut engine = new_engine()?;
            writeln!(self.output, "\n{engine}")?;

            let outcome = self.play_round(&mut engine)?;
            outcomes.push(outcome);
            writeln!(self.output, "\n{}", engine.snapshot())?;
            info!(round = outcomes.len(), ?outcome, "round finished");

            if outcome == Outcome::InProgress {
                break;
            }
            match self.prompt("\nDo you want to play again? (y/n): ")? {
                Some(answer) if !answer.trim().eq_ignore_ascii_case("n") => {}
                _ => break,
            }
        }

        writeln!(self.output, "\nThank you for playing!")?;
        Ok(outcomes)
    }

    /// Play one puzzle to a win, a loss, or end of input.
    pub fn play_round(&mut self, engine: &mut PuzzleEngine) -> Result<Outcome> {
        while engine.outcome() == Outcome::InProgress {
            let guesses = engine.guesses();
            writeln!(
                self.output,
                "\nGuesses: {}/{}",
                guesses.used() + 1,
                guesses.limit()
            )?;
            writeln!(self.output, "Coded word: {}", render(engine, self.color))?;

            match self.take_turn(engine) {
                Ok(Turn::Played) => {}
                Ok(Turn::Abandoned) => return Ok(Outcome::InProgress),
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "move rejected");
                    writeln!(self.output, "{e}")?;
                    writeln!(
                        self.output,
                        "Please make a valid guess of one letter from A-Z or request a hint using ?."
                    )?;
                }
                Err(e) => return Err(e),
            }
        }

        let phrase = engine.phrase_text();
        match engine.outcome() {
            Outcome::Won => writeln!(
                self.output,
                "\nCongratulations! You've decoded the phrase: {phrase}."
            )?,
            _ => {
                writeln!(self.output, "\nYou've lost the game! Better luck next time.")?;
                writeln!(self.output, "The secret phrase was: {phrase}")?;
            }
        }
        Ok(engine.outcome())
    }

    fn take_turn(&mut self, engine: &mut PuzzleEngine) -> Result<Turn> {
        let Some(command) = self.prompt("Enter a letter to guess or '?' for a hint: ")? else {
            return Ok(Turn::Abandoned);
        };

        if command.trim() == HINT_COMMAND {
            let hints = engine.hints();
            match engine.request_hint()? {
                Some(letter) => writeln!(
                    self.output,
                    "Hint {}/{}: revealed every '{letter}'",
                    hints.used() + 1,
                    hints.limit()
                )?,
                None => writeln!(self.output, "Nothing left to reveal.")?,
            }
            return Ok(Turn::Played);
        }

        let letter = parse_letter(&command)?;
        let prompt = format!("Enter the letter to substitute '{letter}' with: ");
        let Some(answer) = self.prompt(&prompt)? else {
            return Ok(Turn::Abandoned);
        };
        let substitute = parse_letter(&answer)?;

        engine.apply_guess(letter, substitute)?;
        Ok(Turn::Played)
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Derangement;
    use crate::core::PuzzleConfig;
    use std::io::Cursor;

    fn cat_engine() -> PuzzleEngine {
        let d = Derangement::from_permutation("YAXBCDEFGHIJKLMNOPQZRSTUVW").unwrap();
        PuzzleEngine::with_derangement("CAT", d, PuzzleConfig::default()).unwrap()
    }

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), ColorMode::Plain)
    }

    fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_round_won_by_guesses() {
        let mut session = session("x\nc\nY\na\nz\nt\n");
        let mut engine = cat_engine();

        let outcome = session.play_round(&mut engine).unwrap();

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(engine.guesses().used(), 3);
        let out = output(session);
        assert!(out.contains("Guesses: 3/10"));
        assert!(out.contains("Coded word: CAZ"));
        assert!(out.contains("Congratulations! You've decoded the phrase: CAT."));
    }

    #[test]
    fn test_invalid_input_reprompts_without_cost() {
        let mut session = session("xy\nq\nc\n");
        let mut engine = cat_engine();

        let outcome = session.play_round(&mut engine).unwrap();

        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(engine.guesses().used(), 0);
        let out = output(session);
        assert!(out.contains("'xy' is not a single letter from A-Z"));
        assert!(out.contains("letter 'Q' not found in the coded word"));
        assert_eq!(out.matches("Guesses: 1/10").count(), 3);
    }

    #[test]
    fn test_hint_command() {
        let mut session = session("?\n");
        let mut engine = cat_engine();

        session.play_round(&mut engine).unwrap();

        assert_eq!(engine.coded_text(), "CYZ");
        assert!(output(session).contains("Hint 1/3: revealed every 'C'"));
    }
}
