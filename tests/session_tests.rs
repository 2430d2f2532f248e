//! Session integration tests.
//!
//! These tests feed scripted player input through the console loop and
//! check the transcript and round outcomes.

use std::io::Cursor;

use codewords::{
    ColorMode, Derangement, Outcome, PuzzleConfig, PuzzleEngine, PuzzleError, Session,
};

const CAT_KEY: &str = "YAXBCDEFGHIJKLMNOPQZRSTUVW";

fn cat_engine() -> codewords::Result<PuzzleEngine> {
    let d = Derangement::from_permutation(CAT_KEY)?;
    PuzzleEngine::with_derangement("CAT", d, PuzzleConfig::default())
}

fn play(input: &str) -> (codewords::Result<Vec<Outcome>>, String) {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), ColorMode::Plain);
    let result = session.run(cat_engine);
    let transcript = String::from_utf8(session.into_output()).unwrap();
    (result, transcript)
}

// =============================================================================
// Rounds
// =============================================================================

/// Test a single won round followed by declining to play again.
#[test]
fn test_win_then_quit() {
    let (result, transcript) = play("x\nc\ny\na\nz\nt\nn\n");

    assert_eq!(result.unwrap(), vec![Outcome::Won]);
    assert!(transcript.contains("Welcome to CodeWords!\nCoded word: XYZ"));
    assert!(transcript.contains("Congratulations! You've decoded the phrase: CAT."));
    assert!(transcript.contains("CodeWords(phrase: CAT, coded: XYZ, guesses: 3/10, hints: 0/3)"));
    assert!(transcript.ends_with("Thank you for playing!\n"));
}

/// Test that anything but "n" starts another round.
#[test]
fn test_play_again() {
    let (result, transcript) = play("?\n?\n?\ny\n?\n?\n?\nN\n");

    assert_eq!(result.unwrap(), vec![Outcome::Won, Outcome::Won]);
    assert_eq!(transcript.matches("Welcome to CodeWords!").count(), 2);
}

/// Test a lost round reports the phrase.
#[test]
fn test_loss() {
    let mut input = String::new();
    for i in 0..10 {
        input.push_str(if i % 2 == 0 { "x\nq\n" } else { "q\nx\n" });
    }
    input.push_str("n\n");

    let (result, transcript) = play(&input);

    assert_eq!(result.unwrap(), vec![Outcome::Lost]);
    assert!(transcript.contains("Guesses: 10/10"));
    assert!(!transcript.contains("Guesses: 11/10"));
    assert!(transcript.contains("You've lost the game! Better luck next time."));
    assert!(transcript.contains("The secret phrase was: CAT"));
}

/// Test that running out of hints is reported and the game continues.
#[test]
fn test_hint_budget_message() {
    let d = Derangement::from_permutation(CAT_KEY).unwrap();
    let config = PuzzleConfig::new().with_hint_limit(1);
    let mut session = Session::new(Cursor::new("?\n?\n"), Vec::new(), ColorMode::Plain);

    let outcome = session
        .run(|| PuzzleEngine::with_derangement("CAT", d, config))
        .unwrap();

    let transcript = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(outcome, vec![Outcome::InProgress]);
    assert!(transcript.contains("all 1 hints have been used"));
}

// =============================================================================
// End of Input
// =============================================================================

/// Test that input ending mid-round abandons the round and the session.
#[test]
fn test_eof_mid_round() {
    let (result, transcript) = play("x\n");

    assert_eq!(result.unwrap(), vec![Outcome::InProgress]);
    assert!(transcript.contains("Enter the letter to substitute 'X' with: "));
    assert!(transcript.ends_with("Thank you for playing!\n"));
}

/// Test that input ending at the replay prompt ends the session.
#[test]
fn test_eof_at_replay_prompt() {
    let (result, _) = play("?\n?\n?\n");
    assert_eq!(result.unwrap(), vec![Outcome::Won]);
}

// =============================================================================
// Fatal Errors
// =============================================================================

/// Test that engine construction errors end the session.
#[test]
fn test_factory_error_propagates() {
    let mut session = Session::new(Cursor::new(""), Vec::new(), ColorMode::Plain);

    let err = session
        .run(|| Err(PuzzleError::EmptyCorpus))
        .unwrap_err();

    assert!(matches!(err, PuzzleError::EmptyCorpus));
}
