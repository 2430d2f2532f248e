//! Puzzle state engine.
//!
//! `PuzzleEngine` owns the phrase, its coded form and the guess and hint
//! budgets. Callers drive it with `apply_guess` and `request_hint` and
//! poll `is_won`/`is_lost` between moves.

pub mod budget;
pub mod engine;
pub mod history;

pub use budget::Budget;
pub use engine::{Outcome, PuzzleEngine, PuzzleSnapshot};
pub use history::{Move, MoveRecord};
