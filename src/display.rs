//! Rendering the coded text for the player.
//!
//! Solved positions are shown in green; everything else is printed as-is.

use std::fmt::Write as _;

use crossterm::style::Stylize;

use crate::puzzle::PuzzleEngine;

/// Whether to emit ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Color,
    Plain,
}

/// Render the coded text, highlighting solved positions.
#[must_use]
pub fn render(engine: &PuzzleEngine, mode: ColorMode) -> String {
    match mode {
        ColorMode::Plain => engine.coded_text(),
        ColorMode::Color => {
            let mut out = String::with_capacity(engine.coded().len() * 4);
            for (i, &c) in engine.coded().iter().enumerate() {
                if engine.is_solved_at(i) && c != ' ' {
                    // Writing to a String cannot fail
                    let _ = write!(out, "{}", c.green());
                } else {
                    out.push(c);
                }
            }
            out
        }
    }
}
