use crate::core::{Board, Outcome};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// 盤面を描画する
///
/// Rows are the three cells joined by `" | "`, each followed by a rule of
/// nine dashes. Empty squares print as a space.
pub fn render_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "{}", board)?;
    out.flush()
}

pub fn render_status<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.bold().yellow())
}

pub fn render_outcome<W: Write>(out: &mut W, outcome: Outcome) -> io::Result<()> {
    let msg = outcome.to_string();
    match outcome {
        Outcome::Draw => writeln!(out, "{}", msg.bold()),
        _ => writeln!(out, "{}", msg.bold().green()),
    }
}
