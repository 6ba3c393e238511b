use crate::core::{Board, Mark, Move};
use crate::error::InputError;
use crate::logic::validate_move;
use crate::player::PlayerController;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const ROW_PROMPT: &str = "Enter row (0, 1, 2): ";
pub const COL_PROMPT: &str = "Enter column (0, 1, 2): ";

/// Human player on stdin/stdout.
pub struct ConsoleController {
    mark: Mark,
    name: String,
}

impl ConsoleController {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

impl PlayerController for ConsoleController {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&self, board: &Board) -> anyhow::Result<Option<Move>> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        read_move(&mut input, &mut out, board)
    }
}

/// 行・列を入力させ、合法な着手が得られるまで繰り返す
///
/// Asks for a row and then a column. Anything that is not a number, out of
/// range, or on an occupied square prints a message and restarts both
/// prompts. Returns `Ok(None)` once input is exhausted.
pub fn read_move<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    board: &Board,
) -> anyhow::Result<Option<Move>> {
    loop {
        let Some(row) = prompt(input, out, ROW_PROMPT)? else {
            return Ok(None);
        };
        let row = match parse_number(&row) {
            Ok(n) => n,
            Err(e) => {
                report(out, &e)?;
                continue;
            }
        };

        let Some(col) = prompt(input, out, COL_PROMPT)? else {
            return Ok(None);
        };
        let col = match parse_number(&col) {
            Ok(n) => n,
            Err(e) => {
                report(out, &e)?;
                continue;
            }
        };

        match validate_move(board, row, col) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => report(out, &e)?,
        }
    }
}

pub fn parse_number(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn report<W: Write>(out: &mut W, err: &InputError) -> anyhow::Result<()> {
    debug!(?err, "rejected input");
    writeln!(out, "{}", err.to_string().red())?;
    Ok(())
}
