use super::status::{self, SquareShade};
use crate::chess_board::ChessField;
use crate::game::{Feedback, Game};
use circular_buffer::CircularBuffer;
use std::io::{self, BufRead, Write};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::debug;

const MESSAGE_LOG: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Click(Option<ChessField>),
    Clear,
    Redraw,
    Quit,
}

impl Command {
    /// A square name is a click; anything else that is not a command counts as a click off the board.
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" => Command::Redraw,
            "c" => Command::Clear,
            "q" | "quit" | "exit" => Command::Quit,
            other => Command::Click(ChessField::from_algebraic(other).ok()),
        }
    }
}

/// Line-driven front end: reads squares and commands from `input`, draws the board to `output`.
pub struct TerminalSession<R, W> {
    input: R,
    output: W,
    messages: CircularBuffer<MESSAGE_LOG, String>,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            messages: CircularBuffer::new(),
        }
    }

    /// Runs until a quit command or the end of input.
    pub fn run(&mut self, game: &mut Game) -> io::Result<()> {
        writeln!(self.output, "{}", status::TITLE)?;
        writeln!(self.output, "{}", status::LEGEND)?;
        writeln!(self.output, "Enter a square (e.g. e2) to select or move, c to clear, r to redraw, q to quit.")?;
        self.draw(game)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = Command::parse(&line);
            debug!(?command, "terminal input");
            match command {
                Command::Quit => break,
                Command::Redraw => {}
                Command::Clear => self.log(game.clear_selection()),
                Command::Click(field) => self.log(game.click(field)),
            }
            self.draw(game)?;
        }
        writeln!(self.output, "Bye")?;
        Ok(())
    }

    fn log(&mut self, feedback: Feedback) {
        self.messages.push_back(feedback.to_string());
    }

    fn draw(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.output, "{}", render_board(game))?;
        writeln!(self.output, "{}", status::turn_line(game))?;
        for line in status::selection_lines(game) {
            writeln!(self.output, "{}", line)?;
        }
        for message in self.messages.iter() {
            writeln!(self.output, "  {}", message)?;
        }
        Ok(())
    }
}

/// Renders the board as a table, rank 8 on top.
pub fn render_board(game: &Game) -> String {
    let files: Vec<String> = ('A'..='H').map(String::from).collect();
    let mut builder = Builder::default();

    builder.push_record(std::iter::once(String::new()).chain(files.iter().cloned()));
    for row in (0..8u8).rev() {
        let rank = (row + 1).to_string();
        let cells = (0..8u8).map(|col| render_cell(game, ChessField::new(row, col)));
        builder.push_record(std::iter::once(rank.clone()).chain(cells).chain(std::iter::once(rank)));
    }
    builder.push_record(std::iter::once(String::new()).chain(files));

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

fn render_cell(game: &Game, field: ChessField) -> String {
    let glyph = game.board().piece_at(field).map(|piece| piece.glyph());
    match (SquareShade::of(game, field), glyph) {
        (SquareShade::Selected, Some(g)) => format!("[{}]", g),
        (SquareShade::Capture, Some(g)) => format!("x{}", g),
        (SquareShade::Move, _) => "o".to_string(),
        (_, Some(g)) => g.to_string(),
        (SquareShade::Dark, None) => ".".to_string(),
        (_, None) => String::new(),
    }
}
