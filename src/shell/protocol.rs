use super::error::ShellError;
use super::options::ShellOptions;
use crate::core::board::{Board, Color, Square};
use crate::core::error::BoardError;
use crate::game::geometry::{Highlight, Shade, turn_banner};
use crate::game::state::{AppliedMove, ClickOutcome, GameState, Selection};
use std::fmt;
use std::io::{self, BufRead, Write};

/// One parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    Pixel { x: u32, y: u32 },
    Display,
    Moves,
    Turn,
    Fen,
    Setup { placement: String, turn: Color },
    NewGame,
    SetOption { name: String, value: String },
    Options,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, ShellError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = parts.first() else {
            return Err(ShellError::UnknownCommand(String::new()));
        };

        match first.to_lowercase().as_str() {
            "click" => Ok(Command::Click(parse_square(&parts[1..])?)),
            "pixel" => {
                let x = parts.get(1).ok_or(ShellError::MissingArgument("pixel"))?;
                let y = parts.get(2).ok_or(ShellError::MissingArgument("pixel"))?;
                Ok(Command::Pixel {
                    x: parse_number(x)?,
                    y: parse_number(y)?,
                })
            }
            "d" | "display" => Ok(Command::Display),
            "moves" => Ok(Command::Moves),
            "turn" => Ok(Command::Turn),
            "fen" => Ok(Command::Fen),
            "setup" => {
                let placement = parts.get(1).ok_or(ShellError::MissingArgument("setup"))?;
                let turn = match parts.get(2).map(|s| s.to_lowercase()).as_deref() {
                    None | Some("w") | Some("white") => Color::White,
                    Some("b") | Some("black") => Color::Black,
                    Some(other) => {
                        return Err(ShellError::InvalidValue {
                            name: "turn".to_string(),
                            value: other.to_string(),
                        });
                    }
                };
                Ok(Command::Setup {
                    placement: placement.to_string(),
                    turn,
                })
            }
            "new" | "newgame" => Ok(Command::NewGame),
            "setoption" => parse_setoption(&parts),
            "options" => Ok(Command::Options),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => match parse_square(&parts) {
                Ok(sq) => Ok(Command::Click(sq)),
                Err(_) => Err(ShellError::UnknownCommand(first.to_string())),
            },
        }
    }
}

/// `e2`, or numeric `row col`
fn parse_square(args: &[&str]) -> Result<Square, ShellError> {
    match args {
        [] => Err(ShellError::MissingArgument("click")),
        [name] => Ok(name.parse::<Square>()?),
        [row, col] => {
            let row: i32 = row
                .parse()
                .map_err(|_| ShellError::InvalidNumber(row.to_string()))?;
            let col: i32 = col
                .parse()
                .map_err(|_| ShellError::InvalidNumber(col.to_string()))?;
            Square::try_new(row, col).ok_or_else(|| {
                ShellError::Board(BoardError::InvalidSquare(format!("{row} {col}")))
            })
        }
        _ => Err(BoardError::InvalidSquare(args.join(" ")).into()),
    }
}

fn parse_number(s: &str) -> Result<u32, ShellError> {
    s.parse().map_err(|_| ShellError::InvalidNumber(s.to_string()))
}

fn parse_setoption(parts: &[&str]) -> Result<Command, ShellError> {
    let mut name = String::new();
    let mut value = String::new();
    let mut in_name = false;
    let mut in_value = false;

    for part in parts.iter().skip(1) {
        match *part {
            "name" => { in_name = true; in_value = false; }
            "value" => { in_name = false; in_value = true; }
            _ => {
                if in_name { if !name.is_empty() { name.push(' '); } name.push_str(part); }
                else if in_value { if !value.is_empty() { value.push(' '); } value.push_str(part); }
            }
        }
    }

    if name.is_empty() {
        return Err(ShellError::MissingArgument("setoption"));
    }
    Ok(Command::SetOption { name, value })
}

/// Line-oriented front end over a [`GameState`]
pub struct Shell {
    pub game: GameState,
    options: ShellOptions,
}

impl Shell {
    pub fn new() -> Self {
        Shell {
            game: GameState::new(),
            options: ShellOptions::default(),
        }
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Serve stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Command::parse(line) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut out)?,
                Err(e) => writeln!(out, "error: {}", e)?,
            }
            out.flush()?;
        }
        out.flush()
    }

    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::Click(sq) => self.cmd_click(sq, out),
            Command::Pixel { x, y } => match self.options.geometry().square_at(x, y) {
                Some(sq) => self.cmd_click(sq, out),
                None => self.log(out, format_args!("click at ({x}, {y}) is outside the board")),
            },
            Command::Display => write!(out, "{}", render(&self.game)),
            Command::Moves => self.cmd_moves(out),
            Command::Turn => writeln!(out, "{}", turn_banner(self.game.turn())),
            Command::Fen => writeln!(out, "{} {}", self.game.board().placement(), turn_char(self.game.turn())),
            Command::Setup { placement, turn } => self.cmd_setup(&placement, turn, out),
            Command::NewGame => {
                self.game.reset();
                self.log(out, format_args!("new game"))?;
                writeln!(out, "{}", turn_banner(self.game.turn()))
            }
            Command::SetOption { name, value } => match self.options.apply(&name, &value) {
                Ok(()) => Ok(()),
                Err(e) => writeln!(out, "error: {}", e),
            },
            Command::Options => {
                for (name, value) in self.options.entries() {
                    writeln!(out, "option {} = {}", name, value)?;
                }
                Ok(())
            }
            Command::Help => self.cmd_help(out),
            Command::Quit => Ok(()),
        }
    }

    fn cmd_click<W: Write>(&mut self, sq: Square, out: &mut W) -> io::Result<()> {
        match self.game.click(sq) {
            ClickOutcome::Ignored => {
                self.log(out, format_args!("no {} piece on {}", self.game.turn(), sq))
            }
            ClickOutcome::Selected(selection) => {
                self.log(out, format_args!("selected {} on {}", selection.piece, selection.square))?;
                if self.options.show_moves {
                    write_destinations(&selection, out)?;
                }
                Ok(())
            }
            ClickOutcome::Moved(applied) => {
                self.log_move(&applied, out)?;
                writeln!(out, "{}", turn_banner(self.game.turn()))
            }
            ClickOutcome::Rejected { from, to } => {
                self.log(out, format_args!("illegal move {} -> {}", from, to))
            }
        }
    }

    fn log_move<W: Write>(&self, mv: &AppliedMove, out: &mut W) -> io::Result<()> {
        match mv.captured {
            Some(captured) => self.log(
                out,
                format_args!("{} {} -> {} captures {}", mv.piece, mv.from, mv.to, captured),
            )?,
            None => self.log(out, format_args!("{} {} -> {}", mv.piece, mv.from, mv.to))?,
        }
        if mv.promoted {
            let queen = self.game.board().piece_at(mv.to);
            if let Some(queen) = queen {
                self.log(out, format_args!("promoted to {} on {}", queen, mv.to))?;
            }
        }
        Ok(())
    }

    fn cmd_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.game.selection() {
            Some(selection) => write_destinations(selection, out),
            None => writeln!(out, "no piece selected"),
        }
    }

    fn cmd_setup<W: Write>(&mut self, placement: &str, turn: Color, out: &mut W) -> io::Result<()> {
        match Board::from_placement(placement) {
            Ok(board) => {
                self.game = GameState::from_board(board, turn);
                self.log(out, format_args!("position set up"))?;
                writeln!(out, "{}", turn_banner(turn))
            }
            Err(e) => writeln!(out, "error: {}", e),
        }
    }

    fn cmd_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "commands:")?;
        writeln!(out, "  <square> | click <square> | click <row> <col>")?;
        writeln!(out, "  pixel <x> <y>")?;
        writeln!(out, "  d | display, moves, turn, fen")?;
        writeln!(out, "  setup <placement> [w|b], new")?;
        writeln!(out, "  setoption name <name> value <value>, options")?;
        writeln!(out, "  help, quit")
    }

    /// Write one event line, time-stamped when enabled.
    fn log<W: Write>(&self, out: &mut W, msg: fmt::Arguments<'_>) -> io::Result<()> {
        if self.options.timestamps {
            let now = chrono::Local::now();
            writeln!(out, "[{}] {}", now.format("%H:%M:%S"), msg)
        } else {
            writeln!(out, "{}", msg)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

fn turn_char(turn: Color) -> char {
    match turn {
        Color::White => 'w',
        Color::Black => 'b',
    }
}

fn write_destinations<W: Write>(selection: &Selection, out: &mut W) -> io::Result<()> {
    if selection.destinations.is_empty() {
        writeln!(out, "destinations: none")
    } else {
        writeln!(out, "destinations: {}", selection.destinations)
    }
}

/// Text picture of the board: pieces as letters, empty light squares `.`,
/// empty dark squares `:`, `*` after the selected square and `+` after each
/// destination. Row 0 is printed first.
pub fn render(game: &GameState) -> String {
    let mut s = String::new();
    for row in 0..8 {
        s.push_str(&format!("{} |", row + 1));
        for col in 0..8 {
            let sq = Square::new(row, col);
            let symbol = match game.board().piece_at(sq) {
                Some(piece) => piece.to_char(),
                None => match Shade::of(sq) {
                    Shade::Light => '.',
                    Shade::Dark => ':',
                },
            };
            let mark = match Highlight::of(game, sq) {
                Highlight::None => ' ',
                Highlight::Selected => '*',
                Highlight::Destination => '+',
            };
            s.push(' ');
            s.push(symbol);
            s.push(mark);
        }
        s.push('\n');
    }
    s.push_str("   ");
    for file in 'a'..='h' {
        s.push(' ');
        s.push(file);
        s.push(' ');
    }
    s.push('\n');
    s.push_str(&turn_banner(game.turn()));
    s.push('\n');
    s
}
