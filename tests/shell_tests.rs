//! Shell Tests
//!
//! These tests drive the text front end over in-memory input and output.

use hotseat_chess::core::board::{Color, Piece, PieceKind, Square};
use hotseat_chess::shell::{Command, Shell, ShellError, ShellOptions};
use std::io::Cursor;

fn run(shell: &mut Shell, input: &str) -> String {
    let mut out = Vec::new();
    shell.run_with(Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

// ============================================================================
// Command Parsing Tests
// ============================================================================

#[test]
fn test_parse_click_forms() {
    assert_eq!(Command::parse("e2"), Ok(Command::Click(sq("e2"))));
    assert_eq!(Command::parse("click e2"), Ok(Command::Click(sq("e2"))));
    assert_eq!(Command::parse("click 1 4"), Ok(Command::Click(sq("e2"))));
    assert_eq!(Command::parse("1 4"), Ok(Command::Click(sq("e2"))));
}

#[test]
fn test_parse_commands() {
    assert_eq!(Command::parse("d"), Ok(Command::Display));
    assert_eq!(Command::parse("DISPLAY"), Ok(Command::Display));
    assert_eq!(Command::parse("pixel 10 20"), Ok(Command::Pixel { x: 10, y: 20 }));
    assert_eq!(Command::parse("newgame"), Ok(Command::NewGame));
    assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    assert_eq!(
        Command::parse("setup 8/8/8/8/8/8/8/8 b"),
        Ok(Command::Setup {
            placement: "8/8/8/8/8/8/8/8".to_string(),
            turn: Color::Black,
        })
    );
    assert_eq!(
        Command::parse("setoption name Show Moves value false"),
        Ok(Command::SetOption {
            name: "Show Moves".to_string(),
            value: "false".to_string(),
        })
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Command::parse("castle"),
        Err(ShellError::UnknownCommand("castle".to_string()))
    );
    assert_eq!(Command::parse("click"), Err(ShellError::MissingArgument("click")));
    assert_eq!(Command::parse("pixel 10"), Err(ShellError::MissingArgument("pixel")));
    assert_eq!(
        Command::parse("pixel ten 10"),
        Err(ShellError::InvalidNumber("ten".to_string()))
    );
    assert!(matches!(Command::parse("click 8 0"), Err(ShellError::Board(_))));
    assert!(matches!(Command::parse("click j9"), Err(ShellError::Board(_))));
    assert!(matches!(
        Command::parse("setup 8/8/8/8/8/8/8/8 x"),
        Err(ShellError::InvalidValue { .. })
    ));
}

// ============================================================================
// Option Tests
// ============================================================================

#[test]
fn test_options_apply() {
    let mut options = ShellOptions::default();
    assert!(!options.timestamps);
    assert!(options.show_moves);
    assert_eq!(options.board_size, 700);

    options.apply("Timestamps", "true").unwrap();
    options.apply("show_moves", "off").unwrap();
    options.apply("Board Size", "800").unwrap();
    assert!(options.timestamps);
    assert!(!options.show_moves);
    assert_eq!(options.geometry().square_size(), 100);
}

#[test]
fn test_options_reject_bad_values() {
    let mut options = ShellOptions::default();
    assert_eq!(
        options.apply("Colour", "red"),
        Err(ShellError::UnknownOption("Colour".to_string()))
    );
    assert!(matches!(
        options.apply("BoardSize", "2"),
        Err(ShellError::InvalidValue { .. })
    ));
    assert!(matches!(
        options.apply("ShowMoves", "maybe"),
        Err(ShellError::InvalidValue { .. })
    ));
    assert_eq!(options, ShellOptions::default());
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn test_session_move() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "e2\ne4\nturn\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "selected White Pawn on e2",
            "destinations: e3 e4",
            "White Pawn e2 -> e4",
            "Black's Turn",
            "Black's Turn",
        ]
    );
    assert_eq!(shell.game.turn(), Color::Black);
}

#[test]
fn test_session_illegal_and_ignored() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "e5\nb1\nb4\n");
    assert!(out.contains("no White piece on e5"));
    assert!(out.contains("selected White Knight on b1"));
    assert!(out.contains("destinations: a3 c3"));
    assert!(out.contains("illegal move b1 -> b4"));
    assert_eq!(shell.game.turn(), Color::White);
}

#[test]
fn test_session_capture_and_promotion() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "setup 1n2k3/P7/8/8/8/8/8/4K3 w\na7\nb8\nfen\n");
    assert!(out.contains("position set up"));
    assert!(out.contains("White Pawn a7 -> b8 captures Black Knight"));
    assert!(out.contains("promoted to White Queen on b8"));
    assert!(out.contains("1Q2k3/8/8/8/8/8/8/4K3 b"));
    assert_eq!(
        shell.game.board().piece_at(sq("b8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
}

#[test]
fn test_session_pixel_clicks() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "pixel 350 100\npixel 350 300\npixel 699 10\n");
    assert!(out.contains("selected White Pawn on e2"));
    assert!(out.contains("White Pawn e2 -> e4"));
    assert!(out.contains("click at (699, 10) is outside the board"));
}

#[test]
fn test_session_display_marks_selection() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "setoption name ShowMoves value false\ne2\nd\n");
    assert!(!out.contains("destinations"));

    let lines: Vec<&str> = out.lines().collect();
    let row2 = lines.iter().find(|l| l.starts_with("2 |")).unwrap();
    assert_eq!(*row2, "2 | P  P  P  P  P* P  P  P ");
    let row3 = lines.iter().find(|l| l.starts_with("3 |")).unwrap();
    assert_eq!(*row3, "3 | .  :  .  :  .+ :  .  : ");
    let row4 = lines.iter().find(|l| l.starts_with("4 |")).unwrap();
    assert_eq!(*row4, "4 | :  .  :  .  :+ .  :  . ");
    assert!(out.ends_with("White's Turn\n"));
}

#[test]
fn test_session_moves_command() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "moves\nsetoption name ShowMoves value 0\ng1\nmoves\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["no piece selected", "selected White Knight on g1", "destinations: f3 h3"]);
}

#[test]
fn test_session_errors_keep_running() {
    let mut shell = Shell::new();
    let out = run(
        &mut shell,
        "castle\nsetup garbage\nsetoption name Colour value red\ne2\n",
    );
    assert!(out.contains("error: unknown command: castle"));
    assert!(out.contains("error: invalid piece placement: garbage"));
    assert!(out.contains("error: unknown option: Colour"));
    assert!(out.contains("selected White Pawn on e2"));
}

#[test]
fn test_session_quit_stops_reading() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "quit\ne2\n");
    assert!(out.is_empty());
    assert!(shell.game.selection().is_none());
}

#[test]
fn test_session_new_game() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "e2\ne4\nnew\n");
    assert!(out.contains("new game"));
    assert_eq!(shell.game.turn(), Color::White);
    assert!(shell.game.board().piece_at(sq("e2")).is_some());
}

#[test]
fn test_session_timestamps() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "setoption name Timestamps value true\ne4\n");
    let line = out.lines().next().unwrap();
    assert!(line.starts_with('['));
    assert!(line.ends_with("] no White piece on e4"));
    assert_eq!(line.len(), "[00:00:00] no White piece on e4".len());
}

#[test]
fn test_session_options_listing() {
    let mut shell = Shell::new();
    let out = run(&mut shell, "setoption name BoardSize value 800\noptions\n");
    assert!(out.contains("option Timestamps = false"));
    assert!(out.contains("option ShowMoves = true"));
    assert!(out.contains("option BoardSize = 800"));
    assert_eq!(shell.options().board_size, 800);
}
