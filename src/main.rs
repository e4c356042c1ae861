//! hotseat_chess: two players, one board

use hotseat_chess::shell::Shell;

fn main() {
    println!("hotseat_chess v0.1.0 - two-player chess board");
    println!("Click with 'e2' or 'click 1 4', 'd' to display the board, 'help' for commands, 'quit' to exit");

    let mut shell = Shell::new();
    if let Err(e) = shell.run() {
        eprintln!("io error: {}", e);
        std::process::exit(1);
    }
}
