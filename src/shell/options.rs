//! Shell settings changed with `setoption`.

use super::error::ShellError;
use crate::game::geometry::{BoardGeometry, DEFAULT_BOARD_PIXELS};

const MIN_BOARD_PIXELS: u32 = 8;
const MAX_BOARD_PIXELS: u32 = 4096;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShellOptions {
    /// Prefix event lines with the local time.
    pub timestamps: bool,
    /// List destinations after a piece is picked.
    pub show_moves: bool,
    /// Board edge in pixels for `pixel` clicks.
    pub board_size: u32,
}

impl ShellOptions {
    /// Apply a setting by name; names ignore case, spaces and underscores.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), ShellError> {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.trim();
        let invalid = || ShellError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match opt.as_str() {
            "timestamps" => self.timestamps = parse_flag(value).ok_or_else(invalid)?,
            "showmoves" => self.show_moves = parse_flag(value).ok_or_else(invalid)?,
            "boardsize" => {
                let size: u32 = value.parse().map_err(|_| invalid())?;
                if !(MIN_BOARD_PIXELS..=MAX_BOARD_PIXELS).contains(&size) {
                    return Err(invalid());
                }
                self.board_size = size;
            }
            _ => return Err(ShellError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.board_size)
    }

    /// `(name, value)` pairs in display order
    pub fn entries(&self) -> [(&'static str, String); 3] {
        [
            ("Timestamps", self.timestamps.to_string()),
            ("ShowMoves", self.show_moves.to_string()),
            ("BoardSize", self.board_size.to_string()),
        ]
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        ShellOptions {
            timestamps: false,
            show_moves: true,
            board_size: DEFAULT_BOARD_PIXELS,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
