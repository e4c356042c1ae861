//! Game flow
//!
//! - Turn/selection state machine driven by clicks
//! - Board geometry, shading and highlights for front ends

pub mod geometry;
pub mod state;

pub use geometry::{BoardGeometry, Highlight, Shade, turn_banner};
pub use state::{AppliedMove, ClickOutcome, GameState, Selection};
