//! Rule engine
//!
//! Decides whether a move is legal under simplified per-piece rules and
//! enumerates legal destinations.

pub mod rules;

pub use rules::MoveRules;
