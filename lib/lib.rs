/// Chess domain types.
pub mod chess;
/// Turns, check detection and move legality.
pub mod game;
