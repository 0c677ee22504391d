mod board;
mod color;
mod figure;
mod file;
mod r#move;
mod piece;
mod rank;
mod role;
mod sprite;
mod square;

pub use board::*;
pub use color::*;
pub use figure::*;
pub use file::*;
pub use piece::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use sprite::*;
pub use square::*;
