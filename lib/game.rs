mod attack;
mod error;
mod player;
mod rules;
mod state;

pub use attack::*;
pub use error::*;
pub use player::*;
pub use rules::*;
pub use state::*;
