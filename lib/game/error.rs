use crate::chess::{Color, Move, Square};
use derive_more::{Display, Error};

/// The reason why a [`Game`][`crate::game::Game`] could not be set up.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidSetup {
    #[display(fmt = "the {} king is missing", _0)]
    MissingKing(#[error(not(source))] Color),
    #[display(fmt = "there is more than one {} king", _0)]
    ExtraKing(#[error(not(source))] Color),
    #[display(fmt = "the {} king is in check, but it is not their turn", _0)]
    OpponentInCheck(#[error(not(source))] Color),
}

/// The reason why a move attempted by a [`Player`][`crate::game::Player`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMove {
    #[display(fmt = "it is not the turn of the {} player", _0)]
    NotYourTurn(#[error(not(source))] Color),

    #[display(fmt = "no piece of the side to move is selected")]
    NothingSelected,

    #[display(fmt = "the piece on {} cannot reach {}", _0, _1)]
    Unreachable(Square, Square),

    #[display(fmt = "move `{}` leaves the king in check", _0)]
    ExposesKing(#[error(not(source))] Move),

    #[display(fmt = "the king on {} cannot be captured", _0)]
    CapturesKing(#[error(not(source))] Square),
}
