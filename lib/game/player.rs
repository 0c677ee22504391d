use crate::chess::{Board, Color, Figure, Square};
use derive_more::Display;

/// One of the two sides sitting at the board.
///
/// A player points at one of their own pieces before moving it.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", color)]
pub struct Player {
    pub color: Color,
    selected: Option<Square>,
}

impl Player {
    /// A player of the given [`Color`] with nothing selected.
    pub fn new(color: Color) -> Self {
        Player {
            color,
            selected: None,
        }
    }

    /// Points at the piece on a [`Square`].
    pub fn select(&mut self, sq: Square) {
        self.selected = Some(sq);
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The selected [`Square`], if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// The selected [`Figure`], if it belongs to this player.
    pub fn selected_piece<'a>(&self, board: &'a Board) -> Option<&'a Figure> {
        board
            .piece_at(self.selected?)
            .filter(|f| f.color() == self.color)
    }
}
