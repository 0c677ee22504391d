use crate::chess::Square;
use bitflags::bitflags;
use derive_more::{Constructor, Display};

#[cfg(test)]
use proptest::prelude::*;

bitflags! {
    /// Characteristics of a [`Move`].
    #[derive(Default)]
    pub struct MoveKind: u8 {
        /// The destination holds a piece of the opposite color.
        const CAPTURE = 0b001;
        /// A pawn advancing two squares from its starting rank.
        const DOUBLE_PUSH = 0b010;
        /// A pawn reaching the far rank.
        const PROMOTION = 0b100;
    }
}

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", whence, whither)]
pub struct Move {
    whence: Square,
    whither: Square,
    #[cfg_attr(test, strategy(any::<u8>().prop_map(MoveKind::from_bits_truncate)))]
    kind: MoveKind,
}

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The characteristics of this move.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The `(file, rank)` offset from the source to the destination.
    pub fn direction(&self) -> (i8, i8) {
        (
            self.whither.file - self.whence.file,
            self.whither.rank - self.whence.rank,
        )
    }

    /// Whether this move captures a piece.
    pub fn is_capture(&self) -> bool {
        self.kind.contains(MoveKind::CAPTURE)
    }

    /// Whether this move is a pawn advancing two squares.
    pub fn is_double_push(&self) -> bool {
        self.kind.contains(MoveKind::DOUBLE_PUSH)
    }

    /// Whether this move promotes a pawn.
    pub fn is_promotion(&self) -> bool {
        self.kind.contains(MoveKind::PROMOTION)
    }
}
