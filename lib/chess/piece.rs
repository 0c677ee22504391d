use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt::{self, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Role, pub Color);

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    pub fn new(role: Role, color: Color) -> Self {
        Piece(role, color)
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.0
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.1
    }

    fn figurine(&self) -> char {
        match (self.role(), self.color()) {
            (Role::Pawn, Color::White) => '♙',
            (Role::Knight, Color::White) => '♘',
            (Role::Bishop, Color::White) => '♗',
            (Role::Rook, Color::White) => '♖',
            (Role::Queen, Color::White) => '♕',
            (Role::King, Color::White) => '♔',
            (Role::Pawn, Color::Black) => '♟',
            (Role::Knight, Color::Black) => '♞',
            (Role::Bishop, Color::Black) => '♝',
            (Role::Rook, Color::Black) => '♜',
            (Role::Queen, Color::Black) => '♛',
            (Role::King, Color::Black) => '♚',
        }
    }
}

impl From<Piece> for char {
    fn from(p: Piece) -> char {
        let c = match p.role() {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match p.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// The reason why converting [`Piece`] from a letter failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected one of `[PNBRQKpnbrqk]`")]
pub struct InvalidPiece;

impl TryFrom<char> for Piece {
    type Error = InvalidPiece;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let role = c
            .to_ascii_lowercase()
            .to_string()
            .parse()
            .map_err(|_| InvalidPiece)?;

        if c.is_ascii_uppercase() {
            Ok(Piece(role, Color::White))
        } else {
            Ok(Piece(role, Color::Black))
        }
    }
}

/// Prints the FEN letter, or the figurine with the alternate flag.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = if f.alternate() {
            self.figurine()
        } else {
            (*self).into()
        };

        f.write_char(c)
    }
}
