use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A square on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    pub rank: Rank,
    pub file: File,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    pub fn new(file: File, rank: Rank) -> Self {
        Square { rank, file }
    }

    /// Whether the integer coordinates `(file, rank)` lie on the board.
    pub fn is_within_bounds(file: i8, rank: i8) -> bool {
        (0..8).contains(&file) && (0..8).contains(&rank)
    }

    /// Constructs [`Square`] from integer coordinates, if they lie on the board.
    pub fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if Self::is_within_bounds(file, rank) {
            Some(Square::new(
                File::from_index(file as u8),
                Rank::from_index(rank as u8),
            ))
        } else {
            None
        }
    }

    /// This square's integer coordinates `(file, rank)`.
    pub fn coords(&self) -> (i8, i8) {
        (self.file.index() as i8, self.rank.index() as i8)
    }

    /// The square `(df, dr)` steps away, if it lies on the board.
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let (f, r) = self.coords();
        Self::from_coords(f + df, r + dr)
    }

    /// Returns an iterator over all squares, rank by rank starting from `a1`.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Rank::iter().flat_map(|r| File::iter().map(move |f| Square::new(f, r)))
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
