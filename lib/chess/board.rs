use crate::chess::{Color, Figure, FigureId, File, Piece, Rank, Role, Square};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::{convert::TryFrom, str::FromStr};

/// The chess board.
///
/// Owns every [`Figure`] in an arena and maps each [`Square`] to an optional [`FigureId`].
/// Cloning a board is cheap, it holds no heap allocations.
#[derive(Debug, Clone)]
pub struct Board {
    figures: ArrayVec<Figure, 64>,
    grid: [[Option<FigureId>; 8]; 8],
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Self {
        let mut board = Board::empty();
        board.populate();
        board
    }
}

impl Board {
    const BACK_RANK: [Role; 8] = [
        Role::Rook,
        Role::Knight,
        Role::Bishop,
        Role::Queen,
        Role::King,
        Role::Bishop,
        Role::Knight,
        Role::Rook,
    ];

    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            figures: ArrayVec::new(),
            grid: [[None; 8]; 8],
        }
    }

    /// Resets the board to the standard starting position.
    pub fn populate(&mut self) {
        *self = Board::empty();

        for (file, role) in File::iter().zip(Self::BACK_RANK) {
            self.spawn(Piece(role, Color::White), Square::new(file, Rank::First));
            self.spawn(Piece(Role::Pawn, Color::White), Square::new(file, Rank::Second));
            self.spawn(Piece(Role::Pawn, Color::Black), Square::new(file, Rank::Seventh));
            self.spawn(Piece(role, Color::Black), Square::new(file, Rank::Eighth));
        }
    }

    /// Whether the integer coordinates `(file, rank)` lie on the board.
    pub fn is_within_bounds(file: i8, rank: i8) -> bool {
        Square::is_within_bounds(file, rank)
    }

    /// The [`Figure`] at the integer coordinates `(file, rank)`, if any.
    ///
    /// Coordinates off the board hold nothing.
    pub fn get(&self, file: i8, rank: i8) -> Option<&Figure> {
        self.piece_at(Square::from_coords(file, rank)?)
    }

    /// The handle of the [`Figure`] on a [`Square`], if any.
    pub fn id_at(&self, sq: Square) -> Option<FigureId> {
        self.grid[sq.rank.index() as usize][sq.file.index() as usize]
    }

    /// The [`Figure`] on a [`Square`], if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Figure> {
        self.id_at(sq).map(|id| self.figure(id))
    }

    /// The [`Piece`] on a [`Square`], if any.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(Figure::piece)
    }

    /// Replaces the contents of a [`Square`].
    ///
    /// The square a [`Figure`] believes it stands on is not updated, see [`Figure::set_square`].
    pub fn set_piece_at(&mut self, sq: Square, id: Option<FigureId>) {
        self.grid[sq.rank.index() as usize][sq.file.index() as usize] = id;
    }

    /// The [`Figure`] behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this board.
    pub fn figure(&self, id: FigureId) -> &Figure {
        &self.figures[id.index()]
    }

    /// The [`Figure`] behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this board.
    pub fn figure_mut(&mut self, id: FigureId) -> &mut Figure {
        &mut self.figures[id.index()]
    }

    /// Constructs a new [`Figure`] on a [`Square`], destroying whatever stood there.
    ///
    /// The handle of a destroyed figure is reused, as are the handles of figures no
    /// longer reachable from the grid.
    pub fn spawn(&mut self, piece: Piece, sq: Square) -> FigureId {
        let figure = Figure::new(piece, sq);

        let id = match self.id_at(sq).or_else(|| self.vacant()) {
            Some(id) => {
                self.figures[id.index()] = figure;
                id
            }

            None => {
                // At most 63 figures are reachable if `sq` is empty.
                self.figures.push(figure);
                FigureId(self.figures.len() as u8 - 1)
            }
        };

        self.set_piece_at(sq, Some(id));
        id
    }

    fn vacant(&self) -> Option<FigureId> {
        (0..self.figures.len() as u8)
            .map(FigureId)
            .find(|&id| !self.grid.iter().flatten().any(|&g| g == Some(id)))
    }

    /// Moves the [`Figure`] on `from` to `to`, keeping its square in sync.
    ///
    /// Whatever stood on `to` is removed from the board and returned.
    /// Nothing happens if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let id = self.id_at(from)?;
        let captured = self.piece_on(to).filter(|_| from != to);

        self.set_piece_at(from, None);
        self.set_piece_at(to, Some(id));
        self.figure_mut(id).set_square(to);

        captured
    }

    /// An iterator over every [`Figure`] on the board, rank by rank starting from `a1`.
    pub fn figures(&self) -> impl Iterator<Item = &Figure> + '_ {
        Square::iter().filter_map(move |sq| self.piece_at(sq))
    }

    /// The [`Square`] of a king of the given [`Color`], if any.
    pub fn king(&self, side: Color) -> Option<Square> {
        self.figures()
            .find(|f| f.piece() == Piece(Role::King, side))
            .map(Figure::square)
    }
}

/// Boards are equal if they hold equal figures on every square, regardless of their handles.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        Square::iter().all(|sq| self.piece_at(sq) == other.piece_at(sq))
    }
}

impl Eq for Board {}

/// Prints the piece placement field of [FEN].
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut skip = 0;

            for file in File::iter() {
                match self.piece_on(Square::new(file, rank)) {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{}", skip)?;
                            skip = 0;
                        }

                        write!(f, "{}", p)?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{}", skip)?;
            }

            if rank != Rank::First {
                f.write_char('/')?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "failed to parse board, expected 8 ranks separated by `/`")]
    WrongNumberOfRanks,
    #[display(fmt = "failed to parse board, rank {} does not span 8 files", _0)]
    WrongNumberOfFiles(#[error(not(source))] Rank),
    #[display(fmt = "failed to parse board, unexpected character `{}`", _0)]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::WrongNumberOfRanks);
        }

        let mut board = Board::empty();

        for (rank, row) in Rank::iter().rev().zip(rows) {
            let mut file = 0u8;

            for c in row.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as u8;
                } else {
                    let piece = Piece::try_from(c).map_err(|_| ParseBoardError::InvalidCharacter(c))?;
                    let f = File::try_from(file).map_err(|_| ParseBoardError::WrongNumberOfFiles(rank))?;
                    let id = board.spawn(piece, Square::new(f, rank));

                    let home = match piece.color() {
                        Color::White => Rank::Second,
                        Color::Black => Rank::Seventh,
                    };

                    if piece.role() == Role::Pawn && rank != home {
                        board.figure_mut(id).set_moved();
                    }

                    file += 1;
                }

                if file > 8 {
                    return Err(ParseBoardError::WrongNumberOfFiles(rank));
                }
            }

            if file != 8 {
                return Err(ParseBoardError::WrongNumberOfFiles(rank));
            }
        }

        Ok(board)
    }
}
