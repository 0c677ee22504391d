use crate::chess::{Board, Color, Move, MoveKind, Piece, Rank, Role, Sprite, Square};
use arrayvec::ArrayVec;
use derive_more::Display;

/// The pseudo-legal moves of a single [`Figure`].
///
/// A queen in the middle of an empty board has the most, 27.
pub type MoveList = ArrayVec<Move, 32>;

/// Stable handle to a [`Figure`] owned by a [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display(fmt = "#{}", _0)]
pub struct FigureId(pub(crate) u8);

impl FigureId {
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A [`Piece`] standing on the [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Figure {
    piece: Piece,
    square: Square,
    moved: bool,
    sprite: Sprite,
}

impl Figure {
    /// Constructs a [`Figure`] that has not moved yet.
    pub fn new(piece: Piece, square: Square) -> Self {
        Figure {
            piece,
            square,
            moved: false,
            sprite: Sprite::of(piece),
        }
    }

    /// The [`Piece`] this figure represents.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The [`Role`] of this figure.
    pub fn role(&self) -> Role {
        self.piece.role()
    }

    /// The [`Color`] of this figure.
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    /// The [`Square`] this figure believes it stands on.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Overwrites the [`Square`] this figure believes it stands on.
    ///
    /// The [`Board`] grid is left untouched.
    pub fn set_square(&mut self, sq: Square) {
        self.square = sq;
    }

    /// Whether this figure has been moved since it was placed.
    ///
    /// Only pawns care, an unmoved pawn may advance two squares.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Marks this figure as moved.
    pub fn set_moved(&mut self) {
        self.moved = true;
    }

    /// The visual asset of this figure.
    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    /// Generates the pseudo-legal moves of this figure.
    ///
    /// Whether a move leaves the own king in check is not considered.
    /// The last move played is reserved for en passant, which is not supported.
    pub fn available_moves(&self, board: &Board, _last: Option<Move>) -> MoveList {
        let mut moves = MoveList::new();

        match self.role() {
            Role::Pawn => self.pawn_moves(board, &mut moves),
            r if r.slides() => {
                for &(df, dr) in r.directions() {
                    self.slide(board, df, dr, &mut moves);
                }
            }
            r => {
                for &(df, dr) in r.directions() {
                    self.leap(board, df, dr, &mut moves);
                }
            }
        }

        moves
    }

    fn target(&self, board: &Board, to: Square) -> Option<Move> {
        match board.piece_on(to) {
            None => Some(Move::new(self.square, to, MoveKind::empty())),
            Some(p) if p.color() != self.color() => {
                Some(Move::new(self.square, to, MoveKind::CAPTURE))
            }
            Some(_) => None,
        }
    }

    fn slide(&self, board: &Board, df: i8, dr: i8, moves: &mut MoveList) {
        let mut next = self.square.offset(df, dr);
        while let Some(to) = next {
            moves.extend(self.target(board, to));

            if board.piece_on(to).is_some() {
                break;
            }

            next = to.offset(df, dr);
        }
    }

    fn leap(&self, board: &Board, df: i8, dr: i8, moves: &mut MoveList) {
        if let Some(to) = self.square.offset(df, dr) {
            moves.extend(self.target(board, to));
        }
    }

    fn pawn_moves(&self, board: &Board, moves: &mut MoveList) {
        let forward = self.color().forward();
        let last = match self.color() {
            Color::White => Rank::Eighth,
            Color::Black => Rank::First,
        };

        let promotion = |to: Square| {
            if to.rank == last {
                MoveKind::PROMOTION
            } else {
                MoveKind::empty()
            }
        };

        if let Some(one) = self.square.offset(0, forward) {
            if board.piece_on(one).is_none() {
                moves.push(Move::new(self.square, one, promotion(one)));

                if !self.moved {
                    if let Some(two) = one.offset(0, forward) {
                        if board.piece_on(two).is_none() {
                            moves.push(Move::new(self.square, two, MoveKind::DOUBLE_PUSH));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = self.square.offset(df, forward) {
                if board.piece_on(to).is_some_and(|p| p.color() != self.color()) {
                    let kind = MoveKind::CAPTURE | promotion(to);
                    moves.push(Move::new(self.square, to, kind));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::File;
    use proptest::sample::select;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn destinations(moves: &MoveList) -> Vec<Square> {
        let mut squares: Vec<_> = moves.iter().map(Move::whither).collect();
        squares.sort();
        squares
    }

    #[proptest]
    fn figure_is_constructed_unmoved(p: Piece, s: Square) {
        let f = Figure::new(p, s);
        assert!(!f.has_moved());
        assert_eq!(f.square(), s);
        assert_eq!(f.sprite(), Sprite::of(p));
    }

    #[proptest]
    fn moves_always_originate_from_the_figure(
        #[strategy(select(vec![Role::Knight, Role::Bishop, Role::Rook, Role::Queen, Role::King]))]
        r: Role,
        c: Color,
        s: Square,
    ) {
        let mut board = Board::empty();
        let id = board.spawn(Piece(r, c), s);
        let moves = board.figure(id).available_moves(&board, None);
        assert!(moves.iter().all(|m| m.whence() == s));
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[proptest]
    fn queen_on_empty_board_reaches_every_line(s: Square) {
        let mut board = Board::empty();
        let id = board.spawn(Piece(Role::Queen, Color::White), s);
        let moves = board.figure(id).available_moves(&board, None);

        for m in &moves {
            let (df, dr) = m.direction();
            assert!(df == 0 || dr == 0 || df.abs() == dr.abs());
        }

        let (f, r) = s.coords();
        let diagonals = Square::iter()
            .filter(|t| t != &s)
            .filter(|t| {
                let (g, q) = t.coords();
                f == g || r == q || (f - g).abs() == (r - q).abs()
            })
            .count();

        assert_eq!(moves.len(), diagonals);
    }

    #[test]
    fn sliding_stops_at_first_occupant_and_captures_only_opponents() {
        let board: Board = "8/8/8/8/1p1R2P1/8/8/8".parse().unwrap();
        let rook = board.piece_at(sq("d4")).unwrap();
        let moves = rook.available_moves(&board, None);

        let mut expected: Vec<_> = ["c4", "b4", "e4", "f4"]
            .into_iter()
            .chain(["d1", "d2", "d3", "d5", "d6", "d7", "d8"])
            .map(sq)
            .collect();

        expected.sort();
        assert_eq!(destinations(&moves), expected);

        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].whither(), sq("b4"));
    }

    #[test]
    fn knight_leaps_over_pieces() {
        let board = Board::default();
        let knight = board.piece_at(sq("b1")).unwrap();
        let moves = knight.available_moves(&board, None);
        assert_eq!(destinations(&moves), vec![sq("a3"), sq("c3")]);
    }

    #[test]
    fn knight_does_not_land_on_own_pieces_but_captures() {
        let board: Board = "8/8/8/8/8/2p5/3P4/1N6".parse().unwrap();
        let knight = board.piece_at(sq("b1")).unwrap();
        let moves = knight.available_moves(&board, None);
        assert_eq!(destinations(&moves), vec![sq("a3"), sq("c3")]);
        assert!(moves.iter().any(|m| m.whither() == sq("c3") && m.is_capture()));
    }

    #[test]
    fn king_steps_one_square_in_every_direction() {
        let board: Board = "8/8/8/8/4K3/8/8/8".parse().unwrap();
        let king = board.piece_at(sq("e4")).unwrap();
        assert_eq!(king.available_moves(&board, None).len(), 8);

        let board: Board = "8/8/8/8/8/8/8/K7".parse().unwrap();
        let king = board.piece_at(sq("a1")).unwrap();
        assert_eq!(
            destinations(&king.available_moves(&board, None)),
            vec![sq("b1"), sq("a2"), sq("b2")]
        );
    }

    #[test]
    fn unmoved_pawn_may_advance_one_or_two_squares() {
        let board = Board::default();
        let pawn = board.piece_at(sq("e2")).unwrap();
        let moves = pawn.available_moves(&board, None);
        assert_eq!(destinations(&moves), vec![sq("e3"), sq("e4")]);
        assert!(moves.iter().any(|m| m.is_double_push()));

        let pawn = board.piece_at(sq("d7")).unwrap();
        let moves = pawn.available_moves(&board, None);
        assert_eq!(destinations(&moves), vec![sq("d5"), sq("d6")]);
    }

    #[test]
    fn moved_pawn_may_only_advance_one_square() {
        let mut board = Board::default();
        let id = board.id_at(sq("e2")).unwrap();
        board.figure_mut(id).set_moved();
        let moves = board.figure(id).available_moves(&board, None);
        assert_eq!(destinations(&moves), vec![sq("e3")]);
    }

    #[test]
    fn blocked_pawn_cannot_advance() {
        let board: Board = "8/8/8/8/8/4n3/4P3/8".parse().unwrap();
        let pawn = board.piece_at(sq("e2")).unwrap();
        assert!(pawn.available_moves(&board, None).is_empty());

        let board: Board = "8/8/8/8/4n3/8/4P3/8".parse().unwrap();
        let pawn = board.piece_at(sq("e2")).unwrap();
        assert_eq!(
            destinations(&pawn.available_moves(&board, None)),
            vec![sq("e3")]
        );
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let board: Board = "8/8/8/3p1P2/4P3/3p1p2/8/8".parse().unwrap();
        let pawn = board.piece_at(sq("e4")).unwrap();
        let moves = pawn.available_moves(&board, None);
        assert_eq!(destinations(&moves), vec![sq("d5"), sq("e5")]);
        assert!(moves.iter().any(|m| m.whither() == sq("d5") && m.is_capture()));
    }

    #[test]
    fn pawn_reaching_the_far_rank_is_a_promotion() {
        let board: Board = "2n5/1P6/8/8/8/8/6p1/8".parse().unwrap();

        let white = board.piece_at(sq("b7")).unwrap();
        let moves = white.available_moves(&board, None);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.is_promotion()));
        assert!(moves.iter().any(|m| m.whither() == sq("c8") && m.is_capture()));

        let black = board.piece_at(sq("g2")).unwrap();
        let moves = black.available_moves(&board, None);
        assert_eq!(destinations(&moves), vec![Square::new(File::G, Rank::First)]);
        assert!(moves[0].is_promotion());
    }
}
