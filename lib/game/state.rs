use crate::chess::{Board, Color, File, Move, MoveList, Piece, Rank, Role, Square};
use crate::game::{is_attacked, IllegalMove, InvalidSetup, Player, Rules};
use tracing::{debug, instrument, trace};

/// The state of a game of chess between two players.
///
/// Tracks the side to move and where both kings stand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Color,
    kings: [Square; 2],
    last: Option<Move>,
    rules: Rules,
}

impl Default for Game {
    /// The standard starting position with White to move.
    fn default() -> Self {
        Game {
            board: Board::default(),
            turn: Color::White,
            kings: [
                Square::new(File::E, Rank::First),
                Square::new(File::E, Rank::Eighth),
            ],
            last: None,
            rules: Rules::default(),
        }
    }
}

impl Game {
    /// Sets up a game from an arbitrary [`Board`].
    ///
    /// Each side must have exactly one king, and the side not to move must not be in check.
    pub fn new(board: Board, turn: Color, rules: Rules) -> Result<Self, InvalidSetup> {
        let mut kings = [None; 2];

        for f in board.figures().filter(|f| f.role() == Role::King) {
            let king = &mut kings[f.color() as usize];
            if king.replace(f.square()).is_some() {
                return Err(InvalidSetup::ExtraKing(f.color()));
            }
        }

        let white = kings[Color::White as usize].ok_or(InvalidSetup::MissingKing(Color::White))?;
        let black = kings[Color::Black as usize].ok_or(InvalidSetup::MissingKing(Color::Black))?;

        let game = Game {
            board,
            turn,
            kings: [white, black],
            last: None,
            rules,
        };

        if game.is_in_check(!turn) {
            return Err(InvalidSetup::OpponentInCheck(!turn));
        }

        Ok(game)
    }

    /// The arrangement of pieces, for renderers to draw.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The [`Rules`] this game is played by.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The last move played, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.last
    }

    /// Where the king of a [`Color`] stands.
    pub fn king_position(&self, side: Color) -> Square {
        self.kings[side as usize]
    }

    /// Whether the king of the side to move is in check.
    pub fn is_king_in_check(&self) -> bool {
        self.is_in_check(self.turn)
    }

    /// Whether the king of a [`Color`] is in check.
    pub fn is_in_check(&self, side: Color) -> bool {
        let king = self.king_position(side);
        is_attacked(&self.board, king, side, self.rules.king_adjacency)
    }

    /// The pseudo-legal moves of the piece on a [`Square`].
    pub fn available_moves(&self, sq: Square) -> MoveList {
        match self.board.piece_at(sq) {
            None => MoveList::new(),
            Some(f) => f.available_moves(&self.board, self.last),
        }
    }

    /// The legal moves of the piece on a [`Square`].
    ///
    /// Kings are never captured, so moves onto a king are left out.
    pub fn legal_moves(&self, sq: Square) -> MoveList {
        let mut player = match self.board.piece_on(sq) {
            None => return MoveList::new(),
            Some(p) => Player::new(p.color()),
        };

        player.select(sq);

        let mut moves = self.available_moves(sq);
        moves.retain(|m| {
            let to = m.whither();
            !self.holds_king(to) && self.is_valid_move(to, &player)
        });
        moves
    }

    fn holds_king(&self, sq: Square) -> bool {
        self.board.piece_on(sq).is_some_and(|p| p.role() == Role::King)
    }

    /// Whether a [`Square`] is the destination of one of the moves.
    pub fn can_move_to(target: Square, moves: &[Move]) -> bool {
        moves.iter().any(|m| m.whither() == target)
    }

    /// Whether moving the piece selected by the player to `target` keeps their king safe.
    ///
    /// The move is tried on a copy of the game, this one is left untouched.
    pub fn is_valid_move(&self, target: Square, player: &Player) -> bool {
        let from = match player.selected_piece(&self.board) {
            None => return false,
            Some(f) => f.square(),
        };

        let mut next = self.clone();
        next.board.relocate(from, target);
        next.update_king_position(target);

        let valid = !next.is_in_check(player.color);
        trace!(%from, %target, valid);
        valid
    }

    /// Moves the piece on `from` to `to`, removing whatever stood there.
    ///
    /// The move is not validated. The moved piece is marked as moved and
    /// the position of a moved king is kept up to date.
    #[instrument(level = "debug", skip(self))]
    pub fn move_selected_piece_to(&mut self, to: Square, from: Square) -> Option<Piece> {
        let id = self.board.id_at(from)?;
        let captured = self.board.relocate(from, to);
        self.board.figure_mut(id).set_moved();
        self.update_king_position(to);

        if let Some(p) = captured {
            debug!(captured = %p);
        }

        captured
    }

    fn update_king_position(&mut self, to: Square) {
        if let Some(f) = self.board.piece_at(to).filter(|f| f.role() == Role::King) {
            self.kings[f.color() as usize] = to;
        }
    }

    /// Replaces the piece on a [`Square`] by a new one of the given [`Role`] of the side to move.
    ///
    /// Promoting to a pawn or a king does nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn promote_pawn_at(&mut self, sq: Square, role: Role) {
        if role.is_promotion() {
            self.board.spawn(Piece(role, self.turn), sq);
        } else {
            debug!("ignored");
        }
    }

    /// Passes the turn to the opponent.
    pub fn change_player_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Moves the piece selected by the player to `to`, if legal.
    ///
    /// A pawn reaching the far rank is promoted to `promotion`,
    /// or to the role configured in the [`Rules`] if none is given.
    #[instrument(level = "debug", skip(self, player), fields(%player), err)]
    pub fn play(
        &mut self,
        player: &mut Player,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, IllegalMove> {
        if player.color != self.turn {
            return Err(IllegalMove::NotYourTurn(player.color));
        }

        let figure = player
            .selected_piece(&self.board)
            .ok_or(IllegalMove::NothingSelected)?;

        let from = figure.square();
        let moves = figure.available_moves(&self.board, self.last);

        if !Self::can_move_to(to, &moves) {
            return Err(IllegalMove::Unreachable(from, to));
        }

        let m = match moves.iter().find(|m| m.whither() == to) {
            Some(&m) => m,
            None => return Err(IllegalMove::Unreachable(from, to)),
        };

        if self.holds_king(to) {
            return Err(IllegalMove::CapturesKing(to));
        }

        if !self.is_valid_move(to, player) {
            return Err(IllegalMove::ExposesKing(m));
        }

        self.move_selected_piece_to(to, from);

        if m.is_promotion() {
            self.promote_pawn_at(to, promotion.unwrap_or(self.rules.promotion));
        }

        self.last = Some(m);
        self.change_player_turn();
        player.deselect();

        debug!(%m, turn = %self.turn, check = self.is_king_in_check());

        Ok(m)
    }
}
