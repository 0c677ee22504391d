use crate::io::{Io, Terminal};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Color, File, Move, Rank, Role, Square};
use lib::game::{Game, Player, Rules};
use std::fmt;
use std::io::{stdin, stdout, ErrorKind};
use tracing::{info, instrument, warn};

/// A match of chess between two players taking turns at the same terminal.
#[derive(Debug, Parser)]
pub struct Play {
    /// The initial placement of pieces in FEN notation.
    #[clap(short, long, default_value_t)]
    board: Board,

    /// The side to move first.
    #[clap(short, long, default_value_t = Color::White)]
    turn: Color,

    /// The rules in RON notation, e.g. `(promotion: knight)`.
    #[clap(short, long, default_value_t)]
    rules: Rules,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            board: Board::default(),
            turn: Color::White,
            rules: Rules::default(),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = Game::new(self.board, self.turn, self.rules).context("invalid setup")?;
        let mut session = Session::new(game, Terminal::new(stdout(), stdin()));

        match session.run()? {
            Some(winner) => session.io.send(&format!("{} wins", winner))?,
            None => session.io.send("game abandoned")?,
        }

        Ok(session.io.flush()?)
    }
}

/// A command typed by the player whose turn it is.
#[derive(Debug, Parser)]
#[clap(
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
enum Command {
    /// Draws the board.
    Show,

    /// Draws the board marking where the piece on a square may move.
    Moves { square: Square },

    /// Moves the piece on a square to another, e.g. `move e7 e8 q`.
    Move {
        whence: Square,
        whither: Square,

        /// The piece a pawn is promoted to, one of `n`, `b`, `r` or `q`.
        promotion: Option<Role>,
    },

    /// Resigns in favor of the opponent.
    Resign,
}

/// Drives a [`Game`] from commands received over an [`Io`].
struct Session<T> {
    game: Game,
    players: [Player; 2],
    io: T,
}

impl<T: Io> Session<T> {
    fn new(game: Game, io: T) -> Self {
        Session {
            game,
            players: [Player::new(Color::White), Player::new(Color::Black)],
            io,
        }
    }

    /// Plays until someone resigns, returning the winner.
    ///
    /// Returns `None` if the input ends before that.
    #[instrument(level = "debug", skip(self), ret, err)]
    fn run(&mut self) -> Result<Option<Color>, Anyhow> {
        self.show(&[])?;

        loop {
            let turn = self.game.turn();

            if self.game.is_king_in_check() {
                self.io.send(&format!("{} to move, in check", turn))?;
            } else {
                self.io.send(&format!("{} to move", turn))?;
            }

            self.io.flush()?;

            let line = match self.io.recv() {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            if line.trim().is_empty() {
                continue;
            }

            match Command::try_parse_from(line.split_whitespace()) {
                Err(e) => self.io.send(e.to_string().trim_end())?,
                Ok(Command::Show) => self.show(&[])?,
                Ok(Command::Moves { square }) => {
                    let moves = self.game.legal_moves(square);
                    self.show(&moves)?;
                }

                Ok(Command::Move {
                    whence,
                    whither,
                    promotion,
                }) => {
                    let player = &mut self.players[turn as usize];
                    player.select(whence);

                    match self.game.play(player, whither, promotion) {
                        Ok(m) => {
                            info!(player = %turn, %m);
                            self.show(&[])?;
                        }

                        Err(e) => {
                            warn!(player = %turn, %e);
                            self.io.send(&e.to_string())?;
                        }
                    }
                }

                Ok(Command::Resign) => {
                    info!(player = %turn, "resigned");
                    return Ok(Some(!turn));
                }
            }
        }
    }

    fn show(&mut self, marks: &[Move]) -> Result<(), Anyhow> {
        let diagram = Diagram {
            board: self.game.board(),
            marks,
        };

        Ok(self.io.send(&diagram.to_string())?)
    }
}

/// Text rendering of a [`Board`] with White at the bottom.
///
/// Destinations of the marked moves are enclosed in brackets.
struct Diagram<'a> {
    board: &'a Board,
    marks: &'a [Move],
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{} ", rank)?;

            for file in File::iter() {
                let sq = Square::new(file, rank);
                let marked = Game::can_move_to(sq, self.marks);

                let (l, r) = if marked { ('[', ']') } else { (' ', ' ') };
                match self.board.piece_on(sq) {
                    Some(p) => write!(f, "{}{:#}{}", l, p, r)?,
                    None => write!(f, "{}·{}", l, r)?,
                }
            }

            writeln!(f)?;
        }

        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, " {} ", file)?;
        }

        Ok(())
    }
}
