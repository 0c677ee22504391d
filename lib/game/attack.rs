use crate::chess::{Board, Color, Role, Square};

/// Whether the king of `side` standing on `king` is attacked by an opposing piece.
///
/// Threats are tested in a fixed order: pawns, knights, then sliding pieces along
/// the eight rays out of the king. A ray ends at its first occupant, whatever its color.
/// Threats from the opposing king are only considered if `king_adjacency` is set.
pub fn is_attacked(board: &Board, king: Square, side: Color, king_adjacency: bool) -> bool {
    let is_enemy = |sq: Square, role: Role| {
        board
            .piece_on(sq)
            .is_some_and(|p| p.role() == role && p.color() != side)
    };

    let pawns = [(-1, side.forward()), (1, side.forward())];
    if threatened_by(king, &pawns, |sq| is_enemy(sq, Role::Pawn)) {
        return true;
    }

    if threatened_by(king, Role::Knight.directions(), |sq| is_enemy(sq, Role::Knight)) {
        return true;
    }

    for &(df, dr) in Role::Queen.directions() {
        let mut next = king.offset(df, dr);
        while let Some(sq) = next {
            if let Some(p) = board.piece_on(sq) {
                if p.color() != side {
                    let orthogonal = df == 0 || dr == 0;
                    match p.role() {
                        Role::Queen => return true,
                        Role::Rook if orthogonal => return true,
                        Role::Bishop if !orthogonal => return true,
                        _ => {}
                    }
                }

                break;
            }

            next = sq.offset(df, dr);
        }
    }

    king_adjacency && threatened_by(king, Role::King.directions(), |sq| is_enemy(sq, Role::King))
}

fn threatened_by(king: Square, offsets: &[(i8, i8)], f: impl Fn(Square) -> bool) -> bool {
    offsets
        .iter()
        .filter_map(|&(df, dr)| king.offset(df, dr))
        .any(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn check(placement: &str, side: Color) -> bool {
        let board: Board = placement.parse().unwrap();
        let king = board.king(side).unwrap();
        is_attacked(&board, king, side, false)
    }

    #[proptest]
    fn nobody_is_in_check_in_the_starting_position(c: Color, adjacency: bool) {
        let board = Board::default();
        let king = board.king(c).unwrap();
        assert!(!is_attacked(&board, king, c, adjacency));
    }

    #[test]
    fn pawns_attack_diagonally_towards_the_opponent() {
        assert!(check("8/8/8/3p4/4K3/8/8/8", Color::White));
        assert!(check("8/8/8/5p2/4K3/8/8/8", Color::White));
        assert!(!check("8/8/8/4p3/4K3/8/8/8", Color::White));
        assert!(!check("8/8/8/8/4K3/3p4/8/8", Color::White));

        assert!(check("8/8/8/4k3/3P4/8/8/8", Color::Black));
        assert!(!check("8/8/3P4/4k3/8/8/8/8", Color::Black));
    }

    #[test]
    fn own_pawns_do_not_attack() {
        assert!(!check("8/8/8/3P4/4K3/8/8/8", Color::White));
    }

    #[test]
    fn knights_attack_from_every_leap() {
        for placement in [
            "8/8/3n4/8/4K3/8/8/8",
            "8/8/5n2/8/4K3/8/8/8",
            "8/8/8/6n1/4K3/8/8/8",
            "8/8/8/8/4K3/6n1/8/8",
            "8/8/8/8/4K3/8/5n2/8",
            "8/8/8/8/4K3/8/3n4/8",
            "8/8/8/8/4K3/2n5/8/8",
            "8/8/8/2n5/4K3/8/8/8",
        ] {
            assert!(check(placement, Color::White), "{}", placement);
        }

        assert!(!check("8/8/4n3/8/4K3/8/8/8", Color::White));
    }

    #[test]
    fn rooks_attack_along_ranks_and_files_only() {
        assert!(check("8/8/8/8/r3K3/8/8/8", Color::White));
        assert!(check("4r3/8/8/8/4K3/8/8/8", Color::White));
        assert!(!check("r7/8/8/8/4K3/8/8/8", Color::White));
    }

    #[test]
    fn bishops_attack_along_diagonals_only() {
        assert!(check("b7/8/8/8/4K3/8/8/8", Color::White));
        assert!(check("8/8/8/8/4K3/8/8/7b", Color::White));
        assert!(!check("4b3/8/8/8/4K3/8/8/8", Color::White));
    }

    #[test]
    fn queens_attack_along_every_ray() {
        assert!(check("8/8/8/8/q3K3/8/8/8", Color::White));
        assert!(check("q7/8/8/8/4K3/8/8/8", Color::White));
        assert!(check("8/8/8/8/4K3/8/8/4q3", Color::White));
    }

    #[test]
    fn first_occupant_blocks_the_ray_whatever_its_color() {
        assert!(!check("8/8/8/8/r1N1K3/8/8/8", Color::White));
        assert!(!check("8/8/8/8/r1n1K3/8/8/8", Color::White));
        assert!(!check("q7/8/8/3P4/4K3/8/8/8", Color::White));
        assert!(!check("q7/1p6/8/8/4K3/8/8/8", Color::White));
    }

    #[test]
    fn opposing_king_only_attacks_with_adjacency() {
        let board: Board = "8/8/8/4k3/4K3/8/8/8".parse().unwrap();
        let king = board.king(Color::White).unwrap();
        assert!(!is_attacked(&board, king, Color::White, false));
        assert!(is_attacked(&board, king, Color::White, true));
    }

    #[test]
    fn attacks_are_detected_at_the_edge_of_the_board() {
        assert!(check("8/8/8/8/8/8/8/K6r", Color::White));
        assert!(check("7k/8/8/8/8/8/8/B7", Color::Black));
    }
}
