use std::sync::Arc;
use std::time::Duration;

use super::*;

fn rule_sets() -> Vec<Arc<dyn RuleSet>> {
    let registry = Registry::with_defaults();
    registry
        .names()
        .into_iter()
        .map(|name| registry.get(name).unwrap())
        .collect()
}

#[test]
fn positions_round_trip() {
    for rule_set in rule_sets() {
        for position in rule_set.all_positions() {
            let parsed = rule_set.parse_position(&position.to_string());
            assert!(
                parsed == Ok(position),
                "{}: {} did not survive parsing",
                rule_set.name(),
                position
            );
        }
    }
}

#[test]
fn positions_are_unique() {
    let flat = Boring2D.all_positions();
    assert_eq!(flat.len(), 64);
    for file in 0..8 {
        for rank in 0..8 {
            let fresh: Position = Position2D::new(file, rank).into();
            assert_eq!(flat.iter().filter(|&p| p == &fresh).count(), 1, "{fresh}");
        }
    }

    let hyper = Hyperboard.all_positions();
    assert_eq!(hyper.len(), 1296);
    for w in 0..6 {
        for z in 0..6 {
            for y in 0..6 {
                for x in 0..6 {
                    let fresh: Position = Position4D::new(x, y, z, w).into();
                    assert_eq!(hyper.iter().filter(|&p| p == &fresh).count(), 1, "{fresh}");
                }
            }
        }
    }
}

#[test]
fn variants_never_compare_equal() {
    let flat: Position = Position2D::new(0, 0).into();
    let hyper: Position = Position4D::new(0, 0, 0, 0).into();
    assert!(flat != hyper);
    assert!(hyper != flat);
    assert!(Hyperboard
        .all_positions()
        .iter()
        .all(|h| Boring2D.all_positions().iter().all(|f| f != h && h != f)));
}

#[test]
fn no_null_moves() {
    for rule_set in rule_sets() {
        let board = rule_set.default_board();
        for piece in board.iter_pieces() {
            assert!(!rule_set.can_move(&board, piece, &piece.position), "{piece:?}");
        }
    }
}

#[test]
fn default_flat_board() {
    let board = Boring2D.default_board();
    let count = |pred: &dyn Fn(&Piece) -> bool| board.iter_pieces().filter(|p| pred(*p)).count();
    assert_eq!(board.len(), 32);
    assert_eq!(count(&|p| p.color == Color::White), 16);
    assert_eq!(count(&|p| p.color == Color::Black), 16);
    assert_eq!(count(&|p| p.kind == PieceType::Pawn), 16);
    assert_eq!(count(&|p| p.kind == PieceType::Rook), 4);
    assert_eq!(board.turn(), Color::White);

    let white_queen = board.at(&Boring2D.parse_position("d1").unwrap()).unwrap();
    assert_eq!((white_queen.kind, white_queen.color), (PieceType::Queen, Color::White));
    let black_king = board.at(&Boring2D.parse_position("e8").unwrap()).unwrap();
    assert_eq!((black_king.kind, black_king.color), (PieceType::King, Color::Black));
}

#[test]
fn opening_sequence() {
    let mut board = Boring2D.default_board();
    let mut turn = Color::White;
    for (from, to) in [("e2", "e4"), ("c7", "c5"), ("g1", "f3"), ("d7", "d6")] {
        let from = Boring2D.parse_position(from).unwrap();
        let to = Boring2D.parse_position(to).unwrap();
        let kind = board.at(&from).unwrap().kind;
        let next = Boring2D
            .apply_move(&board, &Move::new(kind, from, to, Duration::ZERO))
            .unwrap();

        assert_eq!(next.len(), board.len());
        let mover = next.pieces().last().unwrap();
        assert_eq!((mover.position, mover.kind, mover.color), (to, kind, turn));
        assert!(next.at(&from).is_none());
        turn = turn.opposite();
        assert_eq!(next.turn(), turn);
        board = next;
    }
}

#[test]
fn capture_replaces_target() {
    let mut game = Match::new(Arc::new(Boring2D));
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        game.play(from, to, Duration::ZERO).unwrap();
    }
    assert_eq!(game.board.len(), 31);
    let d5 = game.board.at(&Boring2D.parse_position("d5").unwrap()).unwrap();
    assert_eq!((d5.kind, d5.color), (PieceType::Pawn, Color::White));
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.last_move().unwrap().to.to_string(), "d5");
}

#[test]
fn illegal_moves_leave_board_alone() {
    let board = Boring2D.default_board();
    let at = |s: &str| Boring2D.parse_position(s).unwrap();

    let blocked = Move::new(PieceType::Rook, at("a1"), at("a3"), Duration::ZERO);
    assert_eq!(
        Boring2D.apply_move(&board, &blocked),
        Err(Error::IllegalMove {
            from: at("a1"),
            to: at("a3")
        })
    );
    let empty = Move::new(PieceType::Pawn, at("e4"), at("e5"), Duration::ZERO);
    assert!(Boring2D.apply_move(&board, &empty).is_err());
    assert_eq!(board, Boring2D.default_board());
}

#[test]
fn match_enforces_turns() {
    let mut game = Match::new(Arc::new(Boring2D));
    assert!(matches!(
        game.play("e7", "e5", Duration::ZERO),
        Err(Error::IllegalMove { .. })
    ));
    assert!(game.moves.is_empty());
    assert_eq!(
        game.play("e9", "e5", Duration::ZERO),
        Err(Error::InvalidFormat("e9".to_string()))
    );
    game.play("e2", "e4", Duration::from_secs(1)).unwrap();
    assert!(game.play("e4", "e5", Duration::from_secs(2)).is_err());
    assert_eq!(game.moves.len(), 1);
}

#[test]
fn hyper_moves_are_rejected() {
    let mut game = Match::new(Arc::new(Hyperboard));
    let before = game.board.clone();
    assert!(matches!(
        game.play("a2m1", "a3m1", Duration::ZERO),
        Err(Error::IllegalMove { .. })
    ));
    assert_eq!(game.board, before);
}

#[test]
fn move_strings() {
    let at = |s: &str| Boring2D.parse_position(s).unwrap();
    let quiet = Move::new(PieceType::Knight, at("g1"), at("f3"), Duration::ZERO);
    assert_eq!(quiet.to_string(), "♞ g1 f3");
    let timed = Move::new(PieceType::Pawn, at("e2"), at("e4"), Duration::from_millis(3_456));
    assert_eq!(timed.to_string(), "♟ e2 e4  +3s 400ms");
    let slow = Move::new(PieceType::Queen, at("d1"), at("h5"), Duration::from_millis(68_900));
    assert_eq!(slow.to_string(), "♛ d1 h5  +1m 8s");
}

#[test]
fn glyphs() {
    assert_eq!(PieceType::King.symbol(Color::White), '♔');
    assert_eq!(PieceType::Pawn.symbol(Color::White), '♙');
    assert_eq!(PieceType::Rook.symbol(Color::Black), '♜');
    assert_eq!(Color::White.to_string(), "white");
    assert_eq!(Color::Black.opposite(), Color::White);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "share a position")]
fn board_rejects_shared_cells() {
    let e1 = Position2D::new(4, 0);
    Board::new(
        vec![
            Piece::new(PieceType::King, Color::White, e1),
            Piece::new(PieceType::Queen, Color::Black, e1),
        ],
        Color::White,
    );
}
