use crate::core::definitions::{Color, Piece, PieceType, Result};
use crate::core::engine::{Board, RuleSet};
use crate::core::position::{Position, Position2D};
use crate::core::utils::{between, difference, is_in_diagonal_line, is_in_straight_line};

/// The old 8×8 board we're all used to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boring2D;

impl Boring2D {
    pub const NAME: &'static str = "Boring2D";
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

impl RuleSet for Boring2D {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_board(&self) -> Board {
        let back = |color: Color, rank: i8| {
            (0..8).map(move |file| Piece::new(BACK_RANK[file as usize], color, Position2D::new(file, rank)))
        };
        let pawns = |color: Color| {
            let rank = pawn_home_rank(color);
            (0..8).map(move |file| Piece::new(PieceType::Pawn, color, Position2D::new(file, rank)))
        };
        let pieces = back(Color::White, 0)
            .chain(pawns(Color::White))
            .chain(pawns(Color::Black))
            .chain(back(Color::Black, 7))
            .collect();
        Board::new(pieces, Color::White)
    }

    fn all_positions(&self) -> Vec<Position> {
        (0..Position2D::SIZE)
            .flat_map(|rank| (0..Position2D::SIZE).map(move |file| Position2D::new(file, rank).into()))
            .collect()
    }

    fn parse_position(&self, s: &str) -> Result<Position> {
        Position2D::parse(s).map(Position::Flat)
    }

    fn can_move(&self, board: &Board, piece: &Piece, target: &Position) -> bool {
        let (Position::Flat(from), Position::Flat(to)) = (piece.position, *target) else {
            return false;
        };
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let delta = difference(from.0, to.0);
        let [dx, dy] = delta;
        if dx == 0 && dy == 0 {
            return false;
        }

        let capture = match board.at(target) {
            Some(occupant) if occupant.color == piece.color => return false,
            Some(_) => true,
            None => false,
        };

        let slides = match piece.kind {
            // no castling
            PieceType::King => return dx.abs() <= 1 && dy.abs() <= 1,
            PieceType::Knight => {
                let (dx, dy) = (dx.abs(), dy.abs());
                return (dx == 1 && dy == 2) || (dx == 2 && dy == 1);
            }
            PieceType::Queen => is_in_straight_line(delta) || is_in_diagonal_line(delta),
            PieceType::Bishop => is_in_diagonal_line(delta),
            PieceType::Rook => is_in_straight_line(delta),
            PieceType::Pawn => {
                let forward = match piece.color {
                    Color::White => dy > 0,
                    Color::Black => dy < 0,
                };
                if !forward {
                    return false;
                }
                if capture {
                    return dx.abs() == 1 && dy.abs() == 1;
                }
                match (dx, dy.abs()) {
                    (0, 1) => return true,
                    (0, 2) => from.rank() == pawn_home_rank(piece.color),
                    _ => false,
                }
            }
        };

        slides
            && between(from.0, to.0).all(|square| board.at(&Position2D(square).into()).is_none())
    }
}
