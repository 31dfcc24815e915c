use crate::core::definitions::{Color, Piece, PieceType, Result};
use crate::core::engine::{Board, RuleSet};
use crate::core::position::{Position, Position4D};

/// The four-dimensional hyper-board: six cells along each of x, y, z and w.
///
/// White sets up around the `z = w = 0` corner, black mirrors it at the
/// opposite corner. Piece movement across four dimensions is not defined yet,
/// so no move is legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyperboard;

impl Hyperboard {
    pub const NAME: &'static str = "Chesseract";
}

/** back row of the `(z, w) = (0, 0)` plane */
const KING_ROW: [PieceType; 6] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::King,
    PieceType::Queen,
    PieceType::Rook,
];

/** back row of the other home planes */
const SIDE_ROW: [PieceType; 6] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::Knight,
    PieceType::Rook,
];

const HOME_PLANES: [(i8, i8); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];
const OUTPOST_PLANES: [(i8, i8); 2] = [(2, 0), (0, 2)];

fn white_setup() -> Vec<(PieceType, Position4D)> {
    let mut setup = Vec::with_capacity(56);
    for (z, w) in HOME_PLANES {
        let row = if (z, w) == (0, 0) { &KING_ROW } else { &SIDE_ROW };
        for (x, &kind) in (0..).zip(row.iter()) {
            setup.push((kind, Position4D::new(x, 0, z, w)));
        }
        for x in 0..Position4D::SIZE {
            setup.push((PieceType::Pawn, Position4D::new(x, 1, z, w)));
        }
    }
    for (z, w) in OUTPOST_PLANES {
        for x in 1..Position4D::SIZE - 1 {
            setup.push((PieceType::Pawn, Position4D::new(x, 0, z, w)));
        }
    }
    setup
}

fn mirror(p: Position4D) -> Position4D {
    let last = Position4D::SIZE - 1;
    let [x, y, z, w] = p.0;
    Position4D::new(x, last - y, last - z, last - w)
}

impl RuleSet for Hyperboard {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_board(&self) -> Board {
        let setup = white_setup();
        let white = setup
            .iter()
            .map(|&(kind, pos)| Piece::new(kind, Color::White, pos));
        let black = setup
            .iter()
            .map(|&(kind, pos)| Piece::new(kind, Color::Black, mirror(pos)));
        Board::new(white.chain(black).collect(), Color::White)
    }

    fn all_positions(&self) -> Vec<Position> {
        let size = Position4D::SIZE;
        let mut positions = Vec::with_capacity(1296);
        for w in 0..size {
            for z in 0..size {
                for y in 0..size {
                    for x in 0..size {
                        positions.push(Position4D::new(x, y, z, w).into());
                    }
                }
            }
        }
        positions
    }

    fn parse_position(&self, s: &str) -> Result<Position> {
        Position4D::parse(s).map(Position::Hyper)
    }

    fn can_move(&self, _board: &Board, _piece: &Piece, _target: &Position) -> bool {
        false
    }
}
