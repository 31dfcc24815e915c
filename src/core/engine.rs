use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use log::{debug, trace};

use crate::core::definitions::{Color, Error, Move, Piece, Result};
use crate::core::position::Position;

/// A board and every piece on it.
///
/// Boards are values: nothing mutates one in place, applying a move builds
/// the next board. No two pieces share a position, and after a move the
/// piece that moved is the last one in [`Board::pieces`].
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pieces: Vec<Piece>,
    turn: Color,
}

impl Board {
    /// Callers guarantee that no two pieces share a position; debug builds check it.
    pub fn new(pieces: Vec<Piece>, turn: Color) -> Board {
        debug_assert!(
            pieces
                .iter()
                .enumerate()
                .all(|(idx, piece)| pieces[..idx].iter().all(|other| other.position != piece.position)),
            "pieces must not share a position"
        );
        Board { pieces, turn }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The piece standing on `position`, if any.
    pub fn at(&self, position: &Position) -> Option<&Piece> {
        self.pieces.iter().find(|piece| &piece.position == position)
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter()
    }

    /// Relocates whatever stands on `from` to `to`, dropping anything that
    /// stood on `to`. The moved piece goes last. Performs no legality checks.
    fn move_piece(&self, _move: &Move, turn: Color) -> Board {
        let mut pieces: Vec<Piece> = self
            .pieces
            .iter()
            .filter(|piece| piece.position != _move.from && piece.position != _move.to)
            .cloned()
            .collect();
        if let Some(moved) = self.at(&_move.from) {
            pieces.push(Piece {
                position: _move.to,
                ..moved.clone()
            });
        }
        Board { pieces, turn }
    }
}

/// Strategy binding one board geometry to one setup and legality algorithm.
///
/// Implementations are stateless: the same rule set always yields the same
/// default board, positions and decisions.
pub trait RuleSet: Debug + Send + Sync {
    /// Registry key of this rule set.
    fn name(&self) -> &'static str;

    /// Participating colours in turn order.
    fn player_colours(&self) -> Vec<Color> {
        vec![Color::White, Color::Black]
    }

    fn default_board(&self) -> Board;

    /// Every square of the board, each exactly once.
    fn all_positions(&self) -> Vec<Position>;

    fn parse_position(&self, s: &str) -> Result<Position>;

    /// Movement-shape legality of `piece` going to `target`. Never fails,
    /// any rule violation is `false`.
    fn can_move(&self, board: &Board, piece: &Piece, target: &Position) -> bool;

    /// Applies `_move` and hands the turn to the next colour.
    fn apply_move(&self, board: &Board, _move: &Move) -> Result<Board> {
        let Some(piece) = board.at(&_move.from) else {
            debug!("{}: no piece at {}", self.name(), _move.from);
            return Err(Error::illegal(_move));
        };
        if !self.can_move(board, piece, &_move.to) {
            debug!("{}: rejected {}", self.name(), _move);
            return Err(Error::illegal(_move));
        }
        let turn = next_player(&self.player_colours(), board.turn());
        trace!("{}: applied {}, {} to move", self.name(), _move, turn);
        Ok(board.move_piece(_move, turn))
    }

    /// Every square `piece` may move to.
    fn reachable(&self, board: &Board, piece: &Piece) -> Vec<Position> {
        self.all_positions()
            .into_iter()
            .filter(|target| self.can_move(board, piece, target))
            .collect()
    }

    /// Every shape-legal move for the side to move, stamped with `time`.
    fn legal_moves(&self, board: &Board, time: Duration) -> Vec<Move> {
        board
            .iter_pieces()
            .filter(|piece| piece.color == board.turn())
            .flat_map(|piece| {
                self.reachable(board, piece)
                    .into_iter()
                    .map(|to| Move::new(piece.kind, piece.position, to, time))
            })
            .collect()
    }
}

fn next_player(colours: &[Color], current: Color) -> Color {
    colours
        .iter()
        .position(|&color| color == current)
        .and_then(|idx| colours.get((idx + 1) % colours.len()))
        .copied()
        .unwrap_or_else(|| current.opposite())
}

/// A game being played under one rule set.
#[derive(Debug, Clone)]
pub struct Match {
    pub rule_set: Arc<dyn RuleSet>,
    pub board: Board,
    pub start_time: Option<SystemTime>,
    pub moves: Vec<Move>,
}

impl Match {
    /// Fresh match on the rule set's default board, starting now.
    pub fn new(rule_set: Arc<dyn RuleSet>) -> Match {
        let board = rule_set.default_board();
        Match {
            rule_set,
            board,
            start_time: Some(SystemTime::now()),
            moves: Vec::new(),
        }
    }

    pub fn current_player(&self) -> Color {
        self.board.turn()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Applies `_move` for the side to move and records it.
    pub fn apply(&mut self, _move: Move) -> Result<()> {
        match self.board.at(&_move.from) {
            Some(piece) if piece.color == self.board.turn() => (),
            _ => return Err(Error::illegal(&_move)),
        }
        self.board = self.rule_set.apply_move(&self.board, &_move)?;
        self.moves.push(_move);
        Ok(())
    }

    /// Applies a move given as position strings, the way transport hands them over.
    pub fn play(&mut self, from: &str, to: &str, time: Duration) -> Result<()> {
        let from = self.rule_set.parse_position(from)?;
        let to = self.rule_set.parse_position(to)?;
        let Some(piece) = self.board.at(&from) else {
            return Err(Error::IllegalMove { from, to });
        };
        self.apply(Move::new(piece.kind, from, to, time))
    }
}
