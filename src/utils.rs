use std::{
    fmt::Display,
    io::{self, Write},
    ops::AddAssign,
    time::Duration,
};

use crate::core::{
    boring2d::Boring2D,
    definitions::Color,
    engine::{Board, Match, RuleSet},
    position::{Position, Position2D},
};

const DARK_CELL: &str = "\x1b[48;5;178m\x1b[38;5;0m";
const LIGHT_CELL: &str = "\x1b[48;5;229m\x1b[38;5;0m";
const RESET: &str = "\x1b[0m";

/// Writes a human-readable picture of the match followed by its move list.
///
/// 8×8 boards are drawn as a coloured grid, anything else is listed cell by
/// cell in the rule set's position order.
pub fn debug_dump(game: &Match, w: &mut impl Write) -> io::Result<()> {
    if game.rule_set.name() == Boring2D::NAME {
        dump_flat_board(&game.board, w)?;
    } else {
        dump_unknown_board(game, w)?;
    }

    for (idx, _move) in game.moves.iter().enumerate() {
        if idx % 2 == 0 {
            writeln!(w, " {:>3}: {}", 1 + idx / 2, _move)?;
        } else {
            writeln!(w, "      {}", _move)?;
        }
    }
    Ok(())
}

fn dump_cell(position: Position, board: &Board, w: &mut impl Write) -> io::Result<()> {
    let background = match position.cell_color() {
        Color::Black => DARK_CELL,
        Color::White => LIGHT_CELL,
    };
    match board.at(&position) {
        Some(piece) => write!(w, "{background} {} {RESET}", piece.kind.symbol(piece.color)),
        None => write!(w, "{background}   {RESET}"),
    }
}

fn dump_files(w: &mut impl Write) -> io::Result<()> {
    write!(w, "   ")?;
    for file in 'a'..='h' {
        write!(w, " {file} ")?;
    }
    writeln!(w)
}

fn dump_flat_board(board: &Board, w: &mut impl Write) -> io::Result<()> {
    dump_files(w)?;
    writeln!(w, "  +------------------------+")?;
    for rank in (0..Position2D::SIZE).rev() {
        write!(w, "{} |", rank + 1)?;
        for file in 0..Position2D::SIZE {
            dump_cell(Position2D::new(file, rank).into(), board, w)?;
        }
        writeln!(w, "| {}", rank + 1)?;
    }
    writeln!(w, "  +------------------------+")?;
    dump_files(w)
}

fn dump_unknown_board(game: &Match, w: &mut impl Write) -> io::Result<()> {
    for position in game.rule_set.all_positions() {
        if let Some(piece) = game.board.at(&position) {
            writeln!(w, "Position {} has {} {}", position, piece.color, piece.kind)?;
        }
    }
    Ok(())
}

/// Leaf statistics of a move tree walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCount {
    pub all: usize,
    pub captures: usize,
}

impl AddAssign for NodeCount {
    fn add_assign(&mut self, rhs: Self) {
        self.all += rhs.all;
        self.captures += rhs.captures;
    }
}

impl Display for NodeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - cp: {:<4}", self.all, self.captures)
    }
}

/// Counts the leaves of the shape-legal move tree `depth` plies deep.
pub fn count_nodes(rule_set: &dyn RuleSet, board: &Board, depth: usize) -> NodeCount {
    if depth == 0 {
        return NodeCount {
            all: 1,
            ..Default::default()
        };
    }
    let mut result = NodeCount::default();
    for _move in rule_set.legal_moves(board, Duration::ZERO) {
        if depth == 1 {
            result.all += 1;
            if board.at(&_move.to).is_some() {
                result.captures += 1;
            }
            continue;
        }
        if let Ok(next) = rule_set.apply_move(board, &_move) {
            result += count_nodes(rule_set, &next, depth - 1);
        }
    }
    result
}
