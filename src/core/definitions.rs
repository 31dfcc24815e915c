use std::fmt::{self, Display};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::position::Position;

#[derive(PartialEq, Eq, Hash, Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    #[default]
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(if self == &Self::White { "white" } else { "black" })
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// Chess glyph for this kind; white glyphs sit six code points below the black ones.
    pub fn symbol(self, color: Color) -> char {
        let black = match self {
            PieceType::King => '♚',
            PieceType::Queen => '♛',
            PieceType::Bishop => '♝',
            PieceType::Knight => '♞',
            PieceType::Rook => '♜',
            PieceType::Pawn => '♟',
        };
        match color {
            Color::Black => black,
            Color::White => char::from_u32(black as u32 - 6).unwrap_or(black),
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.symbol(Color::Black).encode_utf8(&mut buf))
    }
}

/// A chess piece. Pieces have no identity beyond these fields; a piece is
/// tracked across moves by its position.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
    pub position: Position,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color, position: impl Into<Position>) -> Piece {
        Piece {
            kind,
            color,
            position: position.into(),
        }
    }
}

/// A single relocation of one piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    /** kind of the moving piece, informational only */
    pub kind: PieceType,
    pub from: Position,
    pub to: Position,
    /** time since the start of the match */
    pub time: Duration,
}

impl Move {
    pub fn new(kind: PieceType, from: Position, to: Position, time: Duration) -> Move {
        Move {
            kind,
            from,
            to,
            time,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.from, self.to)?;
        if self.time.is_zero() {
            return Ok(());
        }
        let step = if self.time.as_secs() > 45 { 1000 } else { 100 };
        let millis = self.time.as_millis() / step * step;
        let truncated = Duration::from_millis(millis as u64);
        write!(f, "  +{}", humantime::format_duration(truncated))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /** malformed position string */
    InvalidFormat(String),
    /** shape violation, blocked trajectory, own piece on target or nothing to move */
    IllegalMove { from: Position, to: Position },
    /** wire data names a rule set nobody registered */
    UnknownRuleSet(String),
    /** malformed payload around otherwise valid data */
    Decode(String),
    Encode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormat(input) => write!(f, "error parsing grid position '{input}'"),
            Error::IllegalMove { from, to } => write!(f, "illegal move: {from} {to}"),
            Error::UnknownRuleSet(name) => write!(f, "unknown rule set '{name}'"),
            Error::Decode(reason) => write!(f, "error decoding match: {reason}"),
            Error::Encode(reason) => write!(f, "error encoding match: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn illegal(_move: &Move) -> Error {
        Error::IllegalMove {
            from: _move.from,
            to: _move.to,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
