//! Wire form of a [`Match`], shared by persistence and transport.
//!
//! Positions travel as their display strings and the rule set as its
//! registry name, so decoding needs a [`Registry`] to turn the record back
//! into a match.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::core::definitions::{Color, Error, Move, Piece, PieceType, Result};
use crate::core::engine::{Board, Match};
use crate::core::registry::Registry;

/// Time since the start of a match, written like `3s` or `1m 8s`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Elapsed(pub Duration);

impl Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", humantime::format_duration(self.0))
    }
}

impl FromStr for Elapsed {
    type Err = humantime::DurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Elapsed::default());
        }
        humantime::parse_duration(s).map(Elapsed)
    }
}

/// RFC 3339 timestamp with second precision. Times before 1970 display as
/// the epoch; [`Match::to_record`] refuses them before they get here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timestamp(pub SystemTime);

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", humantime::format_rfc3339_seconds(self.0.max(UNIX_EPOCH)))
    }
}

impl FromStr for Timestamp {
    type Err = humantime::TimestampError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        humantime::parse_rfc3339_weak(s).map(Timestamp)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PieceRecord {
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub colour: Color,
    pub position: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardRecord {
    pub pieces: Vec<PieceRecord>,
    pub turn: Color,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveRecord {
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub from: String,
    pub to: String,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub time: Elapsed,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchRecord {
    #[serde(rename = "ruleset")]
    pub rule_set: String,
    pub board: BoardRecord,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub start_time: Option<Timestamp>,
    pub moves: Vec<MoveRecord>,
}

impl From<&Move> for MoveRecord {
    fn from(value: &Move) -> Self {
        MoveRecord {
            kind: value.kind,
            from: value.from.to_string(),
            to: value.to.to_string(),
            time: Elapsed(value.time),
        }
    }
}

impl From<&Board> for BoardRecord {
    fn from(value: &Board) -> Self {
        BoardRecord {
            pieces: value
                .iter_pieces()
                .map(|piece| PieceRecord {
                    kind: piece.kind,
                    colour: piece.color,
                    position: piece.position.to_string(),
                })
                .collect(),
            turn: value.turn(),
        }
    }
}

impl From<&Match> for MatchRecord {
    fn from(value: &Match) -> Self {
        MatchRecord {
            rule_set: value.rule_set.name().to_string(),
            board: BoardRecord::from(&value.board),
            start_time: value.start_time.map(Timestamp),
            moves: value.moves.iter().map(MoveRecord::from).collect(),
        }
    }
}

impl MatchRecord {
    /// Rebuilds the match: resolves the rule set, then parses every position with it.
    pub fn resolve(self, registry: &Registry) -> Result<Match> {
        let rule_set = registry.get(&self.rule_set)?;

        let mut pieces: Vec<Piece> = Vec::with_capacity(self.board.pieces.len());
        for record in self.board.pieces {
            let position = rule_set.parse_position(&record.position)?;
            if pieces.iter().any(|piece| piece.position == position) {
                return Err(Error::Decode(format!(
                    "two pieces at {}",
                    record.position
                )));
            }
            pieces.push(Piece::new(record.kind, record.colour, position));
        }

        let moves = self
            .moves
            .into_iter()
            .map(|record| {
                Ok(Move::new(
                    record.kind,
                    rule_set.parse_position(&record.from)?,
                    rule_set.parse_position(&record.to)?,
                    record.time.0,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Match {
            rule_set,
            board: Board::new(pieces, self.board.turn),
            start_time: self.start_time.map(|timestamp| timestamp.0),
            moves,
        })
    }
}

impl Match {
    /// Wire record of this match. RFC 3339 cannot express times before 1970.
    pub fn to_record(&self) -> Result<MatchRecord> {
        if let Some(start) = self.start_time {
            if start < UNIX_EPOCH {
                return Err(Error::Encode(format!("start time {start:?} predates 1970")));
            }
        }
        Ok(MatchRecord::from(self))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_record()?).map_err(|err| Error::Encode(err.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_record()?).map_err(|err| Error::Encode(err.to_string()))
    }

    pub fn from_json(json: &str, registry: &Registry) -> Result<Match> {
        let record: MatchRecord =
            serde_json::from_str(json).map_err(|err| Error::Decode(err.to_string()))?;
        record.resolve(registry)
    }

    /// Compact binary snapshot for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        postcard::to_allocvec(&self.to_record()?).map_err(|err| Error::Encode(err.to_string()))
    }

    pub fn from_bytes(bytes: &[u8], registry: &Registry) -> Result<Match> {
        let record: MatchRecord =
            postcard::from_bytes(bytes).map_err(|err| Error::Decode(err.to_string()))?;
        record.resolve(registry)
    }
}
