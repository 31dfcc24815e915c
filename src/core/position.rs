use std::fmt::{self, Display};

use crate::core::definitions::{Color, Error, Result};

/// Position on the classic rank-file board: `[file, rank]`, both in `0..8` when on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position2D(pub [i8; 2]);

/// Position on the hyper-board: `[x, y, z, w]`, each in `0..6` when on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position4D(pub [i8; 4]);

/// A variant-specific grid position.
///
/// Positions of different variants never compare equal, and `Invalid`
/// compares unequal to everything, itself included.
#[derive(Clone, Copy, Debug)]
pub enum Position {
    Flat(Position2D),
    Hyper(Position4D),
    Invalid,
}

const INVALID_DISPLAY: &str = "invalid position";

impl Position2D {
    pub const SIZE: i8 = 8;

    pub const fn new(file: i8, rank: i8) -> Self {
        Position2D([file, rank])
    }

    pub fn file(&self) -> i8 {
        self.0[0]
    }

    pub fn rank(&self) -> i8 {
        self.0[1]
    }

    pub fn is_on_board(&self) -> bool {
        self.0.iter().all(|&c| (0..Self::SIZE).contains(&c))
    }

    /// Parses `<file a-h><rank 1-8>`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Position2D::new((file - b'a') as i8, (rank - b'1') as i8))
            }
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl Position4D {
    pub const SIZE: i8 = 6;

    pub const fn new(x: i8, y: i8, z: i8, w: i8) -> Self {
        Position4D([x, y, z, w])
    }

    pub fn is_on_board(&self) -> bool {
        self.0.iter().all(|&c| (0..Self::SIZE).contains(&c))
    }

    /// Parses `<file a-f><rank 1-6><meta-file m-r><meta-rank 1-6>`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.as_bytes() {
            [x @ b'a'..=b'f', y @ b'1'..=b'6', z @ b'm'..=b'r', w @ b'1'..=b'6'] => Ok(
                Position4D::new(
                    (x - b'a') as i8,
                    (y - b'1') as i8,
                    (z - b'm') as i8,
                    (w - b'1') as i8,
                ),
            ),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }

    /// Projects the cell into 3D space for display: the 6×6 boards of one `w`
    /// layer are laid side by side along `z`, layers stack upwards.
    pub fn world_placement(&self) -> [f32; 3] {
        let [x, y, z, w] = self.0.map(f32::from);
        [x + 7.0 * z, 2.0 * w, y]
    }
}

fn axis_char(base: char, value: i8) -> char {
    char::from_u32((base as i32 + value as i32) as u32).unwrap_or('?')
}

impl Display for Position2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", axis_char('a', self.file()), self.rank() as i32 + 1)
    }
}

impl Display for Position4D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.0;
        write!(
            f,
            "{}{}{}{}",
            axis_char('a', x),
            y as i32 + 1,
            axis_char('m', z),
            w as i32 + 1
        )
    }
}

impl Position {
    /// Checkerboard colour: even coordinate sums are black.
    pub fn cell_color(&self) -> Color {
        let sum: i32 = match self {
            Position::Flat(p) => p.0.iter().map(|&c| c as i32).sum(),
            Position::Hyper(p) => p.0.iter().map(|&c| c as i32).sum(),
            Position::Invalid => return Color::Black,
        };
        if sum.rem_euclid(2) == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Position::Invalid)
    }

    /// Presentation-only placement in 3D space. Only hyper positions have one.
    pub fn world_placement(&self) -> Option<[f32; 3]> {
        match self {
            Position::Hyper(p) => Some(p.world_placement()),
            _ => None,
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Position::Flat(a), Position::Flat(b)) => a == b,
            (Position::Hyper(a), Position::Hyper(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Flat(p) => p.fmt(f),
            Position::Hyper(p) => p.fmt(f),
            Position::Invalid => f.write_str(INVALID_DISPLAY),
        }
    }
}

impl From<Position2D> for Position {
    fn from(value: Position2D) -> Self {
        Position::Flat(value)
    }
}

impl From<Position4D> for Position {
    fn from(value: Position4D) -> Self {
        Position::Hyper(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_strings() {
        assert_eq!(Position2D::new(4, 3).to_string(), "e4");
        assert_eq!(Position2D::parse("a1").unwrap(), Position2D::new(0, 0));
        assert_eq!(Position2D::parse("h8").unwrap(), Position2D::new(7, 7));
        for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", "4e", "é"] {
            assert_eq!(
                Position2D::parse(bad),
                Err(Error::InvalidFormat(bad.to_string())),
                "'{bad}' should not parse"
            );
        }
    }

    #[test]
    fn hyper_strings() {
        assert_eq!(Position4D::new(0, 0, 0, 0).to_string(), "a1m1");
        assert_eq!(Position4D::new(5, 5, 5, 5).to_string(), "f6r6");
        assert_eq!(Position4D::parse("c4n2").unwrap(), Position4D::new(2, 3, 1, 1));
        for bad in ["a1m", "a1m1a", "g1m1", "a7m1", "a1s1", "a1m7", "a1a1", "m1a1"] {
            assert!(Position4D::parse(bad).is_err(), "'{bad}' should not parse");
        }
    }

    #[test]
    fn invalid_is_never_equal() {
        let flat: Position = Position2D::new(0, 0).into();
        let hyper: Position = Position4D::new(0, 0, 0, 0).into();
        assert_ne!(Position::Invalid, Position::Invalid);
        assert_ne!(Position::Invalid, flat);
        assert_ne!(flat, Position::Invalid);
        assert_ne!(flat, hyper);
        assert_ne!(hyper, flat);
        assert_eq!(Position::Invalid.to_string(), "invalid position");
    }

    #[test]
    fn checkerboard() {
        assert_eq!(Position::from(Position2D::new(0, 0)).cell_color(), Color::Black);
        assert_eq!(Position::from(Position2D::new(1, 0)).cell_color(), Color::White);
        assert_eq!(Position::from(Position2D::new(7, 7)).cell_color(), Color::Black);
        assert_eq!(
            Position::from(Position4D::new(1, 0, 0, 0)).cell_color(),
            Color::White
        );
        assert_eq!(
            Position::from(Position4D::new(1, 1, 1, 1)).cell_color(),
            Color::Black
        );
    }

    #[test]
    fn world_placement_only_for_hyper() {
        assert_eq!(Position::from(Position2D::new(3, 3)).world_placement(), None);
        assert_eq!(
            Position::from(Position4D::new(1, 2, 3, 4)).world_placement(),
            Some([22.0, 8.0, 2.0])
        );
    }
}
