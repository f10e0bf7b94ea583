use crate::board::Color;
use std::fmt;
use std::str::FromStr;

/// A board square, a1 = 0 … h8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    #[inline(always)]
    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    #[inline(always)]
    pub const fn bb(self) -> u64 {
        1u64 << self.0
    }

    /// Vertical mirror (a1 <-> a8).
    #[inline(always)]
    pub const fn flip(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// Square as seen from `color`'s side of the board.
    #[inline(always)]
    pub const fn relative(self, color: Color) -> Self {
        match color {
            Color::White => self,
            Color::Black => self.flip(),
        }
    }

    /// Rank counted from `color`'s back rank (0..=7).
    #[inline(always)]
    pub const fn relative_rank(self, color: Color) -> u8 {
        self.relative(color).rank()
    }

    /// Dark squares: a1, c1, ... (file + rank even).
    #[inline(always)]
    pub const fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 64 {
            Ok(Square(value))
        } else {
            Err(format!("square index out of range: {}", value))
        }
    }
}

impl FromStr for Square {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(format!("invalid square: {:?}", s));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank > 7 {
            return Err(format!("invalid square: {:?}", s));
        }
        Ok(Square::from_file_rank(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip_corners() {
        for name in ["a1", "h1", "a8", "h8", "e4"] {
            let sq = Square::from_str(name).unwrap();
            assert_eq!(sq.to_string(), name);
        }
        assert!(Square::from_str("i9").is_err());
        assert!(Square::from_str("e").is_err());
    }

    #[test]
    fn relative_rank_mirrors_for_black() {
        let e2 = Square::from_str("e2").unwrap();
        assert_eq!(e2.relative_rank(Color::White), 1);
        assert_eq!(e2.relative_rank(Color::Black), 6);
        assert_eq!(e2.flip(), Square::from_str("e7").unwrap());
    }

    #[test]
    fn square_colors() {
        assert!(Square::from_str("a1").unwrap().is_dark());
        assert!(!Square::from_str("h1").unwrap().is_dark());
        assert!(Square::from_str("h8").unwrap().is_dark());
    }
}
