//! Board square representation.

use std::fmt;

/// A square on the chess board, indexed 0 (a1) to 63 (h8), file-major within
/// each rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const NUM: usize = 64;

    pub const A1: Square = Square(0);
    pub const H8: Square = Square(63);

    /// Creates a square from file and rank indices (both 0-7).
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from its index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from the low six bits of `bits`.
    #[inline]
    pub(crate) const fn from_masked(bits: u16) -> Self {
        Square((bits & 0x3F) as u8)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the file index (0 = a, 7 = h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the rank index (0 = rank 1, 7 = rank 8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Parses algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank)
        {
            return None;
        }
        Square::new(file as u8 - b'a', rank as u8 - b'1')
    }

    /// Returns algebraic notation such as `"e4"`.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_coordinates() {
        let e4 = Square::new(4, 3).unwrap();
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert!(Square::new(8, 0).is_none());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn algebraic_round_trip() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("E4").unwrap().to_algebraic(), "e4");
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a10").is_none());
        assert!(Square::from_algebraic("").is_none());
    }

    #[test]
    fn masked_construction_wraps_to_board() {
        assert_eq!(Square::from_masked(0xFFFF), Square::H8);
        assert_eq!(Square::from_masked(64), Square::A1);
    }
}
