//! Chess piece representation.

/// The six piece kinds. The discriminant doubles as the piece id used to
/// index history tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// Number of piece kinds.
    pub const NUM: usize = 6;

    /// All piece kinds in id order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Returns the piece id (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase UCI promotion letter, if the piece is a valid
    /// promotion target.
    pub const fn promotion_char(self) -> Option<char> {
        match self {
            Piece::Knight => Some('n'),
            Piece::Bishop => Some('b'),
            Piece::Rook => Some('r'),
            Piece::Queen => Some('q'),
            Piece::Pawn | Piece::King => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense() {
        for (i, piece) in Piece::ALL.into_iter().enumerate() {
            assert_eq!(piece.index(), i);
        }
        assert_eq!(Piece::ALL.len(), Piece::NUM);
    }

    #[test]
    fn promotion_chars() {
        assert_eq!(Piece::Queen.promotion_char(), Some('q'));
        assert_eq!(Piece::Knight.promotion_char(), Some('n'));
        assert_eq!(Piece::Pawn.promotion_char(), None);
        assert_eq!(Piece::King.promotion_char(), None);
    }
}
