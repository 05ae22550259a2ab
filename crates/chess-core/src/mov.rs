//! Move representation.

use crate::{Piece, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a move from UCI text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move length: expected 4 or 5 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(char),
}

/// Move flags, stored in the top four bits of a [`Move`].
///
/// Bit 2 marks a capture and bit 3 a promotion; for promotions the low two
/// bits select the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    Quiet = 0,
    DoublePush = 1,
    CastleKingside = 2,
    CastleQueenside = 3,
    Capture = 4,
    EnPassant = 5,
    PromoteKnight = 8,
    PromoteBishop = 9,
    PromoteRook = 10,
    PromoteQueen = 11,
    CapturePromoteKnight = 12,
    CapturePromoteBishop = 13,
    CapturePromoteRook = 14,
    CapturePromoteQueen = 15,
}

impl MoveFlag {
    const CAPTURE_BIT: u8 = 0b0100;
    const PROMOTION_BIT: u8 = 0b1000;

    /// Decodes a 4-bit flag value. Unused codes (6, 7) decode as `Quiet`.
    #[inline]
    const fn from_bits(bits: u8) -> Self {
        match bits & 0xF {
            1 => MoveFlag::DoublePush,
            2 => MoveFlag::CastleKingside,
            3 => MoveFlag::CastleQueenside,
            4 => MoveFlag::Capture,
            5 => MoveFlag::EnPassant,
            8 => MoveFlag::PromoteKnight,
            9 => MoveFlag::PromoteBishop,
            10 => MoveFlag::PromoteRook,
            11 => MoveFlag::PromoteQueen,
            12 => MoveFlag::CapturePromoteKnight,
            13 => MoveFlag::CapturePromoteBishop,
            14 => MoveFlag::CapturePromoteRook,
            15 => MoveFlag::CapturePromoteQueen,
            _ => MoveFlag::Quiet,
        }
    }

    /// Builds the promotion flag for `piece`, or `None` if the piece cannot
    /// be promoted to.
    pub const fn promotion(piece: Piece, capture: bool) -> Option<Self> {
        let low = match piece {
            Piece::Knight => 0,
            Piece::Bishop => 1,
            Piece::Rook => 2,
            Piece::Queen => 3,
            Piece::Pawn | Piece::King => return None,
        };
        let capture_bit = if capture { Self::CAPTURE_BIT } else { 0 };
        Some(Self::from_bits(Self::PROMOTION_BIT | capture_bit | low))
    }

    /// Returns true if the move removes an enemy piece (including en passant
    /// and capturing promotions).
    #[inline]
    pub const fn is_capture(self) -> bool {
        (self as u8) & Self::CAPTURE_BIT != 0
    }

    /// Returns true if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        (self as u8) & Self::PROMOTION_BIT != 0
    }

    /// Returns the promotion piece if this is a promotion move.
    #[inline]
    pub const fn promotion_piece(self) -> Option<Piece> {
        if !self.is_promotion() {
            return None;
        }
        Some(match (self as u8) & 0b11 {
            0 => Piece::Knight,
            1 => Piece::Bishop,
            2 => Piece::Rook,
            _ => Piece::Queen,
        })
    }

    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }
}

/// A chess move.
///
/// Encoded in 16 bits: 6 bits from, 6 bits to, 4 bits flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// The "no move" sentinel. Its from and to squares coincide, so it never
    /// equals a real move.
    pub const NULL: Move = Move(0);

    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        let encoded = (from.index() as u16) | ((to.index() as u16) << 6) | ((flag as u16) << 12);
        Move(encoded)
    }

    /// Creates a non-capturing move with no special flags.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveFlag::Quiet)
    }

    /// Creates an ordinary capture.
    #[inline]
    pub const fn capture(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveFlag::Capture)
    }

    /// Creates a promotion, or `None` if `piece` is not a promotion target.
    pub const fn promotion(from: Square, to: Square, piece: Piece, capture: bool) -> Option<Self> {
        match MoveFlag::promotion(piece, capture) {
            Some(flag) => Some(Self::new(from, to, flag)),
            None => None,
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_masked(self.0)
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_masked(self.0 >> 6)
    }

    /// Returns the move flag.
    #[inline]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::from_bits((self.0 >> 12) as u8)
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flag().is_capture()
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<Piece> {
        self.flag().promotion_piece()
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == Self::NULL.0
    }

    /// Returns the raw 16-bit encoding.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    /// The null move is written "0000".
    pub fn to_uci(self) -> String {
        if self.is_null() {
            return "0000".to_string();
        }
        match self.promotion_piece().and_then(Piece::promotion_char) {
            Some(c) => format!("{}{}{}", self.from(), self.to(), c),
            None => format!("{}{}", self.from(), self.to()),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// UCI text carries no capture information, so the result is a quiet move
    /// or a non-capturing promotion. Callers match it against generated moves
    /// by from, to and promotion piece.
    pub fn from_uci(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength(s.chars().count()));
        }
        let from = Square::from_algebraic(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[0..2].to_string()))?;
        let to = Square::from_algebraic(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[2..4].to_string()))?;
        let Some(c) = s[4..].chars().next() else {
            return Ok(Move::quiet(from, to));
        };
        let piece = match c.to_ascii_lowercase() {
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            _ => return Err(MoveParseError::InvalidPromotion(c)),
        };
        Move::promotion(from, to, piece, false).ok_or(MoveParseError::InvalidPromotion(c))
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self.to_uci())?;
        if self.is_capture() {
            write!(f, "x")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn move_encoding() {
        let m = Move::new(sq("e2"), sq("e4"), MoveFlag::DoublePush);
        assert_eq!(m.from(), sq("e2"));
        assert_eq!(m.to(), sq("e4"));
        assert_eq!(m.flag(), MoveFlag::DoublePush);
        assert!(!m.is_capture());
    }

    #[test]
    fn capture_flag() {
        assert!(Move::capture(sq("d4"), sq("e5")).is_capture());
        assert!(Move::new(sq("d5"), sq("e6"), MoveFlag::EnPassant).is_capture());
        assert!(!Move::quiet(sq("d4"), sq("d5")).is_capture());
        assert!(!Move::new(sq("e1"), sq("g1"), MoveFlag::CastleKingside).is_capture());
    }

    #[test]
    fn promotion_flags() {
        let quiet_promo = Move::promotion(sq("e7"), sq("e8"), Piece::Queen, false).unwrap();
        assert_eq!(quiet_promo.flag(), MoveFlag::PromoteQueen);
        assert_eq!(quiet_promo.promotion_piece(), Some(Piece::Queen));
        assert!(!quiet_promo.is_capture());

        let capture_promo = Move::promotion(sq("e7"), sq("d8"), Piece::Knight, true).unwrap();
        assert_eq!(capture_promo.flag(), MoveFlag::CapturePromoteKnight);
        assert_eq!(capture_promo.promotion_piece(), Some(Piece::Knight));
        assert!(capture_promo.is_capture());

        assert!(Move::promotion(sq("e7"), sq("e8"), Piece::King, false).is_none());
        assert_eq!(MoveFlag::Capture.promotion_piece(), None);
    }

    #[test]
    fn flag_bits_decode_to_themselves() {
        for flag in [
            MoveFlag::Quiet,
            MoveFlag::DoublePush,
            MoveFlag::CastleKingside,
            MoveFlag::CastleQueenside,
            MoveFlag::Capture,
            MoveFlag::EnPassant,
            MoveFlag::PromoteKnight,
            MoveFlag::PromoteBishop,
            MoveFlag::PromoteRook,
            MoveFlag::PromoteQueen,
            MoveFlag::CapturePromoteKnight,
            MoveFlag::CapturePromoteBishop,
            MoveFlag::CapturePromoteRook,
            MoveFlag::CapturePromoteQueen,
        ] {
            assert_eq!(Move::new(sq("a2"), sq("b3"), flag).flag(), flag);
        }
    }

    #[test]
    fn null_move_is_distinct() {
        assert!(Move::NULL.is_null());
        assert_eq!(Move::default(), Move::NULL);
        assert_ne!(Move::quiet(sq("a1"), sq("a2")), Move::NULL);
        assert_eq!(Move::NULL.to_uci(), "0000");
    }

    #[test]
    fn uci_text() {
        assert_eq!(Move::quiet(sq("e2"), sq("e4")).to_uci(), "e2e4");
        let promo = Move::promotion(sq("e7"), sq("e8"), Piece::Rook, false).unwrap();
        assert_eq!(promo.to_uci(), "e7e8r");

        let parsed: Move = "e7e8Q".parse().unwrap();
        assert_eq!(parsed.promotion_piece(), Some(Piece::Queen));
        assert_eq!(Move::from_uci("g1f3"), Some(Move::quiet(sq("g1"), sq("f3"))));
    }

    #[test]
    fn uci_errors() {
        assert_eq!("e2".parse::<Move>(), Err(MoveParseError::InvalidLength(2)));
        assert_eq!("e2e4qq".parse::<Move>(), Err(MoveParseError::InvalidLength(6)));
        assert_eq!(
            "e2e9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare("e9".to_string()))
        );
        assert_eq!("e7e8k".parse::<Move>(), Err(MoveParseError::InvalidPromotion('k')));
        assert!(Move::from_uci("invalid").is_none());
    }

    #[test]
    fn debug_marks_captures() {
        assert_eq!(format!("{:?}", Move::capture(sq("d4"), sq("e5"))), "Move(d4e5x)");
        assert_eq!(format!("{}", Move::capture(sq("d4"), sq("e5"))), "d4e5");
    }
}
