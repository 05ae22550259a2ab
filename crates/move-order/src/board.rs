//! The board queries move ordering depends on.

use chess_core::{Color, Move, Piece, Square};

/// Position queries used to score moves.
///
/// Implemented by the engine's board representation. All methods take the
/// side making `mv`; they are pure queries and must not change the position.
pub trait OrderingBoard {
    /// Net material result of the full capture sequence started by `mv` on
    /// its destination square.
    fn static_exchange(&self, side: Color, mv: Move) -> i32;

    /// Material gain of `mv` assuming only the immediate recapture. Cheaper
    /// than [`static_exchange`](Self::static_exchange) and used to avoid it
    /// when the capture already looks non-losing.
    fn exchange_score(&self, side: Color, mv: Move) -> i32;

    /// Most-valuable-victim / least-valuable-attacker tiebreak. Expected to
    /// be non-negative and far smaller than the gaps between score bands.
    fn mvv_lva(&self, side: Color, mv: Move) -> i32;

    /// The piece of `side` standing on `sq`.
    fn piece_on(&self, side: Color, sq: Square) -> Piece;

    /// Whether `mv` belongs to the capture partition. Defaults to the move's
    /// capture flag.
    #[inline]
    fn is_capture(&self, mv: Move) -> bool {
        mv.is_capture()
    }
}
