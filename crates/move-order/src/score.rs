//! Ordering score bands and the score list kept alongside the moves.
//!
//! Bands are separated by large constants so that no in-band term (SEE,
//! MVV/LVA, history) can lift a move into the band above it. From highest to
//! lowest: IID/book move, winning capture, queen promotion, even capture or
//! killer, quiet move, losing capture.

use chess_core::MoveList;

pub const SCORE_IID_MOVE: i32 = 1 << 20;
pub const SCORE_WINNING_CAPTURE: i32 = 1 << 18;
pub const SCORE_QUEEN_PROMO: i32 = 1 << 17;
pub const SCORE_EVEN_CAPTURE: i32 = 1 << 16;
/// Killers rank directly below even captures.
pub const SCORE_KILLER: i32 = SCORE_EVEN_CAPTURE - 1;
pub const SCORE_QUIET_MOVE: i32 = -(1 << 30);
pub const SCORE_LOSING_CAPTURE: i32 = -(1 << 30) - (1 << 28);

/// Scores for the moves generated so far, index-aligned with the move list.
#[derive(Clone)]
pub struct ScoreList {
    scores: [i32; MoveList::MAX_MOVES],
    len: usize,
}

impl ScoreList {
    #[inline]
    pub const fn new() -> Self {
        ScoreList {
            scores: [0; MoveList::MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, score: i32) {
        debug_assert!(self.len < MoveList::MAX_MOVES);
        self.scores[self.len] = score;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.scores[..self.len]
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.len && b < self.len);
        self.scores.swap(a, b);
    }
}

impl Default for ScoreList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for ScoreList {
    type Output = i32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl std::fmt::Debug for ScoreList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_ordered() {
        let bands = [
            SCORE_IID_MOVE,
            SCORE_WINNING_CAPTURE,
            SCORE_QUEEN_PROMO,
            SCORE_EVEN_CAPTURE,
            SCORE_KILLER,
            SCORE_QUIET_MOVE,
            SCORE_LOSING_CAPTURE,
        ];
        assert!(bands.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn push_get_swap() {
        let mut scores = ScoreList::new();
        assert!(scores.is_empty());
        scores.push(5);
        scores.push(-3);
        scores.push(9);
        scores.swap(0, 2);
        assert_eq!(scores.as_slice(), &[9, -3, 5]);
        assert_eq!(scores.get(1), Some(-3));
        assert_eq!(scores.get(3), None);
        assert_eq!(scores[2], 5);
        assert_eq!(scores.len(), 3);
    }
}
