//! Per-node search context and the continuation history tables it borrows.

use crate::params::update_entry;
use chess_core::{Piece, Square};

/// History scores for the current move indexed by `[piece][to]`.
pub type PieceToHistory = [[i32; Square::NUM]; Piece::NUM];

/// History of move pairs: `[previous piece][previous to]` selects a
/// [`PieceToHistory`] for the reply.
///
/// The search keeps one table keyed by the opponent's last move (counter-move
/// history) and one keyed by our own previous move (follow-up history).
#[derive(Clone)]
pub struct ContinuationHistory {
    table: Box<[PieceToHistory]>,
}

impl ContinuationHistory {
    pub fn new() -> Self {
        Self {
            table: vec![[[0; Square::NUM]; Piece::NUM]; Piece::NUM * Square::NUM].into_boxed_slice(),
        }
    }

    #[inline]
    fn slot(piece: Piece, to: Square) -> usize {
        piece.index() * Square::NUM + to.index()
    }

    #[inline]
    pub fn get(&self, piece: Piece, to: Square) -> &PieceToHistory {
        &self.table[Self::slot(piece, to)]
    }

    /// Returns the sub-table for replies to a move of `piece` to `to`, for
    /// lending to a [`SearchStackInfo`].
    #[inline]
    pub fn get_mut(&mut self, piece: Piece, to: Square) -> &mut PieceToHistory {
        &mut self.table[Self::slot(piece, to)]
    }

    pub fn clear(&mut self) {
        self.table
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|entry| *entry = 0);
    }

    /// Divides every entry by `divisor`.
    pub fn age(&mut self, divisor: i32) {
        self.table
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|entry| *entry /= divisor);
    }
}

impl Default for ContinuationHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Context the search supplies for one node.
///
/// Either continuation table may be absent (at the root, or after a null
/// move); an absent table reads as zero and is never updated.
#[derive(Default)]
pub struct SearchStackInfo<'a> {
    /// Distance from the root, used to look up killers.
    pub ply: usize,
    pub counter_move_history: Option<&'a mut PieceToHistory>,
    pub followup_move_history: Option<&'a mut PieceToHistory>,
}

impl<'a> SearchStackInfo<'a> {
    pub fn new(ply: usize) -> Self {
        Self {
            ply,
            counter_move_history: None,
            followup_move_history: None,
        }
    }

    pub fn with_counter_move_history(mut self, table: &'a mut PieceToHistory) -> Self {
        self.counter_move_history = Some(table);
        self
    }

    pub fn with_followup_move_history(mut self, table: &'a mut PieceToHistory) -> Self {
        self.followup_move_history = Some(table);
        self
    }

    /// Sum of the counter-move and follow-up entries for `[piece][to]`.
    #[inline]
    pub fn continuation_score(&self, piece: Piece, to: Square) -> i32 {
        [&self.counter_move_history, &self.followup_move_history]
            .into_iter()
            .flatten()
            .map(|table| table[piece.index()][to.index()])
            .sum()
    }

    /// Applies a decayed update to `[piece][to]` in every present table.
    pub(crate) fn update_continuations(
        &mut self,
        piece: Piece,
        to: Square,
        hist_depth: i32,
        divisor: i32,
        bonus: i32,
    ) {
        for table in [&mut self.counter_move_history, &mut self.followup_move_history]
            .into_iter()
            .flatten()
        {
            update_entry(&mut table[piece.index()][to.index()], hist_depth, divisor, bonus);
        }
    }
}
