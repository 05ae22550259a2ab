//! Search-wide heuristic tables: killer moves and the history table.

use crate::config::OrderingConfig;
use chess_core::{Color, Move, Piece, Square};
use tracing::debug;

/// History scores indexed by `[side][piece][to]`.
pub type HistoryTable = [[[i32; Square::NUM]; Piece::NUM]; Color::NUM];

/// Number of killer slots kept per ply.
pub const KILLER_SLOTS: usize = 2;

/// Decays `entry` toward zero by `hist_depth / divisor` of its value, then
/// adds `bonus`. Division truncates toward zero.
#[inline]
pub(crate) fn update_entry(entry: &mut i32, hist_depth: i32, divisor: i32, bonus: i32) {
    *entry -= hist_depth * *entry / divisor;
    *entry += bonus;
}

/// Heuristic state that persists across every node of a search.
///
/// Owned by the search controller and lent to each [`MoveOrder`] for the
/// duration of one node. Parallel searches give each thread its own copy.
///
/// [`MoveOrder`]: crate::MoveOrder
#[derive(Clone)]
pub struct SearchParameters {
    killers: Vec<[Move; KILLER_SLOTS]>,
    history: Box<HistoryTable>,
    config: OrderingConfig,
}

impl SearchParameters {
    pub fn new(config: &OrderingConfig) -> Self {
        Self {
            killers: vec![[Move::NULL; KILLER_SLOTS]; config.max_ply],
            history: Box::new([[[0; Square::NUM]; Piece::NUM]; Color::NUM]),
            config: config.clone(),
        }
    }

    #[inline]
    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Returns the killer in `slot` at `ply`, or [`Move::NULL`] if none is
    /// recorded or the ply is beyond the table.
    #[inline]
    pub fn killer(&self, ply: usize, slot: usize) -> Move {
        self.killers
            .get(ply)
            .and_then(|slots| slots.get(slot))
            .copied()
            .unwrap_or(Move::NULL)
    }

    #[inline]
    pub fn is_killer(&self, ply: usize, m: Move) -> bool {
        !m.is_null() && self.killers.get(ply).is_some_and(|slots| slots.contains(&m))
    }

    /// Records a quiet move that caused a cutoff at `ply`. The previous
    /// primary killer moves to the secondary slot.
    pub fn record_killer(&mut self, ply: usize, m: Move) {
        let Some(slots) = self.killers.get_mut(ply) else {
            return;
        };
        if slots[0] != m {
            slots[1] = slots[0];
            slots[0] = m;
        }
    }

    #[inline]
    pub fn history(&self, side: Color, piece: Piece, to: Square) -> i32 {
        self.history[side.index()][piece.index()][to.index()]
    }

    /// Overwrites a history entry.
    pub fn set_history(&mut self, side: Color, piece: Piece, to: Square, value: i32) {
        self.history[side.index()][piece.index()][to.index()] = value;
    }

    /// Depth used to scale history updates, capped so that deep searches do
    /// not swamp the table.
    #[inline]
    pub fn hist_depth(&self, depth: i32) -> i32 {
        depth.min(self.config.history_depth_cap)
    }

    /// Applies one decayed update of `bonus` to the `[side][piece][to]` entry.
    pub(crate) fn update_history(
        &mut self,
        side: Color,
        piece: Piece,
        to: Square,
        hist_depth: i32,
        bonus: i32,
    ) {
        let entry = &mut self.history[side.index()][piece.index()][to.index()];
        update_entry(entry, hist_depth, self.config.history_decay_divisor, bonus);
    }

    /// Clears killers and history.
    pub fn reset(&mut self) {
        self.clear_killers();
        *self.history = [[[0; Square::NUM]; Piece::NUM]; Color::NUM];
    }

    /// Prepares the tables for a new search: killers from the previous
    /// position are dropped and history is scaled down rather than discarded.
    pub fn new_search(&mut self) {
        self.clear_killers();
        self.age_history();
        debug!(
            divisor = self.config.history_age_divisor,
            "aged history for new search"
        );
    }

    fn clear_killers(&mut self) {
        self.killers.fill([Move::NULL; KILLER_SLOTS]);
    }

    fn age_history(&mut self) {
        let divisor = self.config.history_age_divisor;
        self.history
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|entry| *entry /= divisor);
    }
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self::new(&OrderingConfig::default())
    }
}
