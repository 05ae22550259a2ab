//! Staged, lazily scored move ordering for one search node.
//!
//! Moves are handed out one at a time with a partial selection sort: each
//! call scans the unserved scores once and swaps the best into place. A node
//! that cuts off after a few moves never pays for sorting the rest, and
//! quiet moves are not scored at all until the captures worth trying first
//! have been served.

use crate::board::OrderingBoard;
use crate::params::SearchParameters;
use crate::score::{
    ScoreList, SCORE_EVEN_CAPTURE, SCORE_KILLER, SCORE_LOSING_CAPTURE, SCORE_QUEEN_PROMO,
    SCORE_QUIET_MOVE, SCORE_WINNING_CAPTURE,
};
use crate::stack::SearchStackInfo;
use chess_core::{Color, Move, MoveList, Piece};
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

/// Generation stage. Only ever advances, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Nothing generated yet.
    None,
    /// The hash move is being served; the rest of the list is untouched.
    HashMove,
    /// Captures are scored and eligible for selection.
    Captures,
    /// Quiets are scored too. Terminal.
    Quiets,
}

/// Move orderer for a single search node.
///
/// Created with the node's legal moves, drained with [`next_move`] until it
/// returns [`Move::NULL`] or the search cuts off, then told the outcome with
/// [`update_histories`].
///
/// [`next_move`]: MoveOrder::next_move
/// [`update_histories`]: MoveOrder::update_histories
pub struct MoveOrder<'a, B: OrderingBoard + ?Sized> {
    board: &'a B,
    color: Color,
    depth: i32,
    is_pv: bool,
    params: &'a mut SearchParameters,
    stack: SearchStackInfo<'a>,
    stage: Stage,
    hash_move: Move,
    moves: MoveList,
    scores: ScoreList,
    quiet_start: usize,
    index: usize,
}

impl<'a, B: OrderingBoard + ?Sized> MoveOrder<'a, B> {
    /// Creates an orderer. `hash_move` is [`Move::NULL`] when the node has
    /// none; otherwise it must be one of `moves`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        board: &'a B,
        color: Color,
        depth: i32,
        is_pv: bool,
        params: &'a mut SearchParameters,
        stack: SearchStackInfo<'a>,
        hash_move: Move,
        moves: MoveList,
    ) -> Self {
        Self {
            board,
            color,
            depth,
            is_pv,
            params,
            stack,
            stage: Stage::None,
            hash_move,
            moves,
            scores: ScoreList::new(),
            quiet_start: 0,
            index: 0,
        }
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The hash move being served, or [`Move::NULL`] if there is none or it
    /// was not found in the move list.
    #[inline]
    pub fn hash_move(&self) -> Move {
        self.hash_move
    }

    /// Boundary between the capture and quiet partitions. Meaningful once
    /// the orderer has reached [`Stage::Captures`].
    #[inline]
    pub fn quiet_start(&self) -> usize {
        self.quiet_start
    }

    /// Number of moves served from the list (the hash move is not counted).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The working move list. Positions below [`index`](Self::index) hold
    /// the moves served so far, in order.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        self.moves.as_slice()
    }

    /// Scores of the moves generated so far, aligned with [`moves`](Self::moves).
    #[inline]
    pub fn scores(&self) -> &[i32] {
        self.scores.as_slice()
    }

    /// Returns the next move to search, or [`Move::NULL`] when every move has
    /// been served.
    pub fn next_move(&mut self) -> Move {
        if self.stage == Stage::None {
            self.advance();
            if self.stage == Stage::HashMove {
                return self.hash_move;
            }
        }

        while self.index >= self.scores.len() {
            if self.stage == Stage::Quiets {
                return Move::NULL;
            }
            self.advance();
        }

        let (mut best_index, best_score) = self.select_best();

        // No winning captures left: killers and promotions should be able to
        // jump ahead of even and losing captures.
        if self.stage == Stage::Captures && best_score < SCORE_WINNING_CAPTURE {
            self.advance();
            best_index = self.select_best().0;
        }

        self.moves.swap(best_index, self.index);
        self.scores.swap(best_index, self.index);

        let m = self.moves[self.index];
        self.index += 1;
        m
    }

    /// Feeds the node's result back into the history tables.
    ///
    /// Call at most once, after the search of the node has settled on
    /// `best_move`. The best move is rewarded and every quiet move served
    /// before it is penalised, in the history table and in whichever
    /// continuation tables the stack frame carries.
    pub fn update_histories(&mut self, best_move: Move) {
        let hist_depth = self.params.hist_depth(self.depth);
        let bonus = hist_depth * hist_depth;

        self.adjust(best_move, hist_depth, bonus);

        // Nothing was tried before a hash move cutoff.
        if self.index == 0 || best_move == self.hash_move {
            debug!(%best_move, hist_depth, penalised = 0, "updated histories");
            return;
        }

        let mut penalised = 0;
        for i in 0..self.index {
            let m = self.moves[i];
            if m == best_move {
                break;
            }
            if self.board.is_capture(m) {
                continue;
            }
            self.adjust(m, hist_depth, -bonus);
            penalised += 1;
        }
        debug!(%best_move, hist_depth, penalised, "updated histories");
    }

    fn adjust(&mut self, m: Move, hist_depth: i32, bonus: i32) {
        let piece = self.board.piece_on(self.color, m.from());
        let divisor = self.params.config().history_decay_divisor;
        self.params
            .update_history(self.color, piece, m.to(), hist_depth, bonus);
        self.stack
            .update_continuations(piece, m.to(), hist_depth, divisor, bonus);
    }

    /// Performs exactly one stage transition.
    fn advance(&mut self) {
        let from = self.stage;
        match self.stage {
            Stage::None if self.hash_move.is_null() => self.begin_captures(),
            Stage::None => match self.moves.position(self.hash_move) {
                Some(i) => {
                    self.moves.remove(i);
                    self.stage = Stage::HashMove;
                }
                None => {
                    warn!(hash_move = %self.hash_move, "hash move not in move list, ignoring it");
                    self.hash_move = Move::NULL;
                    self.begin_captures();
                }
            },
            Stage::HashMove => self.begin_captures(),
            Stage::Captures => {
                self.stage = Stage::Quiets;
                self.score_quiets();
            }
            Stage::Quiets => return,
        }
        trace!(
            ?from,
            to = ?self.stage,
            scored = self.scores.len(),
            quiet_start = self.quiet_start,
            "move generation stage advanced"
        );
    }

    fn begin_captures(&mut self) {
        self.find_quiet_start();
        self.stage = Stage::Captures;
        self.score_captures();
    }

    /// Moves every capture to the front of the list and records where the
    /// quiets begin. Captures and quiets each keep their input order.
    fn find_quiet_start(&mut self) {
        let board = self.board;
        let (captures, quiets): (Vec<Move>, Vec<Move>) = self
            .moves
            .as_slice()
            .iter()
            .partition(|&&m| board.is_capture(m));
        self.quiet_start = captures.len();
        self.moves = captures.into_iter().chain(quiets).collect();
    }

    fn score_captures(&mut self) {
        for i in 0..self.quiet_start {
            let score = self.capture_score(self.moves[i]);
            self.scores.push(score);
        }
    }

    fn capture_score(&self, m: Move) -> i32 {
        let mvv_lva = self.board.mvv_lva(self.color, m);

        if self.is_pv {
            let see = self.board.static_exchange(self.color, m);
            return match see.cmp(&0) {
                Ordering::Greater => SCORE_WINNING_CAPTURE + see + mvv_lva,
                Ordering::Equal => SCORE_EVEN_CAPTURE + mvv_lva,
                Ordering::Less => SCORE_LOSING_CAPTURE + see + mvv_lva,
            };
        }

        // If the capture survives the first recapture we can stand pat after
        // it, so the full exchange is only needed when it does not.
        let exchange = self.board.exchange_score(self.color, m);
        let outcome = if exchange < 0 {
            self.board.static_exchange(self.color, m)
        } else {
            exchange
        };
        match outcome.cmp(&0) {
            Ordering::Greater => SCORE_WINNING_CAPTURE + mvv_lva,
            Ordering::Equal => SCORE_EVEN_CAPTURE + mvv_lva,
            Ordering::Less => SCORE_LOSING_CAPTURE + mvv_lva,
        }
    }

    fn score_quiets(&mut self) {
        let killer = self.params.killer(self.stack.ply, 0);
        for i in self.quiet_start..self.moves.len() {
            let m = self.moves[i];
            let score = if m == killer {
                SCORE_KILLER
            } else if m.promotion_piece() == Some(Piece::Queen) {
                SCORE_QUEEN_PROMO
            } else {
                let piece = self.board.piece_on(self.color, m.from());
                SCORE_QUIET_MOVE
                    + self.params.history(self.color, piece, m.to())
                    + self.stack.continuation_score(piece, m.to())
            };
            self.scores.push(score);
        }
    }

    /// Index and score of the best unserved move; ties go to the lower index.
    fn select_best(&self) -> (usize, i32) {
        let scores = self.scores.as_slice();
        let mut best_index = self.index;
        let mut best_score = scores[self.index];
        for (i, &score) in scores.iter().enumerate().skip(self.index + 1) {
            if score > best_score {
                best_index = i;
                best_score = score;
            }
        }
        (best_index, best_score)
    }
}

impl<B: OrderingBoard + ?Sized> Iterator for MoveOrder<'_, B> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let m = self.next_move();
        (!m.is_null()).then_some(m)
    }
}
