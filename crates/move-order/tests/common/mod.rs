#![allow(dead_code)]

use chess_core::{Color, Move, Piece, Square};
use move_order::OrderingBoard;
use std::cell::Cell;
use std::collections::HashMap;

/// Board double with exchange values and piece placement fixed per test.
#[derive(Default)]
pub struct ScriptedBoard {
    pieces: HashMap<Square, Piece>,
    see: HashMap<Move, i32>,
    exchange: HashMap<Move, i32>,
    mvv_lva: HashMap<Move, i32>,
    see_calls: Cell<usize>,
}

impl ScriptedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a piece of the side to move. Unplaced squares report a pawn.
    pub fn with_piece(mut self, sq: &str, piece: Piece) -> Self {
        self.pieces.insert(sq_of(sq), piece);
        self
    }

    /// Scripts a capture whose cheap exchange agrees with its SEE.
    pub fn with_capture(self, mv: Move, see: i32, mvv_lva: i32) -> Self {
        self.with_exchange(mv, see, see, mvv_lva)
    }

    pub fn with_exchange(mut self, mv: Move, see: i32, exchange: i32, mvv_lva: i32) -> Self {
        self.see.insert(mv, see);
        self.exchange.insert(mv, exchange);
        self.mvv_lva.insert(mv, mvv_lva);
        self
    }

    /// Number of full static exchange evaluations requested so far.
    pub fn see_calls(&self) -> usize {
        self.see_calls.get()
    }
}

impl OrderingBoard for ScriptedBoard {
    fn static_exchange(&self, _side: Color, mv: Move) -> i32 {
        self.see_calls.set(self.see_calls.get() + 1);
        self.see.get(&mv).copied().unwrap_or(0)
    }

    fn exchange_score(&self, _side: Color, mv: Move) -> i32 {
        self.exchange.get(&mv).copied().unwrap_or(0)
    }

    fn mvv_lva(&self, _side: Color, mv: Move) -> i32 {
        self.mvv_lva.get(&mv).copied().unwrap_or(0)
    }

    fn piece_on(&self, _side: Color, sq: Square) -> Piece {
        self.pieces.get(&sq).copied().unwrap_or(Piece::Pawn)
    }
}

pub fn sq_of(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

pub fn quiet(s: &str) -> Move {
    s.parse().unwrap()
}

pub fn capture(s: &str) -> Move {
    let m = quiet(s);
    Move::capture(m.from(), m.to())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
