//! Staged move ordering for alpha-beta search.
//!
//! This crate provides:
//! - [`MoveOrder`] - per-node orderer that serves the hash move, then
//!   captures, then quiets, best score first, scoring each stage lazily
//! - [`SearchParameters`] - killer and history tables shared across a search
//! - [`SearchStackInfo`] and [`ContinuationHistory`] - per-node context with
//!   optional counter-move and follow-up histories
//! - [`OrderingBoard`] - the position queries scoring depends on
//! - [`OrderingConfig`] - history and killer tuning, loadable from TOML
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move, MoveList, Piece, Square};
//! use move_order::{MoveOrder, OrderingBoard, SearchParameters, SearchStackInfo};
//!
//! struct Quiet;
//!
//! impl OrderingBoard for Quiet {
//!     fn static_exchange(&self, _: Color, _: Move) -> i32 { 0 }
//!     fn exchange_score(&self, _: Color, _: Move) -> i32 { 0 }
//!     fn mvv_lva(&self, _: Color, _: Move) -> i32 { 0 }
//!     fn piece_on(&self, _: Color, _: Square) -> Piece { Piece::Knight }
//! }
//!
//! let mut params = SearchParameters::default();
//! let moves: MoveList = ["g1f3", "b1c3"].iter().map(|s| s.parse::<Move>().unwrap()).collect();
//! let mut order = MoveOrder::new(
//!     &Quiet,
//!     Color::White,
//!     4,
//!     false,
//!     &mut params,
//!     SearchStackInfo::new(0),
//!     Move::NULL,
//!     moves,
//! );
//!
//! let first = order.next_move();
//! // ... search `first`, which turns out to cause a cutoff ...
//! order.update_histories(first);
//! assert_eq!(params.history(Color::White, Piece::Knight, first.to()), 16);
//! ```

mod board;
pub mod config;
mod orderer;
mod params;
pub mod score;
mod stack;

pub use board::OrderingBoard;
pub use config::{ConfigError, OrderingConfig};
pub use orderer::{MoveOrder, Stage};
pub use params::{HistoryTable, SearchParameters, KILLER_SLOTS};
pub use score::ScoreList;
pub use stack::{ContinuationHistory, PieceToHistory, SearchStackInfo};
