//! Core types for chess move handling.
//!
//! This crate provides the move-encoding layer shared by move generation and
//! search:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] and [`MoveFlag`] for the compact 16-bit move encoding
//! - [`MoveList`] for fixed-capacity, allocation-free move storage

mod color;
mod mov;
mod move_list;
mod piece;
mod square;

pub use color::Color;
pub use mov::{Move, MoveFlag, MoveParseError};
pub use move_list::MoveList;
pub use piece::Piece;
pub use square::Square;
