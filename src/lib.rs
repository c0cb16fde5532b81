//! Precomputed lookup tables for a 9x9 shogi move generator.
//!
//! This crate builds, once and deterministically, every constant table a
//! move generator needs at runtime:
//!
//! - unobstructed ray masks for sliding pieces,
//! - short-range attack masks (king, gold, silver, knight) and the derived
//!   check-candidate and king-move-candidate pre-filters,
//! - occupancy-indexed rank/file attack tables for rook sliding,
//! - a rotated-coordinate diagonal scheme giving bishop sliding O(1)
//!   direct-indexed lookup,
//! - Zobrist hash keys for on-board pieces and pocket counts, with
//!   single-XOR promotion and pocket-count updates.
//!
//! Construction is pure and verified: inconsistent geometry aborts the
//! build rather than publishing a partially-valid table. The bundle is
//! immutable afterwards and safe to share across threads.

pub mod tables;
pub mod zobrist;

pub use tables::{
    tables, Bitboard, Color, DiagonalDescriptor, DiagonalKind, DiagonalTables, Direction,
    LineTables, Piece, RayTable, ShortRangeTables, Square, SquareError, Tables,
};
pub use zobrist::{ZobristKeys, ZOBRIST_SEED};
