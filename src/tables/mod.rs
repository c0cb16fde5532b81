//! Precomputed move-generation tables.
//!
//! Everything a 9x9 shogi move generator looks up at runtime is built here
//! exactly once: ray masks, short-range attack masks and their derived
//! candidate tables, rank/file occupancy tables, the rotated diagonal
//! scheme, and the Zobrist hash keys.
//!
//! Construction is a pure function of the board geometry and the fixed
//! hash seed; the result is immutable for the life of the process.
//!
//! # Example
//! ```
//! use shogi_tables::{tables, Color, Square};
//!
//! let t = tables();
//! let sq: Square = "5e".parse().unwrap();
//! assert_eq!(t.short_range.king(sq).popcount(), 8);
//! assert!(t.short_range.gold(Color::Black, sq).contains(Square(3, 4)));
//! ```

mod diagonals;
mod error;
mod lines;
mod rays;
mod short_range;
mod types;

use once_cell::sync::Lazy;

use crate::zobrist::ZobristKeys;

// Public API - types users need
pub use diagonals::{DiagonalDescriptor, DiagonalKind, DiagonalTables};
pub use error::SquareError;
pub use lines::LineTables;
pub use rays::RayTable;
pub use short_range::ShortRangeTables;
pub use types::{Bitboard, BitboardIter, Color, Direction, Piece, Square};

/// The complete, verified table bundle.
///
/// Built once by [`Tables::build`] (or the global [`tables`] accessor) and
/// never mutated; all fields are plain data safe to share across threads.
pub struct Tables {
    pub rays: RayTable,
    pub short_range: ShortRangeTables,
    pub lines: LineTables,
    pub diagonals: [DiagonalTables; 2],
    pub zobrist: ZobristKeys,
}

impl Tables {
    /// Build and verify every table.
    ///
    /// # Panics
    ///
    /// Panics on any internal consistency violation (ray collision, mirror
    /// asymmetry, incomplete diagonal partition). A partially-valid bundle
    /// is never returned: consumers treat these tables as unconditionally
    /// trustworthy.
    #[must_use]
    pub fn build() -> Self {
        let rays = RayTable::build();
        let short_range = ShortRangeTables::build(&rays);
        let lines = LineTables::build();
        let diagonals = [
            DiagonalTables::build(DiagonalKind::Diagonal),
            DiagonalTables::build(DiagonalKind::AntiDiagonal),
        ];
        let zobrist = ZobristKeys::build();

        #[cfg(feature = "logging")]
        log::debug!(
            "built move tables: {} + {} diagonal attack entries",
            diagonals[0].data().len(),
            diagonals[1].data().len()
        );

        Tables {
            rays,
            short_range,
            lines,
            diagonals,
            zobrist,
        }
    }

    /// The tables of one diagonal family.
    #[inline]
    #[must_use]
    pub fn diagonal(&self, kind: DiagonalKind) -> &DiagonalTables {
        &self.diagonals[kind.index()]
    }

    /// Rook attacks from `sq`: `occupancy` is the normal board word,
    /// `occupancy_files` its file-major counterpart.
    #[inline]
    #[must_use]
    pub fn rook_attacks(
        &self,
        sq: Square,
        occupancy: Bitboard,
        occupancy_files: Bitboard,
    ) -> Bitboard {
        self.lines
            .rank_attacks(sq, occupancy)
            .or(self.lines.file_attacks(sq, occupancy_files))
    }

    /// Bishop attacks from `sq`, given the rotated occupancy word of each
    /// diagonal family.
    #[inline]
    #[must_use]
    pub fn bishop_attacks(
        &self,
        sq: Square,
        rotated_diagonal: Bitboard,
        rotated_anti: Bitboard,
    ) -> Bitboard {
        self.diagonal(DiagonalKind::Diagonal)
            .attacks(sq, rotated_diagonal)
            .or(self
                .diagonal(DiagonalKind::AntiDiagonal)
                .attacks(sq, rotated_anti))
    }
}

static TABLES: Lazy<Tables> = Lazy::new(Tables::build);

/// The process-wide table bundle.
///
/// First access builds and verifies everything; concurrent first callers
/// block until the single construction completes and then share the same
/// immutable data.
#[must_use]
pub fn tables() -> &'static Tables {
    &TABLES
}
