//! Rotated-coordinate attack tables for bishop-type diagonal sliding.
//!
//! Squares are regrouped by diagonal so a diagonal's occupancy can be read
//! as one contiguous bit range of a rotated board word. Lookup is then a
//! direct array index: no magic multiplication, at the cost of the consumer
//! maintaining the rotated occupancy incrementally via the published
//! per-square rotation masks.
//!
//! Two independent instances exist, one per diagonal family.

use super::types::{Bitboard, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two diagonal families.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagonalKind {
    /// Squares with constant `row + col`.
    Diagonal,
    /// Squares with constant `row - col` (keyed as `8 + row - col`).
    AntiDiagonal,
}

impl DiagonalKind {
    pub const ALL: [DiagonalKind; 2] = [DiagonalKind::Diagonal, DiagonalKind::AntiDiagonal];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DiagonalKind::Diagonal => 0,
            DiagonalKind::AntiDiagonal => 1,
        }
    }

    /// Family key of a square, in `0..17`.
    #[inline]
    #[must_use]
    pub const fn key(self, sq: Square) -> usize {
        match self {
            DiagonalKind::Diagonal => sq.row() + sq.col(),
            DiagonalKind::AntiDiagonal => 8 + sq.row() - sq.col(),
        }
    }
}

const DIAGONAL_KEYS: usize = 17;

/// Per-square lookup key into a family's shared attack data.
///
/// `offset` is the start of the square's data slice; `shift` and `mask`
/// extract the diagonal's interior occupancy from the rotated board word:
/// `data[offset + ((rotated >> shift) & mask)]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiagonalDescriptor {
    pub offset: u32,
    pub shift: u8,
    pub mask: u8,
}

/// One diagonal family: descriptors, rotation masks, and the shared attack
/// data blob. Two parallel arrays plus a flat vector; no pointers.
pub struct DiagonalTables {
    kind: DiagonalKind,
    descriptors: [DiagonalDescriptor; Square::NUM],
    masks: [Bitboard; Square::NUM],
    data: Vec<Bitboard>,
}

impl DiagonalTables {
    /// Build one family.
    ///
    /// Squares are ordered diagonal-by-diagonal (ascending key, then
    /// ascending row within a diagonal); a square's position in that
    /// ordering is its bit in the rotated board word. A diagonal of length
    /// `L >= 3` stores `2^(L-2)` attack sets per square, one per interior
    /// occupancy pattern; shorter diagonals degenerate to a single entry
    /// per square.
    pub(crate) fn build(kind: DiagonalKind) -> Self {
        let mut descriptors = [DiagonalDescriptor::default(); Square::NUM];
        let mut masks = [Bitboard::EMPTY; Square::NUM];
        let mut data = Vec::new();
        let mut rank = 0usize;

        for key in 0..DIAGONAL_KEYS {
            // Square::all is row-major, so the filter yields ascending rows.
            let cells: Vec<Square> = Square::all().filter(|&sq| kind.key(sq) == key).collect();
            let len = cells.len();
            let start = rank;
            let shift = (start + 1) as u8;
            let mask = if len <= 2 {
                0u8
            } else {
                ((1usize << (len - 2)) - 1) as u8
            };

            for (s, &sq) in cells.iter().enumerate() {
                masks[sq.index()] = Bitboard(1 << (start + s));
                let offset = data.len() as u32;
                match len {
                    1 => data.push(Bitboard::EMPTY),
                    2 => data.push(Bitboard::from_square(cells[1 - s])),
                    _ => {
                        for occupancy in 0..1usize << (len - 2) {
                            data.push(cast_along(&cells, s, occupancy));
                        }
                    }
                }
                descriptors[sq.index()] = DiagonalDescriptor { offset, shift, mask };
            }
            rank += len;
        }
        assert_eq!(rank, Square::NUM, "diagonal partition must cover the board");

        DiagonalTables {
            kind,
            descriptors,
            masks,
            data,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> DiagonalKind {
        self.kind
    }

    /// The lookup descriptor of `sq`.
    #[inline]
    #[must_use]
    pub fn descriptor(&self, sq: Square) -> DiagonalDescriptor {
        self.descriptors[sq.index()]
    }

    /// The square's bit in this family's rotated board word. Consumers XOR
    /// this in and out as pieces land on and leave `sq`.
    #[inline]
    #[must_use]
    pub fn rotation_mask(&self, sq: Square) -> Bitboard {
        self.masks[sq.index()]
    }

    /// The shared attack data blob.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[Bitboard] {
        &self.data
    }

    /// Diagonal attacks from `sq` given this family's rotated occupancy.
    #[inline]
    #[must_use]
    pub fn attacks(&self, sq: Square, rotated: Bitboard) -> Bitboard {
        let d = self.descriptors[sq.index()];
        let occupancy = ((rotated.0 >> d.shift) as usize) & d.mask as usize;
        self.data[d.offset as usize + occupancy]
    }

    /// Build the rotated occupancy word for a plain board occupancy, from
    /// scratch. Consumers maintain this incrementally; the fold is the
    /// reference definition (and the test oracle).
    #[must_use]
    pub fn rotate(&self, occupancy: Bitboard) -> Bitboard {
        occupancy
            .iter()
            .fold(Bitboard::EMPTY, |acc, sq| acc.or(self.rotation_mask(sq)))
    }
}

/// First-blocker cast along a diagonal's cell list. Only interior positions
/// carry occupancy bits; pattern bit `i` is local position `i + 1`.
fn cast_along(cells: &[Square], origin: usize, occupancy: usize) -> Bitboard {
    let len = cells.len();
    let mut attack = Bitboard::EMPTY;
    for step in [-1i32, 1] {
        let mut pos = origin as i32 + step;
        while (0..len as i32).contains(&pos) {
            let p = pos as usize;
            attack = attack.or(Bitboard::from_square(cells[p]));
            if (1..len - 1).contains(&p) && occupancy & (1 << (p - 1)) != 0 {
                break;
            }
            pos += step;
        }
    }
    attack
}
