//! Piece-square tables used by the extractor. Each white table is computed
//! directly from the square's file/rank; the black table is derived by
//! flipping the square vertically and negating, so that a white-favorable
//! square for a given piece maps to the mirror-image black-favorable
//! square with the opposite sign.

use once_cell::sync::Lazy;

use crate::square::Square;
use crate::tables::king_castling_anchor_dist;

const KNIGHT_LINE: [i32; 8] = [0, 2, 3, 4, 4, 3, 2, 0];
const BISHOP_LINE: [i32; 8] = [0, 1, 2, 3, 3, 2, 1, 0];
const KING_LINE: [i32; 8] = [0, 2, 3, 4, 4, 3, 2, 0];

pub struct Pst {
    /// Knight piece-square table, white POV.
    pub wn: [i32; 64],
    pub bn: [i32; 64],
    /// Queen piece-square table, white POV (also stands in for `BishopPst`'s
    /// would-be slot, see `feature::Feature::BishopPst`).
    pub wq: [i32; 64],
    pub bq: [i32; 64],
    /// King opening table: rewards a king near a castled corner.
    pub wk_op: [i32; 64],
    pub bk_op: [i32; 64],
    /// King endgame table: rewards centralization.
    pub wk_eg: [i32; 64],
    pub bk_eg: [i32; 64],
    /// Per-square bonus for a pawn standing in the king's shield zone.
    pub king_shield: [i32; 64],
}

fn king_shield_bonus(sq: usize) -> i32 {
    const RING: [usize; 8] = [
        // H2, H3, G3, F2, A2, A3, B3, C2
        15, 23, 22, 13, 8, 16, 17, 10,
    ];
    if sq == 14 || sq == 9 {
        // G2, B2
        4
    } else if RING.contains(&sq) {
        3
    } else {
        2
    }
}

impl Pst {
    fn build() -> Self {
        let mut wn = [0i32; 64];
        let mut wq = [0i32; 64];
        let mut wk_op = [0i32; 64];
        let mut wk_eg = [0i32; 64];
        let mut king_shield = [0i32; 64];

        for sq in 0..64 {
            let file = sq % 8;
            let rank = sq / 8;
            wn[sq] = KNIGHT_LINE[file] + KNIGHT_LINE[rank];
            wq[sq] = BISHOP_LINE[file].min(BISHOP_LINE[rank]);
            wk_op[sq] = king_castling_anchor_dist(sq);
            wk_eg[sq] = KING_LINE[file] + KING_LINE[rank];
            king_shield[sq] = king_shield_bonus(sq);
        }

        let flip = |table: &[i32; 64]| -> [i32; 64] {
            let mut out = [0i32; 64];
            for sq in 0..64 {
                out[sq] = -table[Square::from_index(sq as u8).flip().index() as usize];
            }
            out
        };

        Pst {
            bn: flip(&wn),
            bq: flip(&wq),
            bk_op: flip(&wk_op),
            bk_eg: flip(&wk_eg),
            wn,
            wq,
            wk_op,
            wk_eg,
            king_shield,
        }
    }
}

pub static PST: Lazy<Pst> = Lazy::new(Pst::build);
