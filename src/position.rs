//! The minimal position the evaluator needs: one bitboard per piece type,
//! one occupancy bitboard per color, and whose move it is. No castling
//! rights, en passant square, move counters, or history — those only
//! matter to move generation and search, neither of which lives here.

use crate::bitboard::{popcount, DARK_SQUARES};

/// A single static chess position, as seen by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub pawns: u64,
    pub knights: u64,
    pub bishops: u64,
    pub rooks: u64,
    pub queens: u64,
    pub kings: u64,
    pub white: u64,
    pub black: u64,
    pub white_to_move: bool,
}

impl Position {
    #[inline]
    pub fn white_pawns(&self) -> u64 {
        self.pawns & self.white
    }
    #[inline]
    pub fn black_pawns(&self) -> u64 {
        self.pawns & self.black
    }
    #[inline]
    pub fn white_knights(&self) -> u64 {
        self.knights & self.white
    }
    #[inline]
    pub fn black_knights(&self) -> u64 {
        self.knights & self.black
    }
    #[inline]
    pub fn white_bishops(&self) -> u64 {
        self.bishops & self.white
    }
    #[inline]
    pub fn black_bishops(&self) -> u64 {
        self.bishops & self.black
    }
    #[inline]
    pub fn white_rooks(&self) -> u64 {
        self.rooks & self.white
    }
    #[inline]
    pub fn black_rooks(&self) -> u64 {
        self.rooks & self.black
    }
    #[inline]
    pub fn white_queens(&self) -> u64 {
        self.queens & self.white
    }
    #[inline]
    pub fn black_queens(&self) -> u64 {
        self.queens & self.black
    }
    #[inline]
    pub fn white_king(&self) -> u64 {
        self.kings & self.white
    }
    #[inline]
    pub fn black_king(&self) -> u64 {
        self.kings & self.black
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.white | self.black
    }

    /// Bishops standing on a dark square, split by color.
    #[inline]
    pub fn dark_bishops(&self, white: bool) -> u64 {
        let bb = if white {
            self.white_bishops()
        } else {
            self.black_bishops()
        };
        bb & DARK_SQUARES
    }

    #[inline]
    pub fn light_bishops(&self, white: bool) -> u64 {
        let bb = if white {
            self.white_bishops()
        } else {
            self.black_bishops()
        };
        bb & !DARK_SQUARES
    }

    /// Sanity-checks a position: every piece bitboard is disjoint from
    /// every other, `white`/`black` exactly partition the union of piece
    /// bitboards, and each side has exactly one king.
    pub fn validate(&self) -> Result<(), String> {
        let bitboards = [
            ("pawns", self.pawns),
            ("knights", self.knights),
            ("bishops", self.bishops),
            ("rooks", self.rooks),
            ("queens", self.queens),
            ("kings", self.kings),
        ];

        let mut seen: u64 = 0;
        for (name, bb) in &bitboards {
            if (seen & bb) != 0 {
                return Err(format!("bitboard `{name}` overlaps with another piece type"));
            }
            seen |= bb;
        }

        if (self.white & self.black) != 0 {
            return Err("white and black occupancy overlap".to_string());
        }
        if (self.white | self.black) != seen {
            return Err("color occupancy doesn't match the union of piece bitboards".to_string());
        }
        if popcount(self.white_king()) != 1 {
            return Err("white must have exactly one king".to_string());
        }
        if popcount(self.black_king()) != 1 {
            return Err("black must have exactly one king".to_string());
        }
        Ok(())
    }

    /// Mirrors the position vertically and swaps colors: a position that
    /// evaluates to `s` for the side to move should evaluate to `s` again
    /// after mirroring (the color-symmetry invariant).
    pub fn mirror(&self) -> Position {
        let flip = |bb: u64| -> u64 {
            let mut out = 0u64;
            let mut b = bb;
            while b != 0 {
                let sq = b.trailing_zeros();
                out |= 1u64 << (sq ^ 56);
                b &= b - 1;
            }
            out
        };
        Position {
            pawns: flip(self.pawns),
            knights: flip(self.knights),
            bishops: flip(self.bishops),
            rooks: flip(self.rooks),
            queens: flip(self.queens),
            kings: flip(self.kings),
            white: flip(self.black),
            black: flip(self.white),
            white_to_move: !self.white_to_move,
        }
    }
}

/// Minimal FEN fixtures for tests and the `eval_trace` binary.
///
/// This is deliberately not a general FEN parser: it reads only the piece
/// placement and side-to-move fields and ignores castling rights, the en
/// passant square, and the move counters, since none of them affect static
/// evaluation as specified here.
pub mod fen {
    use super::Position;

    const CHAR_TO_PIECE: [Option<(char, bool)>; 128] = {
        // (kind, is_white) where kind is one of p n b r q k
        let mut table: [Option<(char, bool)>; 128] = [None; 128];
        table['P' as usize] = Some(('p', true));
        table['N' as usize] = Some(('n', true));
        table['B' as usize] = Some(('b', true));
        table['R' as usize] = Some(('r', true));
        table['Q' as usize] = Some(('q', true));
        table['K' as usize] = Some(('k', true));
        table['p' as usize] = Some(('p', false));
        table['n' as usize] = Some(('n', false));
        table['b' as usize] = Some(('b', false));
        table['r' as usize] = Some(('r', false));
        table['q' as usize] = Some(('q', false));
        table['k' as usize] = Some(('k', false));
        table
    };

    /// Parses the piece-placement and side-to-move fields of a FEN string
    /// into a `Position`. Panics on malformed input: this is a test/CLI
    /// fixture helper, not a validating parser for untrusted input.
    pub fn parse(fen: &str) -> Position {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().expect("FEN missing piece placement field");
        let side = fields.next().unwrap_or("w");

        let mut pawns = 0u64;
        let mut knights = 0u64;
        let mut bishops = 0u64;
        let mut rooks = 0u64;
        let mut queens = 0u64;
        let mut kings = 0u64;
        let mut white = 0u64;
        let mut black = 0u64;

        let mut rank = 7i32;
        let mut file = 0i32;
        for c in placement.chars() {
            match c {
                '/' => {
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += c.to_digit(10).unwrap() as i32;
                }
                _ => {
                    let (kind, is_white) = CHAR_TO_PIECE[c as usize]
                        .unwrap_or_else(|| panic!("unrecognized FEN glyph `{c}`"));
                    let sq = rank * 8 + file;
                    let bit = 1u64 << sq;
                    match kind {
                        'p' => pawns |= bit,
                        'n' => knights |= bit,
                        'b' => bishops |= bit,
                        'r' => rooks |= bit,
                        'q' => queens |= bit,
                        'k' => kings |= bit,
                        _ => unreachable!(),
                    }
                    if is_white {
                        white |= bit;
                    } else {
                        black |= bit;
                    }
                    file += 1;
                }
            }
        }

        Position {
            pawns,
            knights,
            bishops,
            rooks,
            queens,
            kings,
            white,
            black,
            white_to_move: side == "w",
        }
    }
}
