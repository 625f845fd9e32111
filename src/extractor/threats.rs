//! Cross-piece-type threat features: these read the aggregated per-side
//! attack bitboards built while walking each piece type, rather than
//! re-deriving attacks of their own.

use super::{Sink, SideAttacks};
use crate::bitboard::popcount;
use crate::feature::Feature;
use crate::position::Position;

pub(super) fn extract<S: Sink>(pos: &Position, white: &SideAttacks, black: &SideAttacks, sink: &mut S) {
    sink.add(
        Feature::ThreatPawn,
        popcount(white.pawn & pos.black & !(pos.pawns | pos.queens)) as i32
            - popcount(black.pawn & pos.white & !(pos.pawns | pos.queens)) as i32,
    );

    sink.add(
        Feature::ThreatForPawn,
        popcount((white.rook | white.king) & pos.black_pawns() & !black.pawn) as i32
            - popcount((black.rook | black.king) & pos.white_pawns() & !white.pawn) as i32,
    );

    sink.add(
        Feature::ThreatPiece,
        popcount((white.knight | white.bishop | white.rook) & pos.black & (pos.knights | pos.bishops | pos.rooks))
            as i32
            - popcount((black.knight | black.bishop | black.rook) & pos.white & (pos.knights | pos.bishops | pos.rooks))
                as i32,
    );

    sink.add(
        Feature::ThreatPieceForQueen,
        popcount((white.pawn | white.knight | white.bishop | white.rook) & pos.black & pos.queens) as i32
            - popcount((black.pawn | black.knight | black.bishop | black.rook) & pos.white & pos.queens) as i32,
    );
}
