//! The closed set of evaluation features, each with a stable numeric index
//! matching its position in the weight table (`weight[2*feature]` =
//! opening weight, `weight[2*feature+1]` = endgame weight).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum Feature {
    KnightPst,
    /// Enum slot kept for weight-vector layout compatibility with tools
    /// that expect every declared feature to have a weight pair. The
    /// extractor never emits a nonzero count for this feature.
    BishopPst,
    QueenPst,
    KingCastlingPst,
    KingCenterPst,
    KnightMobility,
    BishopMobility,
    RookMobility,
    QueenMobility,
    BishopRammedPawns,
    Rook7th,
    RookOpen,
    RookSemiopen,
    KingQueenTropism,
    KingShelter,
    KingAttack,
    ThreatPawn,
    ThreatForPawn,
    ThreatPiece,
    ThreatPieceForQueen,
    PawnWeak,
    PawnDoubled,
    PawnDuo,
    PawnProtected,
    MinorProtected,
    KnightOutpost,
    PawnBlockedByOwnPiece,
    PawnRammed,
    PawnPassed,
    PawnPassedOppKing,
    PawnPassedOwnKing,
    PawnPassedFree,
    PawnPassedSquare,
    PawnMaterial,
    KnightMaterial,
    BishopMaterial,
    RookMaterial,
    QueenMaterial,
    BishopPairMaterial,
}

pub const FEATURE_COUNT: usize = 39;

pub const ALL_FEATURES: [Feature; FEATURE_COUNT] = [
    Feature::KnightPst,
    Feature::BishopPst,
    Feature::QueenPst,
    Feature::KingCastlingPst,
    Feature::KingCenterPst,
    Feature::KnightMobility,
    Feature::BishopMobility,
    Feature::RookMobility,
    Feature::QueenMobility,
    Feature::BishopRammedPawns,
    Feature::Rook7th,
    Feature::RookOpen,
    Feature::RookSemiopen,
    Feature::KingQueenTropism,
    Feature::KingShelter,
    Feature::KingAttack,
    Feature::ThreatPawn,
    Feature::ThreatForPawn,
    Feature::ThreatPiece,
    Feature::ThreatPieceForQueen,
    Feature::PawnWeak,
    Feature::PawnDoubled,
    Feature::PawnDuo,
    Feature::PawnProtected,
    Feature::MinorProtected,
    Feature::KnightOutpost,
    Feature::PawnBlockedByOwnPiece,
    Feature::PawnRammed,
    Feature::PawnPassed,
    Feature::PawnPassedOppKing,
    Feature::PawnPassedOwnKing,
    Feature::PawnPassedFree,
    Feature::PawnPassedSquare,
    Feature::PawnMaterial,
    Feature::KnightMaterial,
    Feature::BishopMaterial,
    Feature::RookMaterial,
    Feature::QueenMaterial,
    Feature::BishopPairMaterial,
];

impl Feature {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Feature::KnightPst => "KnightPst",
            Feature::BishopPst => "BishopPst",
            Feature::QueenPst => "QueenPst",
            Feature::KingCastlingPst => "KingCastlingPst",
            Feature::KingCenterPst => "KingCenterPst",
            Feature::KnightMobility => "KnightMobility",
            Feature::BishopMobility => "BishopMobility",
            Feature::RookMobility => "RookMobility",
            Feature::QueenMobility => "QueenMobility",
            Feature::BishopRammedPawns => "BishopRammedPawns",
            Feature::Rook7th => "Rook7th",
            Feature::RookOpen => "RookOpen",
            Feature::RookSemiopen => "RookSemiopen",
            Feature::KingQueenTropism => "KingQueenTropism",
            Feature::KingShelter => "KingShelter",
            Feature::KingAttack => "KingAttack",
            Feature::ThreatPawn => "ThreatPawn",
            Feature::ThreatForPawn => "ThreatForPawn",
            Feature::ThreatPiece => "ThreatPiece",
            Feature::ThreatPieceForQueen => "ThreatPieceForQueen",
            Feature::PawnWeak => "PawnWeak",
            Feature::PawnDoubled => "PawnDoubled",
            Feature::PawnDuo => "PawnDuo",
            Feature::PawnProtected => "PawnProtected",
            Feature::MinorProtected => "MinorProtected",
            Feature::KnightOutpost => "KnightOutpost",
            Feature::PawnBlockedByOwnPiece => "PawnBlockedByOwnPiece",
            Feature::PawnRammed => "PawnRammed",
            Feature::PawnPassed => "PawnPassed",
            Feature::PawnPassedOppKing => "PawnPassedOppKing",
            Feature::PawnPassedOwnKing => "PawnPassedOwnKing",
            Feature::PawnPassedFree => "PawnPassedFree",
            Feature::PawnPassedSquare => "PawnPassedSquare",
            Feature::PawnMaterial => "PawnMaterial",
            Feature::KnightMaterial => "KnightMaterial",
            Feature::BishopMaterial => "BishopMaterial",
            Feature::RookMaterial => "RookMaterial",
            Feature::QueenMaterial => "QueenMaterial",
            Feature::BishopPairMaterial => "BishopPairMaterial",
        }
    }

    pub const fn from_index(index: usize) -> Option<Feature> {
        if index >= FEATURE_COUNT {
            return None;
        }
        Some(ALL_FEATURES[index])
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_match_declaration_order() {
        for (i, feature) in ALL_FEATURES.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn from_index_round_trips() {
        for feature in ALL_FEATURES {
            assert_eq!(Feature::from_index(feature.index()), Some(feature));
        }
        assert_eq!(Feature::from_index(FEATURE_COUNT), None);
    }

    #[test]
    fn bishop_pst_slot_exists_for_layout_compatibility() {
        assert_eq!(Feature::BishopPst.index(), 1);
    }
}
