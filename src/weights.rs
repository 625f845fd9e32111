//! The tunable weight vector: one (opening, endgame) pair per `Feature`,
//! stored flat as `raw[2*feature]` / `raw[2*feature+1]` so a tuner can treat
//! the whole thing as a single `Vec<i32>` without knowing about `Feature`
//! at all.

use crate::error::WeightLengthError;
use crate::feature::{Feature, FEATURE_COUNT};

/// Which half of a feature's weight pair to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Endgame,
}

/// Hand-picked, directionally reasonable weights. These are not the result
/// of tuning against a game corpus, but every value's sign and rough
/// magnitude follows the role the feature plays (material dominates,
/// PST/mobility/king-safety terms are small nudges, passed-pawn terms grow
/// toward the endgame).
#[rustfmt::skip]
pub const DEFAULT_WEIGHTS: [i32; 2 * FEATURE_COUNT] = [
    //                      opening  endgame
    /* KnightPst             */   4,      2,
    /* BishopPst              */   0,      0,
    /* QueenPst               */   4,      4,
    /* KingCastlingPst        */  10,      0,
    /* KingCenterPst          */   0,     10,
    /* KnightMobility         */   1,      1,
    /* BishopMobility         */   1,      1,
    /* RookMobility           */   1,      1,
    /* QueenMobility          */   1,      1,
    /* BishopRammedPawns      */  -5,    -10,
    /* Rook7th                */  20,     30,
    /* RookOpen               */  25,     15,
    /* RookSemiopen           */  12,      8,
    /* KingQueenTropism       */   2,      0,
    /* KingShelter            */   3,      0,
    /* KingAttack             */   4,      0,
    /* ThreatPawn             */  35,     35,
    /* ThreatForPawn          */  15,     15,
    /* ThreatPiece            */  25,     25,
    /* ThreatPieceForQueen    */  40,     40,
    /* PawnWeak               */ -10,    -15,
    /* PawnDoubled            */  -8,    -12,
    /* PawnDuo                */   5,      3,
    /* PawnProtected          */   5,      8,
    /* MinorProtected         */   3,      3,
    /* KnightOutpost          */  15,     10,
    /* PawnBlockedByOwnPiece  */  -5,     -5,
    /* PawnRammed             */  -3,     -3,
    /* PawnPassed             */   1,      2,
    /* PawnPassedOppKing      */   0,      1,
    /* PawnPassedOwnKing      */   0,     -1,
    /* PawnPassedFree         */   0,      1,
    /* PawnPassedSquare       */   0,      5,
    /* PawnMaterial           */ 100,    100,
    /* KnightMaterial         */ 325,    325,
    /* BishopMaterial         */ 325,    325,
    /* RookMaterial           */ 500,    500,
    /* QueenMaterial          */ 975,    975,
    /* BishopPairMaterial     */  30,     40,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights {
    raw: [i32; 2 * FEATURE_COUNT],
}

impl Weights {
    /// The built-in weight vector, built from a compile-time array that is
    /// correctly sized by construction.
    pub fn frozen() -> Self {
        Weights {
            raw: DEFAULT_WEIGHTS,
        }
    }

    /// Build from an externally supplied vector, e.g. one written out by a
    /// tuner. Fails if the length doesn't match `2 * FEATURE_COUNT`.
    pub fn from_slice(values: &[i32]) -> Result<Self, WeightLengthError> {
        let expected = 2 * FEATURE_COUNT;
        if values.len() != expected {
            return Err(WeightLengthError {
                expected,
                actual: values.len(),
            });
        }
        let mut raw = [0i32; 2 * FEATURE_COUNT];
        raw.copy_from_slice(values);
        Ok(Weights { raw })
    }

    #[inline]
    pub fn get(&self, feature: Feature, phase: Phase) -> i32 {
        self.raw[2 * feature.index() + phase as usize]
    }

    #[inline]
    pub fn opening(&self, feature: Feature) -> i32 {
        self.get(feature, Phase::Opening)
    }

    #[inline]
    pub fn endgame(&self, feature: Feature) -> i32 {
        self.get(feature, Phase::Endgame)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.raw
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights::frozen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_weights_have_the_expected_length() {
        assert_eq!(Weights::frozen().as_slice().len(), 2 * FEATURE_COUNT);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = Weights::from_slice(&[0; 10]).unwrap_err();
        assert_eq!(err.expected, 2 * FEATURE_COUNT);
        assert_eq!(err.actual, 10);
    }

    #[test]
    fn from_slice_accepts_correct_length() {
        let values = DEFAULT_WEIGHTS.to_vec();
        let weights = Weights::from_slice(&values).unwrap();
        assert_eq!(weights.as_slice(), &DEFAULT_WEIGHTS[..]);
    }

    #[test]
    fn material_weights_are_symmetric_between_opening_and_endgame() {
        let w = Weights::frozen();
        assert_eq!(w.opening(Feature::PawnMaterial), w.endgame(Feature::PawnMaterial));
        assert_eq!(w.opening(Feature::QueenMaterial), w.endgame(Feature::QueenMaterial));
    }

    #[test]
    fn king_center_only_matters_in_the_endgame() {
        let w = Weights::frozen();
        assert_eq!(w.opening(Feature::KingCenterPst), 0);
        assert!(w.endgame(Feature::KingCenterPst) > 0);
    }
}
