//! Sparse per-position feature vectors, for offline weight tuning. An
//! `Entry` records exactly which features fired and by how much, so a
//! tuner can re-score thousands of stored positions against a candidate
//! weight vector without re-extracting features from the board each time.

use arrayvec::ArrayVec;

use crate::extractor::{self, Sink};
use crate::feature::{Feature, FEATURE_COUNT};
use crate::mixer;
use crate::position::Position;
use crate::weights::{Phase, Weights};

/// Accumulates a dense `[i32; FEATURE_COUNT]` total per feature during
/// extraction (several extractor call sites can touch the same feature,
/// e.g. every passed pawn adds to `PawnPassed`), then hands back only the
/// features that actually fired.
struct FeatureSink {
    totals: [i32; FEATURE_COUNT],
}

impl FeatureSink {
    fn new() -> Self {
        FeatureSink {
            totals: [0; FEATURE_COUNT],
        }
    }

    fn into_sparse(self) -> ArrayVec<(usize, i32), FEATURE_COUNT> {
        let mut out = ArrayVec::new();
        for (index, value) in self.totals.into_iter().enumerate() {
            if value != 0 {
                out.push((index, value));
            }
        }
        out
    }
}

impl Sink for FeatureSink {
    #[inline]
    fn add(&mut self, feature: Feature, value: i32) {
        self.totals[feature.index()] += value;
    }
}

/// A sparse feature vector for one position, plus the phase and
/// drawishness factors the mixer needs to turn it back into a score.
#[derive(Debug, Clone)]
pub struct Entry {
    pub phase: i32,
    pub white_factor: i32,
    pub black_factor: i32,
    pub features: ArrayVec<(usize, i32), FEATURE_COUNT>,
}

impl Entry {
    /// Re-derives the mixer's tapered, factor-scaled score from the stored
    /// coefficients against an arbitrary weight vector, without touching
    /// the board again. This is the value *before* the final centipawn
    /// rescale and tempo bonus `Evaluator::evaluate` applies — a tuner
    /// works in the same raw units the mixer itself mixes in.
    pub fn evaluate(&self, weights: &Weights) -> i32 {
        let mut opening = 0;
        let mut endgame = 0;
        for &(index, value) in &self.features {
            let feature = Feature::from_index(index).expect("feature index out of range");
            opening += weights.get(feature, Phase::Opening) * value;
            endgame += weights.get(feature, Phase::Endgame) * value;
        }
        let raw = mixer::taper(opening, endgame, self.phase);
        mixer::apply_factor(raw, self.white_factor, self.black_factor)
    }
}

/// Extracts a sparse feature vector for `pos`, for tuning.
pub fn compute_entry(pos: &Position) -> Entry {
    let mut sink = FeatureSink::new();
    let mix = extractor::extract(pos, &mut sink);
    Entry {
        phase: mix.phase,
        white_factor: mix.white_factor,
        black_factor: mix.black_factor,
        features: sink.into_sparse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::fen;

    #[test]
    fn entry_evaluate_matches_the_internal_mixer() {
        let pos = fen::parse("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1");
        let weights = Weights::frozen();

        let mut score_sink = crate::mixer::ScoreSink::new(&weights);
        let mix = extractor::extract(&pos, &mut score_sink);
        let raw = mixer::taper(score_sink.opening, score_sink.endgame, mix.phase);
        let expected = mixer::apply_factor(raw, mix.white_factor, mix.black_factor);

        let entry = compute_entry(&pos);
        assert_eq!(entry.evaluate(&weights), expected);
    }

    #[test]
    fn entry_omits_features_that_never_fired() {
        let pos = fen::parse("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let entry = compute_entry(&pos);
        assert!(entry
            .features
            .iter()
            .all(|&(index, value)| value != 0 && index < FEATURE_COUNT));
    }
}
