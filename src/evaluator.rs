//! The evaluator's public surface: construct one with a weight vector,
//! then call `evaluate` for a centipawn score, `trace` for a human-readable
//! breakdown, or `compute_entry` for a sparse feature vector to hand to a
//! tuner.

use crate::entry::{self, Entry};
use crate::error::WeightLengthError;
use crate::mixer::{self, ScoreSink};
use crate::position::Position;
use crate::trace;
use crate::weights::Weights;

/// A static evaluator bound to one weight vector. Cheap to construct and
/// `Clone`; holds no board state of its own.
#[derive(Debug, Clone)]
pub struct Evaluator {
    weights: Weights,
}

impl Evaluator {
    /// Builds an evaluator using the built-in weight vector.
    pub fn new() -> Self {
        Evaluator {
            weights: Weights::frozen(),
        }
    }

    /// Builds an evaluator from externally supplied weights, e.g. loaded
    /// from a tuner's checkpoint.
    pub fn with_weights(weights: Weights) -> Self {
        Evaluator { weights }
    }

    /// Builds an evaluator from a raw weight slice, validating its length.
    pub fn from_slice(values: &[i32]) -> Result<Self, WeightLengthError> {
        Ok(Evaluator::with_weights(Weights::from_slice(values)?))
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores `pos` in centipawns from the side-to-move's perspective.
    /// Allocates no heap memory.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&self, pos: &Position) -> i32 {
        let mut sink = ScoreSink::new(&self.weights);
        let mix = crate::extractor::extract(pos, &mut sink);
        let raw = mixer::taper(sink.opening, sink.endgame, mix.phase);
        let raw = mixer::apply_factor(raw, mix.white_factor, mix.black_factor);
        mixer::rescale(raw, pos.white_to_move, &self.weights)
    }

    /// Extracts a sparse feature vector for `pos`, for offline tuning.
    pub fn compute_entry(&self, pos: &Position) -> Entry {
        entry::compute_entry(pos)
    }

    /// Writes a human-readable per-feature score breakdown for `pos`.
    pub fn trace(&self, pos: &Position, out: &mut impl std::fmt::Write) -> std::fmt::Result {
        trace::write_trace(pos, &self.weights, out)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}
