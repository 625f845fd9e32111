//! Human-readable per-feature score breakdown, for the `eval_trace`
//! binary and for debugging weight changes by hand.
//!
//! Columns are hand-aligned with `write!` padding rather than pulling in a
//! tabwriter crate — this prints at most a few dozen rows, so a dependency
//! buys nothing a `{:<width}` format spec doesn't already give us.

use std::fmt::{self, Write};

use crate::entry;
use crate::feature::Feature;
use crate::mixer;
use crate::position::Position;
use crate::weights::Weights;

const FEATURE_COLUMN_WIDTH: usize = 24;

/// Writes one row per feature that fired, each showing that feature's
/// tapered contribution (before the drawishness factor), followed by a
/// final `Score:` line giving the fully mixed and rescaled evaluation.
pub fn write_trace(pos: &Position, weights: &Weights, out: &mut impl Write) -> fmt::Result {
    let entry = entry::compute_entry(pos);
    let pawn_eg = weights.endgame(Feature::PawnMaterial);

    writeln!(out, "{:<FEATURE_COLUMN_WIDTH$}{:>10}", "Feature", "Score")?;
    for &(index, value) in &entry.features {
        let feature = Feature::from_index(index).expect("feature index out of range");
        let score_op = weights.opening(feature) * value;
        let score_eg = weights.endgame(feature) * value;
        let tapered = mixer::taper(score_op, score_eg, entry.phase);
        let score = tapered * 100 / pawn_eg;
        writeln!(out, "{:<FEATURE_COLUMN_WIDTH$}{:>10}", feature.name(), score)?;
    }

    let score = entry.evaluate(weights) * 100 / pawn_eg;
    writeln!(out, "Score: {score}")
}

/// Convenience wrapper returning the trace as an owned `String`.
pub fn trace_to_string(pos: &Position, weights: &Weights) -> String {
    let mut out = String::new();
    write_trace(pos, weights, &mut out).expect("writing to a String cannot fail");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::fen;

    #[test]
    fn trace_includes_a_final_score_line() {
        let pos = fen::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let weights = Weights::frozen();
        let text = trace_to_string(&pos, &weights);
        assert!(text.lines().last().unwrap().starts_with("Score:"));
    }

    #[test]
    fn trace_lists_only_features_that_fired() {
        let pos = fen::parse("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let weights = Weights::frozen();
        let text = trace_to_string(&pos, &weights);
        // Bare kings: no material, mobility, or structural feature fires.
        assert_eq!(text.lines().count(), 2);
    }
}
