//! Concrete position fixtures with known qualitative outcomes. Exact
//! centipawn thresholds in these scenarios depend on tuned weights this
//! crate doesn't have, so these assert direction and relative ordering
//! rather than the literal numbers a texel-tuned build would produce.

use evalcore::evaluator::Evaluator;
use evalcore::position::fen;

#[test]
fn bare_kings_score_close_to_tempo() {
    let eval = Evaluator::new();
    let pos = fen::parse("8/8/8/8/8/8/8/4k2K w - - 0 1");
    let score = eval.evaluate(&pos);
    assert!(score.abs() <= 20, "bare kings should be near tempo-only: {score}");
}

#[test]
fn start_position_is_within_30_centipawns() {
    let eval = Evaluator::new();
    let pos = fen::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let score = eval.evaluate(&pos);
    assert!((0..=30).contains(&score), "start position score out of range: {score}");
}

#[test]
fn unstoppable_passed_pawn_beats_a_defended_one() {
    let eval = Evaluator::new();
    let unstoppable = fen::parse("4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
    let defended = fen::parse("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");

    let unstoppable_score = eval.evaluate(&unstoppable);
    let defended_score = eval.evaluate(&defended);

    assert!(unstoppable_score > 0, "a lone extra pawn should favor white: {unstoppable_score}");
    assert!(defended_score > 0, "a lone extra pawn should favor white: {defended_score}");
    assert!(
        unstoppable_score >= defended_score,
        "an unstoppable passer should score at least as well as a merely defended pawn: \
         unstoppable={unstoppable_score} defended={defended_score}"
    );
}

#[test]
fn rook_up_is_a_large_advantage() {
    let eval = Evaluator::new();
    let pos = fen::parse("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    let score = eval.evaluate(&pos);
    assert!(score >= 400, "a whole rook should be a decisive advantage: {score}");
}

#[test]
fn symmetric_blocked_pawns_are_close_to_equal() {
    let eval = Evaluator::new();
    let pos = fen::parse("8/8/4k3/4p3/4P3/4K3/8/8 w - - 0 1");
    let score = eval.evaluate(&pos);
    assert!(score.abs() <= 30, "symmetric blocked pawn shape should be close to equal: {score}");
}
