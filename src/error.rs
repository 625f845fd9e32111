//! Evaluator error types.
//!
//! A small, explicit error value rather than a generic boxed-error type —
//! there is exactly one way construction can fail, so a one-variant enum
//! with a `Display`/`Error` impl is enough.

use std::fmt;

/// Returned by `Weights::from_slice` when the supplied slice doesn't have
/// exactly `2 * FEATURE_COUNT` entries.
///
/// A mis-sized weight vector is a programming error; `Weights::frozen()`
/// avoids it by construction, building its weights from a compile-time
/// array that cannot have the wrong length, while `Weights::from_slice`
/// stays fallible for weights loaded from an external source (e.g. a
/// tuner reading a checkpoint file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightLengthError {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for WeightLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weight vector has {} entries, expected {}",
            self.actual, self.expected
        )
    }
}

impl std::error::Error for WeightLengthError {}
