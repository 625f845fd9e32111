pub mod attacks;
pub mod bitboard;
pub mod entry;
pub mod error;
pub mod evaluator;
pub mod extractor;
pub mod feature;
#[cfg(feature = "cli")]
pub mod logging;
pub mod mixer;
pub mod mobility;
pub mod position;
pub mod pst;
pub mod square;
pub mod tables;
pub mod trace;
pub mod weights;

pub use entry::Entry;
pub use error::WeightLengthError;
pub use evaluator::Evaluator;
pub use feature::Feature;
pub use position::Position;
pub use weights::Weights;
