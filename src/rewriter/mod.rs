// Rewriter module: pure ISO/DIN title correction.

pub mod normalize;
pub mod scan;
pub mod title_rewriter;

// Re-export the main rewriter types for ease of use.
pub use title_rewriter::{Outcome, TitleRewriter};
