//! Human solving techniques.
//!
//! Each technique scans the puzzle in a fixed deterministic order and
//! performs at most one deduction per invocation: a single clue placement
//! or a single elimination action. An invocation reports whether it
//! changed the puzzle; finding a pattern whose elimination would remove
//! nothing does not count, the scan simply continues.
//!
//! The catalogue, in declaration order:
//!
//! | Technique | First use | Subsequent |
//! |-----------|----------:|-----------:|
//! | [`SingleCandidate`] | 10 | 10 |
//! | [`SinglePosition`] | 10 | 10 |
//! | [`CandidateLines`] | 35 | 20 |
//! | [`DoublePairs`] | 50 | 25 |
//! | [`MultipleLines`] | 70 | 40 |
//! | [`NakedPair`] | 75 | 50 |
//! | [`NakedTriple`] | 200 | 140 |
//! | [`NakedQuad`] | 500 | 400 |
//! | [`HiddenPair`] | 150 | 120 |
//! | [`HiddenTriple`] | 240 | 160 |
//! | [`HiddenQuad`] | 700 | 500 |
//! | [`XWing`] | 280 | 160 |

pub use self::{
    box_pairs::{DoublePairs, MultipleLines},
    candidate_lines::CandidateLines,
    hidden_subset::{HiddenPair, HiddenQuad, HiddenTriple},
    naked_subset::{NakedPair, NakedQuad, NakedTriple},
    single_candidate::SingleCandidate,
    single_position::SinglePosition,
    x_wing::XWing,
};

mod box_pairs;
mod candidate_lines;
mod hidden_subset;
mod naked_subset;
mod single_candidate;
mod single_position;
mod x_wing;

use std::fmt::Debug;

use gradoku_core::Puzzle;

/// The two prices a technique charges within one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueCost {
    /// Price of the technique's first successful application.
    pub first_use: u32,
    /// Price of every later successful application.
    pub subsequent: u32,
}

/// A human solving technique.
///
/// Techniques are stateless: repeated invocations on the same puzzle
/// state find the same deduction.
pub trait Technique: Debug + Send + Sync {
    /// Returns the display name of the technique.
    fn name(&self) -> &'static str;

    /// Returns the technique's two prices.
    fn cost(&self) -> TechniqueCost;

    /// Applies the technique's first available deduction to `puzzle`.
    ///
    /// Returns `true` if the puzzle changed.
    fn apply(&self, puzzle: &mut Puzzle) -> bool;

    /// Clones the technique into a box.
    fn clone_box(&self) -> BoxedTechnique;
}

/// A boxed technique trait object.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the full technique catalogue in declaration order.
///
/// The solver resolves equal active costs by this order.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(SingleCandidate::new()),
        Box::new(SinglePosition::new()),
        Box::new(CandidateLines::new()),
        Box::new(DoublePairs::new()),
        Box::new(MultipleLines::new()),
        Box::new(NakedPair::new()),
        Box::new(NakedTriple::new()),
        Box::new(NakedQuad::new()),
        Box::new(HiddenPair::new()),
        Box::new(HiddenTriple::new()),
        Box::new(HiddenQuad::new()),
        Box::new(XWing::new()),
    ]
}
