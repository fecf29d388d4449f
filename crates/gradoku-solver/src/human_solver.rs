use std::collections::BTreeSet;

use derive_more::Display;
use gradoku_core::Puzzle;

use crate::technique::{self, BoxedTechnique, Technique};

/// The outcome of rating a puzzle.
///
/// The score is the sum of the costs charged for every deduction made
/// during the solve. Two ratings are equal when all three fields agree.
///
/// # Examples
///
/// ```
/// use gradoku_core::Puzzle;
/// use gradoku_solver::HumanSolver;
///
/// let puzzle: Puzzle = "
///     001000570 706050003 900630040
///     025073090 367080154 080540230
///     070062009 600090702 093000400
/// "
/// .parse()?;
///
/// let rating = HumanSolver::with_all_techniques().rate(&puzzle);
/// assert!(rating.is_solved);
/// assert_eq!(rating.score, 420);
/// assert!(rating.used_techniques.contains("Single Candidate"));
/// # Ok::<(), gradoku_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display("score {score}, solved {is_solved}, techniques {used_techniques:?}")]
pub struct Rating {
    /// Sum of the costs charged for every deduction.
    pub score: u32,
    /// `true` if the solve ended with a full, consistent grid.
    pub is_solved: bool,
    /// Names of the techniques that deduced at least once.
    pub used_techniques: BTreeSet<&'static str>,
}

/// A price list entry tracking the active cost of one technique.
#[derive(Debug)]
struct PriceEntry<'a> {
    cost: u32,
    order: usize,
    discounted: bool,
    technique: &'a dyn Technique,
}

/// A solver that rates puzzle difficulty by imitating a human.
///
/// Each step tries the techniques in ascending order of their active
/// cost, ties broken by catalogue order, and charges the cost of the
/// first technique that makes a deduction. A technique's first success
/// drops its active cost to the subsequent-use price, so a technique
/// already practiced on this puzzle is tried earlier and charged less
/// on later steps.
///
/// The solve ends when the grid has no empty cells left, or when no
/// technique in the catalogue can make a deduction. Getting stuck is a
/// normal outcome reported through [`Rating::is_solved`], not an error.
///
/// # Examples
///
/// ```
/// use gradoku_core::Puzzle;
/// use gradoku_solver::HumanSolver;
///
/// let puzzle: Puzzle = "
///     072000000 001048000 003007040
///     040001003 500090004 800300070
///     020700400 000150900 000000720
/// "
/// .parse()?;
///
/// let solver = HumanSolver::with_all_techniques();
/// let rating = solver.rate(&puzzle);
/// if rating.is_solved {
///     println!("difficulty {}", rating.score);
/// } else {
///     println!("needs techniques beyond the catalogue");
/// }
/// # Ok::<(), gradoku_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HumanSolver {
    techniques: Vec<BoxedTechnique>,
}

impl HumanSolver {
    /// Creates a new solver with the specified techniques.
    ///
    /// The position of a technique in the vector is its catalogue
    /// order, which breaks ties between equal active costs.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradoku_solver::{
    ///     HumanSolver,
    ///     technique::{BoxedTechnique, SingleCandidate},
    /// };
    ///
    /// let techniques: Vec<BoxedTechnique> = vec![Box::new(SingleCandidate::new())];
    /// let solver = HumanSolver::new(techniques);
    /// ```
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a new solver with the full technique catalogue.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradoku_solver::HumanSolver;
    ///
    /// let solver = HumanSolver::with_all_techniques();
    /// ```
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self {
            techniques: technique::all_techniques(),
        }
    }

    /// Solves a copy of the puzzle and rates its difficulty.
    ///
    /// The caller's puzzle is untouched; all deductions happen on a
    /// private clone. The returned [`Rating`] carries the accumulated
    /// score, the set of techniques that contributed, and whether the
    /// solve reached a full, consistent grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradoku_core::Puzzle;
    /// use gradoku_solver::HumanSolver;
    ///
    /// // An already solved puzzle rates to zero.
    /// let puzzle: Puzzle = "
    ///     123456789 456789123 789123456
    ///     214365897 365897214 897214365
    ///     531642978 642978531 978531642
    /// "
    /// .parse()?;
    ///
    /// let rating = HumanSolver::with_all_techniques().rate(&puzzle);
    /// assert_eq!(rating.score, 0);
    /// assert!(rating.is_solved);
    /// assert!(rating.used_techniques.is_empty());
    /// # Ok::<(), gradoku_core::ParsePuzzleError>(())
    /// ```
    #[must_use]
    pub fn rate(&self, puzzle: &Puzzle) -> Rating {
        let mut puzzle = puzzle.clone();
        let mut entries: Vec<_> = self
            .techniques
            .iter()
            .enumerate()
            .map(|(order, technique)| PriceEntry {
                cost: technique.cost().first_use,
                order,
                discounted: false,
                technique: technique.as_ref(),
            })
            .collect();

        let mut rating = Rating::default();
        while puzzle.has_empty_cells() {
            entries.sort_by_key(|entry| (entry.cost, entry.order));
            let Some(entry) = entries
                .iter_mut()
                .find(|entry| entry.technique.apply(&mut puzzle))
            else {
                log::debug!("stuck at score {}", rating.score);
                return rating;
            };

            rating.score += entry.cost;
            rating.used_techniques.insert(entry.technique.name());
            log::debug!(
                "{} charged {} (score {})",
                entry.technique.name(),
                entry.cost,
                rating.score
            );
            if !entry.discounted {
                entry.discounted = true;
                entry.cost = entry.technique.cost().subsequent;
            }
        }

        rating.is_solved = puzzle.is_solved();
        rating
    }
}
