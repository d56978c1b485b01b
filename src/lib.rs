//! WFG benchmark problems with a concave Pareto front.
//!
//! A decision vector is scored by a fixed pipeline of normalisation, shift and
//! reduction transforms, a coordinate remap and the concave shape function.
//! Problems are stateless and can be shared between threads.

pub mod error;
pub mod mo;

pub use error::{Result, WfgError};
pub use mo::array_solution::{ArraySolution, ArraySolutionEvaluator};
pub use mo::evaluator::{evaluate_population, PopulationEvaluator};
pub use mo::problem::Problem;
pub use mo::wfg::config::{ProblemConfig, ProblemDescriptor};
pub use mo::wfg::{evaluate, Wfg, WfgVariant};
