use dyn_clone::DynClone;

use crate::error::Result;

/// A candidate as an experiment layer stores it: decision values and the
/// objective slots they score to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArraySolution
{
    pub x: Vec<f64>,
    pub f: Vec<f64>
}

impl ArraySolution {
    pub fn new(x: Vec<f64>) -> Self
    {
        ArraySolution {
            x,
            f: vec![]
        }
    }
}

pub trait ArraySolutionEvaluator: DynClone + Send + Sync {
    /// Scores `x` and stores objective `i` into `f[i]`, resizing `f` when needed.
    fn calculate_objectives(&self, x: &[f64], f: &mut Vec<f64>) -> Result<()>;
    fn x_len(&self) -> usize;
    fn objectives_len(&self) -> usize;
}

dyn_clone::clone_trait_object!(ArraySolutionEvaluator);

pub fn evaluate_solution(evaluator: &dyn ArraySolutionEvaluator, solution: &mut ArraySolution) -> Result<()>
{
    evaluator.calculate_objectives(&solution.x, &mut solution.f)
}
