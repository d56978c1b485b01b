use std::panic::resume_unwind;

use log::{debug, warn};

use crate::error::Result;
use crate::mo::array_solution::{evaluate_solution, ArraySolution, ArraySolutionEvaluator};

/// Scores a population on scoped worker threads, one contiguous chunk per
/// thread. Evaluators are stateless, so workers share nothing but `&evaluator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationEvaluator
{
    threads_count: usize
}

impl PopulationEvaluator {
    pub fn new(threads_count: usize) -> Self
    {
        PopulationEvaluator {
            threads_count: threads_count.max(1)
        }
    }

    pub fn threads_count(&self) -> usize {
        self.threads_count
    }

    /// Returns the first error in population order. Solutions handled by
    /// other workers may already carry their objectives.
    pub fn evaluate(&self, evaluator: &dyn ArraySolutionEvaluator, solutions: &mut [ArraySolution]) -> Result<()>
    {
        if solutions.is_empty()
        {
            return Ok(());
        }

        let chunk_len = (solutions.len() + self.threads_count - 1) / self.threads_count;

        debug!("evaluating {} solutions in chunks of {}", solutions.len(), chunk_len);

        let results = crossbeam::scope(|scope| {
            let handles = solutions
                .chunks_mut(chunk_len)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter_mut()
                            .try_for_each(|solution| evaluate_solution(evaluator, solution))
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|panic| resume_unwind(panic));

        for result in results
        {
            match result {
                Ok(Ok(())) => {},
                Ok(Err(err)) => {
                    warn!("population evaluation failed: {}", err);
                    return Err(err);
                },
                Err(panic) => resume_unwind(panic)
            }
        }

        Ok(())
    }
}

impl Default for PopulationEvaluator {
    fn default() -> Self
    {
        PopulationEvaluator::new(num_cpus::get())
    }
}

/// Scores `solutions` with one worker per CPU.
pub fn evaluate_population(evaluator: &dyn ArraySolutionEvaluator, solutions: &mut [ArraySolution]) -> Result<()>
{
    PopulationEvaluator::default().evaluate(evaluator, solutions)
}
