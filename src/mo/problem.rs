use dyn_clone::DynClone;

use crate::error::Result;

pub trait Problem: DynClone + Send + Sync {
    fn name(&self) -> &str;
    fn problem_class_name(&self) -> &str;

    fn x_len(&self) -> usize;
    fn objectives_len(&self) -> usize;

    /// Inclusive `(min, max)` bound of decision coordinate `index` (0-based).
    fn bounds(&self, index: usize) -> (f64, f64);

    fn evaluate(&self, z: &[f64]) -> Result<Vec<f64>>;

    /// Distance of `z` from the Pareto-optimal front, 0 on the front.
    fn convergence_metric(&self, z: &[f64]) -> Result<f64>;
}

dyn_clone::clone_trait_object!(Problem);
