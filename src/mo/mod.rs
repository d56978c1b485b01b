pub mod array_solution;
pub mod evaluator;
pub mod problem;
pub mod wfg;

#[cfg(test)]
mod tests;
