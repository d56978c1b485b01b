//! WFG problems with a concave Pareto front (WFG4, WFG5, WFG6).
//!
//! Every problem runs the same ordered pipeline
//! `normalise -> t1 -> t2 -> calculate_x -> assemble`; the variant only picks
//! the shift applied in `t1` and the reduction applied in `t2`. Each stage is a
//! pure function that returns a fresh vector.

pub mod config;
pub mod shapes;
pub mod transformations;

use log::{debug, trace};
use serde::Deserialize;

use crate::error::{Result, WfgError};
use crate::mo::array_solution::ArraySolutionEvaluator;
use crate::mo::problem::Problem;
use crate::mo::wfg::config::ProblemConfig;
use crate::mo::wfg::shapes::concave;
use crate::mo::wfg::transformations::{r_nonsep, r_sum, s_decept, s_linear, s_multi};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shift
{
    Linear { a: f64 },
    Multi { a: f64, b: f64, c: f64 },
    Decept { a: f64, b: f64, c: f64 }
}

impl Shift {
    pub fn apply(&self, y: f64) -> Result<f64>
    {
        match *self {
            Shift::Linear { a } => s_linear(y, a),
            Shift::Multi { a, b, c } => s_multi(y, a, b, c),
            Shift::Decept { a, b, c } => s_decept(y, a, b, c)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reduction
{
    /// `r_sum` with unit weights.
    Sum,
    NonSeparable
}

impl Reduction {
    pub fn apply(&self, y: &[f64], degree: usize) -> Result<f64>
    {
        match self {
            Reduction::Sum => r_sum(y, &vec![1.0; y.len()]),
            Reduction::NonSeparable => r_nonsep(y, degree)
        }
    }
}

/// Stage parameters of one problem variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stages
{
    pub shift: Shift,
    /// Whether `t1` also shifts the position-related prefix.
    pub shift_position: bool,
    pub reduction: Reduction
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum WfgVariant
{
    #[serde(rename = "WFG4")]
    Wfg4,
    #[serde(rename = "WFG5")]
    Wfg5,
    #[serde(rename = "WFG6")]
    Wfg6
}

impl WfgVariant {
    pub fn class_name(&self) -> &'static str
    {
        match self {
            WfgVariant::Wfg4 => "WFG4",
            WfgVariant::Wfg5 => "WFG5",
            WfgVariant::Wfg6 => "WFG6"
        }
    }

    pub fn stages(&self) -> Stages
    {
        match self {
            WfgVariant::Wfg4 => Stages {
                shift: Shift::Multi { a: 30.0, b: 10.0, c: 0.35 },
                shift_position: true,
                reduction: Reduction::Sum
            },
            WfgVariant::Wfg5 => Stages {
                shift: Shift::Decept { a: 0.35, b: 0.001, c: 0.05 },
                shift_position: true,
                reduction: Reduction::Sum
            },
            WfgVariant::Wfg6 => Stages {
                shift: Shift::Linear { a: 0.35 },
                shift_position: false,
                reduction: Reduction::NonSeparable
            }
        }
    }

    pub fn evaluate(&self, z: &[f64], config: &ProblemConfig) -> Result<Vec<f64>>
    {
        let x = self.calculate_geometry(z, config)?;

        assemble(&x, config)
    }

    fn calculate_geometry(&self, z: &[f64], config: &ProblemConfig) -> Result<Vec<f64>>
    {
        if z.len() != config.n()
        {
            return Err(WfgError::DimensionMismatch { expected: config.n(), actual: z.len() });
        }

        let stages = self.stages();

        let y = normalise(z);
        trace!("{} normalised: {:?}", self.class_name(), y);

        let y = t1(&y, config.k(), &stages)?;
        trace!("{} t1: {:?}", self.class_name(), y);

        let y = t2(&y, config, stages.reduction)?;
        trace!("{} t2: {:?}", self.class_name(), y);

        let x = calculate_x(&y, config.amplitudes())?;
        trace!("{} x: {:?}", self.class_name(), x);

        Ok(x)
    }
}

/// Scores `z` with WFG6.
pub fn evaluate(z: &[f64], config: &ProblemConfig) -> Result<Vec<f64>>
{
    WfgVariant::Wfg6.evaluate(z, config)
}

/// Maps coordinate `i` from `[0, 2 * (i + 1)]` onto `[0, 1]`.
pub fn normalise(z: &[f64]) -> Vec<f64>
{
    z.iter()
        .enumerate()
        .map(|(i, z_i)| z_i / (2.0 * (i + 1) as f64))
        .collect()
}

pub fn t1(y: &[f64], k: usize, stages: &Stages) -> Result<Vec<f64>>
{
    y.iter()
        .enumerate()
        .map(|(i, &y_i)| {
            if i < k && !stages.shift_position
            {
                Ok(y_i)
            }
            else
            {
                stages.shift.apply(y_i)
            }
        })
        .collect()
}

/// Half-open index range of position group `i` (`1..m`).
pub(crate) fn position_group(i: usize, k: usize, m: usize) -> std::ops::Range<usize>
{
    (i - 1) * k / (m - 1)..i * k / (m - 1)
}

/// Folds `n` values into `M`: one per position group plus the distance segment.
pub fn t2(y: &[f64], config: &ProblemConfig, reduction: Reduction) -> Result<Vec<f64>>
{
    if y.len() != config.n()
    {
        return Err(WfgError::DimensionMismatch { expected: config.n(), actual: y.len() });
    }

    let (k, m) = (config.k(), config.m());
    let mut result = Vec::with_capacity(m);

    for i in 1..m
    {
        result.push(reduction.apply(&y[position_group(i, k, m)], config.group_len())?);
    }

    result.push(reduction.apply(&y[k..], y.len() - k)?);

    Ok(result)
}

pub fn calculate_x(y: &[f64], amplitudes: &[f64]) -> Result<Vec<f64>>
{
    if y.is_empty() || amplitudes.len() != y.len() - 1
    {
        return Err(WfgError::DimensionMismatch { expected: amplitudes.len() + 1, actual: y.len() });
    }

    let last = y[y.len() - 1];

    Ok(y[..y.len() - 1]
        .iter()
        .zip(amplitudes)
        .map(|(y_i, a_i)| last.max(*a_i) * (y_i - 0.5) + 0.5)
        .chain(std::iter::once(last))
        .collect())
}

pub fn assemble(x: &[f64], config: &ProblemConfig) -> Result<Vec<f64>>
{
    if x.len() != config.m()
    {
        return Err(WfgError::DimensionMismatch { expected: config.m(), actual: x.len() });
    }

    let distance = config.distance_scale() * x[x.len() - 1];

    config.scales()
        .iter()
        .enumerate()
        .map(|(i, s)| concave(x, i + 1).map(|shape| distance + s * shape))
        .collect()
}

#[derive(Clone, Debug)]
pub struct Wfg
{
    name: String,
    variant: WfgVariant,
    config: ProblemConfig
}

impl Wfg {
    pub fn new(variant: WfgVariant, config: ProblemConfig) -> Self
    {
        let name = format!("{} ({} {} {})", variant.class_name(), config.k(), config.l(), config.m());

        debug!("created {} with n = {}, S = {:?}", name, config.n(), config.scales());

        Wfg {
            name,
            variant,
            config
        }
    }

    pub fn wfg6(config: ProblemConfig) -> Self
    {
        Wfg::new(WfgVariant::Wfg6, config)
    }

    pub fn variant(&self) -> WfgVariant {
        self.variant
    }

    pub fn config(&self) -> &ProblemConfig {
        &self.config
    }
}

impl Default for Wfg {
    fn default() -> Self
    {
        Wfg::wfg6(ProblemConfig::default())
    }
}

impl Problem for Wfg
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn problem_class_name(&self) -> &str {
        self.variant.class_name()
    }

    fn x_len(&self) -> usize {
        self.config.n()
    }

    fn objectives_len(&self) -> usize {
        self.config.m()
    }

    fn bounds(&self, index: usize) -> (f64, f64) {
        (0.0, 2.0 * (index + 1) as f64)
    }

    fn evaluate(&self, z: &[f64]) -> Result<Vec<f64>> {
        self.variant.evaluate(z, &self.config)
    }

    fn convergence_metric(&self, z: &[f64]) -> Result<f64> {
        let x = self.variant.calculate_geometry(z, &self.config)?;

        Ok(x[x.len() - 1])
    }
}

impl ArraySolutionEvaluator for Wfg
{
    fn calculate_objectives(&self, x: &[f64], f: &mut Vec<f64>) -> Result<()> {
        let objectives = self.variant.evaluate(x, &self.config)?;

        if f.len() != objectives.len()
        {
            f.resize(objectives.len(), 0.0);
        }

        f.copy_from_slice(&objectives);

        Ok(())
    }

    fn x_len(&self) -> usize {
        self.config.n()
    }

    fn objectives_len(&self) -> usize {
        self.config.m()
    }
}
