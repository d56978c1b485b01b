use serde::Deserialize;

use crate::error::{invalid_configuration, Result};
use crate::mo::wfg::{Wfg, WfgVariant};

pub const DEFAULT_K: usize = 2;
pub const DEFAULT_L: usize = 4;
pub const DEFAULT_M: usize = 2;

/// Size of a WFG instance: `k` position-related variables, `l` distance-related
/// variables and `m` objectives.
///
/// Only constructible through [`ProblemConfig::new`], so every instance
/// satisfies `k > 0`, `l > 0`, `m >= 2` and `k % (m - 1) == 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemConfig
{
    k: usize,
    l: usize,
    m: usize,
    scales: Vec<f64>,
    amplitudes: Vec<f64>,
    distance_scale: f64
}

impl ProblemConfig {
    pub fn new(k: usize, l: usize, m: usize) -> Result<Self>
    {
        if m < 2
        {
            return Err(invalid_configuration(format!("objective count must be at least 2, got {}", m)));
        }

        if k == 0
        {
            return Err(invalid_configuration("position-related variable count must be positive"));
        }

        if l == 0
        {
            return Err(invalid_configuration("distance-related variable count must be positive"));
        }

        if k % (m - 1) != 0
        {
            return Err(invalid_configuration(format!("k = {} is not divisible by M - 1 = {}", k, m - 1)));
        }

        Ok(ProblemConfig::with_derived(k, l, m))
    }

    /// Callers must have checked the size invariants.
    fn with_derived(k: usize, l: usize, m: usize) -> Self
    {
        ProblemConfig {
            k,
            l,
            m,
            scales: (0..m).map(|i| 2.0 * (i + 1) as f64).collect(),
            amplitudes: vec![1.0; m - 1],
            distance_scale: 1.0
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn l(&self) -> usize {
        self.l
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn n(&self) -> usize {
        self.k + self.l
    }

    /// Width of each position group folded by the reduction transform.
    pub fn group_len(&self) -> usize {
        self.k / (self.m - 1)
    }

    /// `S[m] = 2 * (m + 1)`.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Amplitude flags, one per position-derived coordinate.
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn distance_scale(&self) -> f64 {
        self.distance_scale
    }
}

impl Default for ProblemConfig {
    fn default() -> Self
    {
        ProblemConfig::with_derived(DEFAULT_K, DEFAULT_L, DEFAULT_M)
    }
}

fn default_k() -> usize { DEFAULT_K }
fn default_l() -> usize { DEFAULT_L }
fn default_m() -> usize { DEFAULT_M }

/// Problem description as it arrives from an experiment layer, e.g.
/// `{"problem": "WFG6", "k": 4, "l": 4, "m": 3}`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProblemDescriptor
{
    pub problem: WfgVariant,
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_l")]
    pub l: usize,
    #[serde(default = "default_m")]
    pub m: usize
}

impl ProblemDescriptor {
    pub fn from_json(json: &str) -> Result<Self>
    {
        Ok(serde_json::from_str(json)?)
    }

    pub fn config(&self) -> Result<ProblemConfig>
    {
        ProblemConfig::new(self.k, self.l, self.m)
    }

    pub fn build(&self) -> Result<Wfg>
    {
        Ok(Wfg::new(self.problem, self.config()?))
    }
}
