use std::thread;

use itertools::Itertools;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::WfgError;
use crate::mo::problem::Problem;
use crate::mo::wfg::config::ProblemConfig;
use crate::mo::wfg::{evaluate, Wfg, WfgVariant};

const CANONICAL_Z: [f64; 6] = [1.0, 2.0, 0.6, 0.6, 0.6, 0.6];

fn test_problems() -> Vec<Box<dyn Problem>>
{
    let variants = [WfgVariant::Wfg4, WfgVariant::Wfg5, WfgVariant::Wfg6];
    let sizes = [(2, 4, 2), (4, 4, 3), (4, 10, 5), (6, 1, 3), (1, 20, 2)];

    variants
        .iter()
        .cartesian_product(sizes.iter())
        .map(|(variant, &(k, l, m))| {
            Box::new(Wfg::new(*variant, ProblemConfig::new(k, l, m).unwrap())) as Box<dyn Problem>
        })
        .collect()
}

fn random_z(problem: &dyn Problem, rng: &mut StdRng) -> Vec<f64>
{
    (0..problem.x_len())
        .map(|i| {
            let (min, max) = problem.bounds(i);
            rng.gen_range(min..=max)
        })
        .collect()
}

/// Decision vector with every distance-related variable at its optimum.
fn pareto_optimal_z(problem: &dyn Problem, k: usize, rng: &mut StdRng) -> Vec<f64>
{
    (0..problem.x_len())
        .map(|i| {
            let (_, max) = problem.bounds(i);
            if i < k { rng.gen_range(0.0..=max) } else { max * 0.35 }
        })
        .collect()
}

fn assert_relative_eq(actual: f64, expected: f64)
{
    let error = (actual - expected).abs() / expected.abs().max(1e-12);

    assert!(error <= 1e-5, "expected {}, got {} (relative error {})", expected, actual, error);
}

#[test]
fn canonical_instance_scores_mid_scale_vector() {
    let objectives = evaluate(&CANONICAL_Z, &ProblemConfig::default()).unwrap();

    // x = [1/3, 128/350]: D * x[1] + S * (sin(pi/6), cos(pi/6))
    assert_eq!(objectives.len(), 2);
    assert_relative_eq(objectives[0], 1.3657142857142857);
    assert_relative_eq(objectives[1], 3.8298159008520405);
}

#[test]
fn concave_family_scores_canonical_vector() {
    let config = ProblemConfig::default();

    // y' = [mean of shifted position pair, mean of shifted distance values]
    let expected = [
        (WfgVariant::Wfg4, [0.7260833497098309, 4.568384902847416]),
        (WfgVariant::Wfg5, [2.1277170400439993, 1.5876886389642877]),
        (WfgVariant::Wfg6, [1.3657142857142857, 3.8298159008520405])
    ];

    for (variant, objectives) in expected
    {
        let actual = variant.evaluate(&CANONICAL_Z, &config).unwrap();

        assert_eq!(actual.len(), 2);
        assert_relative_eq(actual[0], objectives[0]);
        assert_relative_eq(actual[1], objectives[1]);
    }
}

#[test]
fn evaluation_is_bit_reproducible() {
    let mut rng = StdRng::seed_from_u64(3);

    for problem in test_problems()
    {
        let z = random_z(problem.as_ref(), &mut rng);

        let first = problem.evaluate(&z).unwrap();
        let second = problem.evaluate(&z).unwrap();

        assert_eq!(
            first.iter().map(|f| f.to_bits()).collect::<Vec<_>>(),
            second.iter().map(|f| f.to_bits()).collect::<Vec<_>>(),
            "{} is not deterministic", problem.name()
        );
    }
}

#[test]
fn objectives_are_non_negative_and_sized() {
    let mut rng = StdRng::seed_from_u64(11);

    for problem in test_problems()
    {
        for _ in 0..200
        {
            let z = random_z(problem.as_ref(), &mut rng);
            let objectives = problem.evaluate(&z).unwrap();

            assert_eq!(objectives.len(), problem.objectives_len());
            assert!(
                objectives.iter().all(|f| *f >= 0.0),
                "{} produced {:?} for {:?}", problem.name(), objectives, z
            );
        }
    }
}

#[test]
fn front_points_lie_on_scaled_sphere() {
    let mut rng = StdRng::seed_from_u64(5);

    for (k, l, m) in [(2, 4, 2), (4, 4, 3), (6, 2, 4)]
    {
        let config = ProblemConfig::new(k, l, m).unwrap();
        let problem = Wfg::wfg6(config.clone());

        for _ in 0..20
        {
            let z = pareto_optimal_z(&problem, k, &mut rng);

            assert!(problem.convergence_metric(&z).unwrap().abs() < 1e-12);

            let norm = problem
                .evaluate(&z)
                .unwrap()
                .iter()
                .zip(config.scales())
                .map(|(f, s)| (f / s).powi(2))
                .sum::<f64>();

            assert!((norm - 1.0).abs() < 1e-9, "{:?} is off the front: {}", z, norm);
        }
    }
}

#[test]
fn off_front_distance_is_positive() {
    let problem = Wfg::default();

    assert!(problem.convergence_metric(&CANONICAL_Z).unwrap() > 0.0);
    assert_relative_eq(problem.convergence_metric(&CANONICAL_Z).unwrap(), 128.0 / 350.0);
}

#[test]
fn position_groups_are_not_separable() {
    // Moving the second variable of a group changes how much the first one
    // contributes, so the group has to be optimised jointly.
    let config = ProblemConfig::new(2, 2, 2).unwrap();
    let score = |z0: f64, z1: f64| evaluate(&[z0, z1, 2.1, 2.8], &config).unwrap()[0];

    let gain_low = score(1.0, 0.0) - score(0.0, 0.0);
    let gain_high = score(1.0, 4.0) - score(0.0, 4.0);

    assert!((gain_low - gain_high).abs() > 1e-3);
}

#[test]
fn problems_share_across_threads() {
    let problem: Box<dyn Problem> = Box::new(Wfg::new(WfgVariant::Wfg6, ProblemConfig::new(4, 4, 3).unwrap()));
    let z = vec![1.0, 3.0, 2.5, 7.0, 5.0, 0.0, 14.0, 3.0];
    let expected = problem.evaluate(&z).unwrap();

    thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| problem.evaluate(&z).unwrap()))
            .collect::<Vec<_>>();

        for handle in handles
        {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn cloned_problem_behaves_like_original() {
    let problems = test_problems();
    let copies = problems.clone();
    let mut rng = StdRng::seed_from_u64(23);

    for (problem, copy) in problems.iter().zip(&copies)
    {
        let z = random_z(problem.as_ref(), &mut rng);

        assert_eq!(problem.name(), copy.name());
        assert_eq!(problem.evaluate(&z).unwrap(), copy.evaluate(&z).unwrap());
    }
}

#[test]
fn every_problem_rejects_wrong_length() {
    for problem in test_problems()
    {
        let z = vec![0.5; problem.x_len() + 1];

        assert!(matches!(problem.evaluate(&z), Err(WfgError::DimensionMismatch { .. })));
        assert!(matches!(problem.convergence_metric(&z[1..z.len() - 1]), Err(WfgError::DimensionMismatch { .. })));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shape_stays_on_unit_sphere(
        variant in prop::sample::select(vec![WfgVariant::Wfg4, WfgVariant::Wfg5, WfgVariant::Wfg6]),
        groups in 1..4usize,
        group_len in 1..4usize,
        l in 1..6usize,
        seed in any::<u64>()
    ) {
        let config = ProblemConfig::new(groups * group_len, l, groups + 1).unwrap();
        let problem = Wfg::new(variant, config.clone());
        let z = random_z(&problem, &mut StdRng::seed_from_u64(seed));

        let distance = problem.convergence_metric(&z).unwrap();
        let norm = problem
            .evaluate(&z)
            .unwrap()
            .iter()
            .zip(config.scales())
            .map(|(f, s)| ((f - distance) / s).powi(2))
            .sum::<f64>();

        prop_assert!((norm - 1.0).abs() < 1e-9, "{}: {}", problem.name(), norm);
    }
}
