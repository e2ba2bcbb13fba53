//! End-to-end tests for the public solver API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slackpack::algorithms::{AnnealingSolver, ExactSolver};
use slackpack::placement::is_disjoint;
use slackpack::{
    fits_in_order, is_feasible, merge_disjoint, solve_approx, solve_exact, AnnealingConfig, Block,
    SelectionAlgorithm,
};

const EPS: f64 = 1e-9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn block(start: f64, end: f64, slack: f64, weight: f64) -> Block {
    Block::new(start, end, slack, weight).unwrap()
}

fn zone(start: f64, end: f64) -> Block {
    Block::zone(start, end).unwrap()
}

fn random_instance(rng: &mut StdRng, n: usize) -> Vec<Block> {
    (0..n)
        .map(|_| {
            let start = rng.gen_range(0.0..20.0);
            let length = rng.gen_range(0.5..4.0);
            let slack = rng.gen_range(0.0..2.0);
            let weight = rng.gen_range(0.1..5.0);
            block(start, start + length, slack, weight)
        })
        .collect()
}

/// Checks that `chosen` is a valid witness: disjoint from each other and from
/// the zones, each a placement of a distinct input block, and summing to
/// `weight`.
fn assert_valid_witness(blocks: &[Block], zones: &[Block], chosen: &[Block], weight: f64) {
    let mut all = chosen.to_vec();
    all.extend(merge_disjoint(zones));
    assert!(is_disjoint(&all), "witness overlaps: {all:?}");

    let mut used = vec![false; blocks.len()];
    for placed in chosen {
        let original = blocks
            .iter()
            .enumerate()
            .position(|(i, b)| !used[i] && placed.is_placement_of(b))
            .unwrap_or_else(|| panic!("{placed} is not a placement of any unused block"));
        used[original] = true;
    }
    let total: f64 = chosen.iter().map(Block::weight).sum();
    assert!((total - weight).abs() < 1e-6);
}

#[test]
fn greedy_and_oracle_on_fixed_blocks() {
    let mut ordered = vec![zone(1.0, 2.0), zone(2.0, 3.0)];
    assert!(fits_in_order(&mut ordered));

    let mut reversed = vec![zone(2.0, 3.0), zone(1.0, 2.0)];
    assert!(!fits_in_order(&mut reversed));
    assert!(is_feasible(&[zone(2.0, 3.0), zone(1.0, 2.0)], None).is_some());
}

#[test]
fn exact_reference_cases() {
    init_tracing();
    let rigid = vec![
        block(1.0, 2.0, 0.0, 1.0),
        block(2.0, 3.0, 0.0, 1.0),
        block(3.0, 4.0, 0.0, 1.0),
    ];
    let result = solve_exact(&rigid, &[]).unwrap();
    assert!((result.weight - 3.0).abs() < EPS);
    assert_eq!(result.sorted_by_start(), rigid);

    let blocked = solve_exact(&rigid, &[zone(0.0, 4.0)]).unwrap();
    assert_eq!(blocked.weight, 0.0);
    assert!(blocked.chosen.is_empty());

    let flexible = vec![
        block(1.0, 2.0, 1.0, 1.0),
        block(2.0, 3.0, 1.0, 1.0),
        block(3.0, 4.0, 1.0, 1.0),
    ];
    let escaped = solve_exact(&flexible, &[zone(0.0, 4.0)]).unwrap();
    assert!((escaped.weight - 1.0).abs() < EPS);
    assert_eq!(escaped.chosen.len(), 1);
    assert!((escaped.chosen[0].start() - 4.0).abs() < EPS);
}

#[test]
fn annealing_reference_cases() {
    init_tracing();
    let rigid = vec![
        block(1.0, 2.0, 0.0, 1.0),
        block(2.0, 3.0, 0.0, 1.0),
        block(3.0, 4.0, 0.0, 1.0),
    ];
    let mut rng = StdRng::seed_from_u64(3);

    let frozen = AnnealingConfig::default().with_temperature(0.0);
    let result = solve_approx(&rigid, &[], frozen.clone(), &mut rng).unwrap();
    let exact = solve_exact(&rigid, &[]).unwrap();
    assert!((result.weight - exact.weight).abs() < EPS);
    assert_eq!(result.sorted_by_start(), exact.sorted_by_start());

    let empty = solve_approx(&[], &[zone(0.0, 4.0)], frozen, &mut rng).unwrap();
    assert_eq!(empty.weight, 0.0);
    assert!(empty.chosen.is_empty());
}

#[test]
fn annealing_never_beats_exact_on_random_instances() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(11);
    for round in 0..6 {
        let blocks = random_instance(&mut rng, 8);
        let zones = vec![zone(5.0, 6.0), zone(5.5, 7.0), zone(15.0, 15.5)];

        let exact = ExactSolver::new().solve(&blocks, &zones).unwrap();
        assert_valid_witness(&blocks, &zones, &exact.chosen, exact.weight);

        let approx = AnnealingSolver::new(AnnealingConfig::default().with_iterations(400))
            .solve(&blocks, &zones, &mut rng)
            .unwrap();
        assert_valid_witness(&blocks, &zones, &approx.chosen, approx.weight);
        assert!(
            approx.weight <= exact.weight + 1e-6,
            "round {round}: approx {} > exact {}",
            approx.weight,
            exact.weight
        );
    }
}

#[test]
fn annealing_scales_to_a_hundred_blocks() {
    init_tracing();
    let mut blocks = Vec::new();
    for i in 0..50 {
        let i = i as f64;
        blocks.push(block(i, i + 1.0, 1.0, 1.0));
        blocks.push(block(i, i + 1.0, 1.0, 20.0));
    }
    let config = AnnealingConfig::default()
        .with_iterations(2000)
        .with_search_budget(10);
    let solver = AnnealingSolver::new(config);
    let mut rng = StdRng::seed_from_u64(99);
    let result = solver.select(&blocks, &[], &mut rng).unwrap();

    assert!(result.weight > 0.0);
    assert_valid_witness(&blocks, &[], &result.chosen, result.weight);
}

#[test]
fn caller_blocks_are_untouched() {
    let blocks = vec![block(0.0, 2.0, 1.0, 1.0), block(1.0, 3.0, 1.0, 2.0)];
    let zones = vec![zone(3.5, 4.0), zone(3.0, 3.75)];
    let (blocks_before, zones_before) = (blocks.clone(), zones.clone());

    let _ = solve_exact(&blocks, &zones).unwrap();
    let _ = solve_approx(
        &blocks,
        &zones,
        AnnealingConfig::default(),
        &mut StdRng::seed_from_u64(5),
    )
    .unwrap();

    assert_eq!(blocks, blocks_before);
    assert_eq!(zones, zones_before);
}
