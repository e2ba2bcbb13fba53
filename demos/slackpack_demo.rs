//! Demonstration of exact and annealing selection on a small instance.

use rand::rngs::StdRng;
use rand::SeedableRng;
use slackpack::algorithms::{AnnealingConfig, AnnealingSolver, ExactSolver};
use slackpack::{Block, BlockError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Blocks: (start, end, slack, weight)
    let blocks = [
        (0.0, 3.0, 1.0, 2.0),
        (2.0, 4.0, 1.0, 3.0),
        (3.0, 5.0, 0.5, 1.0),
        (4.5, 6.0, 2.0, 2.5),
        (1.0, 2.0, 0.0, 0.5),
        (6.0, 9.0, 1.5, 4.0),
    ]
    .into_iter()
    .map(|(s, e, d, w)| Block::new(s, e, d, w))
    .collect::<Result<Vec<_>, BlockError>>()?;

    // Forbidden zones; overlapping ones are merged internally
    let forbidden = vec![Block::zone(9.5, 10.0)?, Block::zone(9.8, 11.0)?];

    let exact = ExactSolver::new().solve(&blocks, &forbidden)?;
    println!("Exact selection (weight {:.2}):", exact.weight);
    for block in exact.sorted_by_start() {
        println!("  [{:.2}, {:.2})  weight {:.2}", block.start(), block.end(), block.weight());
    }

    let solver = AnnealingSolver::new(AnnealingConfig::default().with_iterations(2000));
    let mut rng = StdRng::seed_from_u64(2024);
    let (approx, stats) = solver.solve_with_stats(&blocks, &forbidden, &mut rng)?;
    println!();
    println!("Annealing selection (weight {:.2}):", approx.weight);
    for block in approx.sorted_by_start() {
        println!("  [{:.2}, {:.2})  weight {:.2}", block.start(), block.end(), block.weight());
    }
    println!(
        "  {} iterations, {} oracle calls, {:.0}% infeasible, {} improvements",
        stats.iterations,
        stats.proposals_checked,
        100.0 * stats.infeasible_rate(),
        stats.improvements
    );

    Ok(())
}
