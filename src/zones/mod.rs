//! Canonical form for forbidden zones.
//!
//! Forbidden zones are immovable, weightless blocks that no placed block may
//! intersect. Before they are handed to the feasibility oracle they are put in
//! **canonical form**: sorted by start, pairwise disjoint, with slack and
//! weight forced to zero.
//!
//! Zones are open intervals, so two zones that merely touch at a boundary stay
//! distinct; only zones whose interiors intersect are merged.

use std::cmp::Ordering;

use crate::block::Block;

/// Returns the canonical form of `zones`.
///
/// The result covers the same set of points as the input, is sorted by start,
/// and contains no two zones whose interiors intersect. Slack and weight of
/// every returned zone are zero regardless of the input values. The input is
/// not modified.
///
/// # Performance
///
/// O(n log n) sort followed by an O(n) sweep.
pub fn merge_disjoint(zones: &[Block]) -> Vec<Block> {
    let mut sorted: Vec<Block> = zones.iter().map(Block::as_zone).collect();
    sorted.sort_by(|a, b| {
        a.start()
            .partial_cmp(&b.start())
            .unwrap_or(Ordering::Equal)
    });

    let mut merged: Vec<Block> = Vec::with_capacity(sorted.len());
    for zone in sorted {
        if let Some(last) = merged.last_mut() {
            if zone.start() < last.end() {
                // Interior overlap: extend the current run.
                last.stretch_to(zone.end());
                continue;
            }
        }
        merged.push(zone);
    }
    debug_assert!(is_canonical(&merged));
    merged
}

/// Returns true if `zones` is canonical: sorted by start, pairwise disjoint
/// (touching allowed), and carrying neither slack nor weight.
pub fn is_canonical(zones: &[Block]) -> bool {
    zones
        .iter()
        .all(|z| z.slack() == 0.0 && z.weight() == 0.0)
        && zones
            .windows(2)
            .all(|w| w[0].end() <= w[1].start())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(start: f64, end: f64) -> Block {
        Block::zone(start, end).unwrap()
    }

    fn spans(zones: &[Block]) -> Vec<(f64, f64)> {
        zones.iter().map(|z| (z.start(), z.end())).collect()
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_disjoint(&[]).is_empty());
    }

    #[test]
    fn test_merge_sorts_disjoint_input() {
        let zones = vec![zone(5.0, 6.0), zone(0.0, 1.0), zone(2.0, 3.0)];
        let merged = merge_disjoint(&zones);
        assert_eq!(spans(&merged), vec![(0.0, 1.0), (2.0, 3.0), (5.0, 6.0)]);
    }

    #[test]
    fn test_merge_overlapping() {
        let zones = vec![zone(0.0, 0.5), zone(0.25, 1.0), zone(0.9, 3.0)];
        let merged = merge_disjoint(&zones);
        assert_eq!(spans(&merged), vec![(0.0, 3.0)]);
    }

    #[test]
    fn test_merge_keeps_touching_zones_apart() {
        let zones = vec![zone(0.5, 1.0), zone(0.0, 0.5)];
        let merged = merge_disjoint(&zones);
        assert_eq!(spans(&merged), vec![(0.0, 0.5), (0.5, 1.0)]);
    }

    #[test]
    fn test_merge_contained_zone() {
        let zones = vec![zone(0.0, 10.0), zone(2.0, 3.0), zone(9.0, 12.0)];
        let merged = merge_disjoint(&zones);
        assert_eq!(spans(&merged), vec![(0.0, 12.0)]);
    }

    #[test]
    fn test_merge_strips_slack_and_weight() {
        let zones = vec![Block::new(100.0, 127.0, 300.0, 300.0).unwrap()];
        let merged = merge_disjoint(&zones);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].slack(), 0.0);
        assert_eq!(merged[0].weight(), 0.0);
        assert_eq!(spans(&merged), vec![(100.0, 127.0)]);
    }

    #[test]
    fn test_merge_leaves_input_untouched() {
        let zones = vec![zone(3.0, 4.0), Block::new(0.0, 3.5, 1.0, 2.0).unwrap()];
        let before = zones.clone();
        let _ = merge_disjoint(&zones);
        assert_eq!(zones, before);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let inputs = vec![
            vec![zone(0.0, 1.0), zone(0.0, 0.5), zone(0.5, 1.0)],
            vec![zone(4.0, 9.0), zone(1.0, 2.0), zone(1.5, 4.0), zone(9.0, 10.0)],
            vec![zone(-3.0, -1.0), zone(-2.0, 0.0), zone(7.0, 8.0)],
        ];
        for zones in inputs {
            let once = merge_disjoint(&zones);
            let twice = merge_disjoint(&once);
            assert_eq!(once, twice);
            assert!(is_canonical(&once));
        }
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical(&[]));
        assert!(is_canonical(&[zone(0.0, 1.0), zone(1.0, 2.0)]));
        assert!(!is_canonical(&[zone(1.0, 2.0), zone(0.0, 0.5)]));
        assert!(!is_canonical(&[zone(0.0, 1.5), zone(1.0, 2.0)]));
        assert!(!is_canonical(&[Block::new(0.0, 1.0, 1.0, 0.0).unwrap()]));
    }
}
