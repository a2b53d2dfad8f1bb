use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::trace::DistanceTracker;

/// Walks predecessor links backward from `end` to `start` and returns the
/// forward-ordered path.
///
/// Returns an empty path when `end` has infinite distance. The walk is
/// capped at `node_count + 1` hops; a malformed predecessor map (a cycle,
/// or a chain that dead-ends before reaching `start`) fails closed to an
/// empty path instead of looping forever.
pub fn reconstruct<W>(
    tracker: &DistanceTracker<W>,
    start: &str,
    end: &str,
    node_count: usize,
) -> Vec<String>
where
    W: Float + Zero + Debug + Copy,
{
    if !tracker.distance(end).is_finite() {
        return Vec::new();
    }

    let cap = node_count + 1;
    let mut reversed: Vec<String> = Vec::new();
    let mut current = end;

    while current != start {
        reversed.push(current.to_string());
        if reversed.len() > cap {
            log::warn!(
                "path reconstruction exceeded {} hops at {}; treating as no path",
                cap,
                current
            );
            return Vec::new();
        }
        match tracker.predecessor(current) {
            Some(predecessor) => current = predecessor,
            None => return Vec::new(),
        }
    }

    reversed.push(start.to_string());
    reversed.reverse();
    reversed
}
