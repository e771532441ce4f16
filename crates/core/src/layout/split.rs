//! Key/value split boundary strategies.
//!
//! A strategy looks at one page's lines and returns the x-coordinate that
//! separates key text (left) from value text (right), or `None` when the
//! page gives it nothing to go on.

use std::fmt::Debug;

use super::clustering::{cluster_list, densest_cluster};
use super::lines::Line;
use crate::params::SplitPolicy;

pub trait SplitStrategy: Debug {
    fn boundary(&self, lines: &[Line<'_>]) -> Option<f64>;
}

impl SplitPolicy {
    /// Build the strategy this policy describes.
    pub fn strategy(&self) -> Box<dyn SplitStrategy> {
        match *self {
            SplitPolicy::Fixed { x } => Box::new(FixedSplit { x }),
            SplitPolicy::InferredGap {
                min_gap,
                cluster_tolerance,
            } => Box::new(GapSplit {
                min_gap,
                cluster_tolerance,
            }),
        }
    }
}

/// A configured boundary, the same on every page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSplit {
    pub x: f64,
}

impl SplitStrategy for FixedSplit {
    fn boundary(&self, _lines: &[Line<'_>]) -> Option<f64> {
        Some(self.x)
    }
}

/// Boundary inferred from the value column.
///
/// Each line votes with the left edge of the token that follows its widest
/// gap, provided the gap is at least `min_gap` wide. The votes are
/// clustered and the most populated cluster (leftmost on a tie) wins. The
/// boundary sits midway between the rightmost key edge of the winning
/// voters and the smallest x0 in that cluster, so value lines that start a
/// little left of the column still read as values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSplit {
    pub min_gap: f64,
    pub cluster_tolerance: f64,
}

impl GapSplit {
    /// Edges of the widest qualifying gap in a line, as `(key_x1, value_x0)`.
    fn vote(&self, line: &Line<'_>) -> Option<(f64, f64)> {
        let mut best: Option<(f64, f64, f64)> = None;
        for pair in line.tokens().windows(2) {
            let gap = pair[1].x0 - pair[0].x1;
            if gap < self.min_gap {
                continue;
            }
            if best.is_none_or(|(widest, _, _)| gap > widest) {
                best = Some((gap, pair[0].x1, pair[1].x0));
            }
        }
        best.map(|(_, key_x1, value_x0)| (key_x1, value_x0))
    }
}

impl SplitStrategy for GapSplit {
    fn boundary(&self, lines: &[Line<'_>]) -> Option<f64> {
        let votes: Vec<(f64, f64)> = lines.iter().filter_map(|line| self.vote(line)).collect();
        if votes.is_empty() {
            return None;
        }
        let starts = votes.iter().map(|&(_, x0)| x0).collect();
        let winner = densest_cluster(cluster_list(starts, self.cluster_tolerance))?;
        let (&column, &last) = (winner.first()?, winner.last()?);
        // clusters are contiguous, so the range picks out exactly the winners
        let key_edge = votes
            .iter()
            .filter(|&&(_, x0)| x0 >= column && x0 <= last)
            .map(|&(key_x1, _)| key_x1)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((key_edge + column) / 2.0)
    }
}
