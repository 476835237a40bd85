//! Relaxed assignment bound solved with Kuhn-Munkres.
//!
//! The minimum-cost bipartite assignment between vehicle units and listings
//! has exactly the same optimum as the backtracking search; it just cannot
//! tell which of several equal-cost assignments the depth-first order would
//! pick. The search uses the optimum to stop early and to reject infeasible
//! locations without exploring any branch.

use pathfinding::kuhn_munkres::{kuhn_munkres, Weights};

use crate::fit::FitTable;
use crate::model::Listing;

/// Outcome of the relaxed assignment problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentBound {
    /// No complete assignment exists.
    Infeasible,
    /// Minimum total price over all complete assignments.
    Optimal(u64),
    /// Prices too large to encode safely as `i64` weights.
    Unavailable,
}

struct PriceWeights(Vec<Vec<i64>>);

impl Weights<i64> for PriceWeights {
    fn rows(&self) -> usize {
        self.0.len()
    }

    fn columns(&self) -> usize {
        self.0.first().map_or(0, |r| r.len())
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.0[row][col]
    }

    fn neg(&self) -> Self {
        PriceWeights(
            self.0
                .iter()
                .map(|r| r.iter().map(|&x| x.saturating_neg()).collect())
                .collect(),
        )
    }
}

/// Solve the minimum-cost assignment of `vehicle_count` vehicles to `listings`.
pub fn minimum_assignment_cost(
    vehicle_count: usize,
    listings: &[&Listing],
    fit: &FitTable,
) -> AssignmentBound {
    if vehicle_count == 0 {
        return AssignmentBound::Optimal(0);
    }
    if vehicle_count > listings.len() {
        return AssignmentBound::Infeasible;
    }

    let Some(infeasible) = infeasible_weight(vehicle_count, listings) else {
        return AssignmentBound::Unavailable;
    };

    // Any feasible total is >= -(sum of prices) > infeasible, so the optimum
    // only touches an infeasible cell when no complete assignment exists.
    let matrix: Vec<Vec<i64>> = (0..vehicle_count)
        .map(|vehicle| {
            listings
                .iter()
                .enumerate()
                .map(|(column, listing)| {
                    if fit.fits(vehicle, column) {
                        -(listing.price_in_cents as i64)
                    } else {
                        infeasible
                    }
                })
                .collect()
        })
        .collect();
    let weights = PriceWeights(matrix);

    let (_total, assignment) = kuhn_munkres(&weights);

    let mut cost = 0u64;
    for (vehicle, &column) in assignment.iter().enumerate() {
        if !fit.fits(vehicle, column) {
            return AssignmentBound::Infeasible;
        }
        cost += listings[column].price_in_cents;
    }
    AssignmentBound::Optimal(cost)
}

/// Sentinel weight strictly below every feasible total, or `None` when the
/// sentinel (times the number of rows, with headroom) would overflow `i64`.
fn infeasible_weight(vehicle_count: usize, listings: &[&Listing]) -> Option<i64> {
    let price_sum = listings.iter().try_fold(0i64, |sum, listing| {
        i64::try_from(listing.price_in_cents)
            .ok()
            .and_then(|price| sum.checked_add(price))
    })?;
    let magnitude = price_sum.checked_add(1)?;
    let rows = i64::try_from(vehicle_count).ok()?;
    // kuhn_munkres sums and subtracts potentials; keep a wide margin.
    let headroom = magnitude.checked_mul(rows.checked_add(1)?)?.checked_mul(4);
    headroom.map(|_| -magnitude)
}
