//! Depth-first assignment search.
//!
//! Vehicles are placed strictly in input order. At each depth the search
//! walks the still-unused listings left to right and descends into every one
//! the current vehicle fits. A complete assignment replaces the incumbent only
//! when it is strictly cheaper, so among equal-cost assignments the first one
//! reached in depth-first, left-to-right order is kept.
//!
//! The search state is a used-listing mask plus a stack of per-depth cursors
//! over the caller's listing slice; nothing is copied while backtracking.

use crate::bound::{minimum_assignment_cost, AssignmentBound};
use crate::config::SearchConfig;
use crate::fit::FitTable;
use crate::model::{Listing, Vehicle};

/// A complete placement: one listing per vehicle, in vehicle order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    pairs: Vec<(&'a Vehicle, &'a Listing)>,
    total_price_in_cents: u64,
}

impl<'a> Assignment<'a> {
    pub fn pairs(&self) -> &[(&'a Vehicle, &'a Listing)] {
        &self.pairs
    }

    pub fn listing_ids(&self) -> Vec<String> {
        self.pairs
            .iter()
            .map(|(_, listing)| listing.id.clone())
            .collect()
    }

    pub fn total_price_in_cents(&self) -> u64 {
        self.total_price_in_cents
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Feasible(Assignment<'a>),
    Infeasible,
}

impl<'a> SearchOutcome<'a> {
    pub fn is_feasible(&self) -> bool {
        matches!(self, SearchOutcome::Feasible(_))
    }

    pub fn assignment(&self) -> Option<&Assignment<'a>> {
        match self {
            SearchOutcome::Feasible(assignment) => Some(assignment),
            SearchOutcome::Infeasible => None,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Listings tentatively given to a vehicle.
    pub branches: u64,
    /// Complete assignments reached.
    pub complete_assignments: u64,
    /// Fitting listings skipped because they could not beat the bound.
    pub pruned: u64,
}

/// Find the cheapest complete assignment of `vehicles` to distinct `listings`.
///
/// `listings` order defines the branch order and therefore the tie-break.
/// An assignment whose total does not fit in `u64` is never complete.
pub fn search<'a>(
    vehicles: &'a [Vehicle],
    listings: &[&'a Listing],
    config: &SearchConfig,
) -> (SearchOutcome<'a>, SearchStats) {
    let mut stats = SearchStats::default();
    let fit = FitTable::build(vehicles, listings);

    let target = if config.assignment_bound {
        match minimum_assignment_cost(vehicles.len(), listings, &fit) {
            AssignmentBound::Infeasible => return (SearchOutcome::Infeasible, stats),
            AssignmentBound::Optimal(cost) => Some(cost),
            AssignmentBound::Unavailable => None,
        }
    } else {
        None
    };

    let depth_limit = vehicles.len();
    let mut used = vec![false; listings.len()];
    let mut path: Vec<usize> = Vec::with_capacity(depth_limit);
    let mut cursor = vec![0usize; depth_limit + 1];
    let mut cost_at = vec![0u64; depth_limit + 1];
    let mut best: Option<(u64, Vec<usize>)> = None;

    loop {
        let depth = path.len();

        if depth == depth_limit {
            let cost = cost_at[depth];
            stats.complete_assignments += 1;
            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, path.clone()));
            }
            if target == Some(cost) {
                break;
            }
            match path.pop() {
                Some(column) => used[column] = false,
                None => break,
            }
            continue;
        }

        let mut next = None;
        for column in cursor[depth]..listings.len() {
            if used[column] || !fit.fits(depth, column) {
                continue;
            }
            let Some(reached) = cost_at[depth].checked_add(listings[column].price_in_cents) else {
                continue;
            };
            let beaten = config.branch_and_bound
                && best
                    .as_ref()
                    .is_some_and(|(best_cost, _)| reached >= *best_cost);
            if beaten || target.is_some_and(|optimum| reached > optimum) {
                stats.pruned += 1;
                continue;
            }
            next = Some((column, reached));
            break;
        }

        match next {
            Some((column, reached)) => {
                stats.branches += 1;
                cursor[depth] = column + 1;
                used[column] = true;
                path.push(column);
                cost_at[depth + 1] = reached;
                cursor[depth + 1] = 0;
            }
            None => match path.pop() {
                Some(column) => used[column] = false,
                None => break,
            },
        }
    }

    let outcome = match best {
        Some((total_price_in_cents, columns)) => SearchOutcome::Feasible(Assignment {
            pairs: columns
                .into_iter()
                .enumerate()
                .map(|(vehicle, column)| (&vehicles[vehicle], listings[column]))
                .collect(),
            total_price_in_cents,
        }),
        None => SearchOutcome::Infeasible,
    };
    (outcome, stats)
}
