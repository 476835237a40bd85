use crate::config::SearchConfig;
use crate::model::{Listing, SearchResult, Vehicle};
use crate::search::{search, SearchOutcome};

/// Solve one location: order its listings by ascending price (stable, so
/// equal prices keep catalog order) and search for the cheapest complete
/// assignment. Returns `None` when the location cannot house every vehicle.
pub fn solve_location(
    location_id: &str,
    listings: &[&Listing],
    vehicles: &[Vehicle],
    config: &SearchConfig,
) -> Option<SearchResult> {
    let mut by_price = listings.to_vec();
    by_price.sort_by_key(|listing| listing.price_in_cents);

    let (outcome, stats) = search(vehicles, &by_price, config);
    tracing::debug!(
        location_id,
        listings = listings.len(),
        vehicles = vehicles.len(),
        feasible = outcome.is_feasible(),
        branches = stats.branches,
        complete_assignments = stats.complete_assignments,
        pruned = stats.pruned,
        "location searched"
    );

    match outcome {
        SearchOutcome::Feasible(assignment) => Some(SearchResult {
            location_id: location_id.to_string(),
            listing_ids: assignment.listing_ids(),
            total_price_in_cents: assignment.total_price_in_cents(),
        }),
        SearchOutcome::Infeasible => None,
    }
}
