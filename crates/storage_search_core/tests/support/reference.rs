//! Straightforward slice-rebuilding backtracking used as an oracle.

use storage_search_core::{Listing, Vehicle};

pub fn reference_search(vehicles: &[Vehicle], listings: &[&Listing]) -> Option<(u64, Vec<String>)> {
    place(vehicles, listings, 0, Vec::new())
}

fn place(
    vehicles: &[Vehicle],
    available: &[&Listing],
    cost: u64,
    chosen: Vec<String>,
) -> Option<(u64, Vec<String>)> {
    let Some((vehicle, remaining_vehicles)) = vehicles.split_first() else {
        return Some((cost, chosen));
    };

    let mut best: Option<(u64, Vec<String>)> = None;
    for (index, listing) in available.iter().enumerate() {
        let fits = (vehicle.length <= listing.length && vehicle.width <= listing.width)
            || (vehicle.length <= listing.width && vehicle.width <= listing.length);
        if !fits {
            continue;
        }
        let mut rest = available.to_vec();
        rest.remove(index);
        let mut next = chosen.clone();
        next.push(listing.id.clone());
        if let Some(candidate) = place(remaining_vehicles, &rest, cost + listing.price_in_cents, next) {
            if best.as_ref().map_or(true, |(best_cost, _)| candidate.0 < *best_cost) {
                best = Some(candidate);
            }
        }
    }
    best
}
