//! Runs the location solver over the whole catalog and ranks the results.

use std::time::Instant;

use rayon::prelude::*;

use crate::catalog::{CatalogError, ListingCatalog};
use crate::config::SearchConfig;
use crate::model::{expand_vehicles, vehicle_count, Listing, SearchResult, Vehicle, VehicleRequest};
use crate::partition::{partition_by_location, LocationGroup};
use crate::solver::solve_location;

/// Every location that can house all requested vehicles, cheapest first.
///
/// Each location is searched with the full vehicle set. Results with equal
/// totals keep the order in which their locations first appear in the catalog.
#[tracing::instrument(level = "debug", name = "aggregate", skip_all, fields(requests = requests.len(), listings = listings.len()))]
pub fn aggregate(
    requests: &[VehicleRequest],
    listings: &[Listing],
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let started_at = Instant::now();
    let groups = partition_by_location(listings);

    // Every vehicle needs its own listing, so no location can house more
    // vehicles than it has listings.
    let largest_location = groups.iter().map(|group| group.listings.len()).max().unwrap_or(0);
    match vehicle_count(requests) {
        Some(count) if count <= largest_location => {}
        count => {
            tracing::debug!(
                vehicles = ?count,
                largest_location,
                "more vehicles than listings at every location"
            );
            return Vec::new();
        }
    }
    let vehicles = expand_vehicles(requests);

    let mut results = if config.parallel {
        solve_parallel(&groups, &vehicles, config)
    } else {
        solve_sequential(&groups, &vehicles, config)
    };
    results.sort_by_key(|result| result.total_price_in_cents);

    tracing::debug!(
        vehicles = vehicles.len(),
        locations = groups.len(),
        feasible_locations = results.len(),
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        "search completed"
    );
    results
}

/// Load the catalog once and aggregate against it.
pub fn search_listings(
    requests: &[VehicleRequest],
    catalog: &dyn ListingCatalog,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, CatalogError> {
    let listings = catalog.load_listings()?;
    Ok(aggregate(requests, &listings, config))
}

fn solve_sequential(
    groups: &[LocationGroup<'_>],
    vehicles: &[Vehicle],
    config: &SearchConfig,
) -> Vec<SearchResult> {
    groups
        .iter()
        .filter_map(|group| solve_location(group.location_id, &group.listings, vehicles, config))
        .collect()
}

fn solve_parallel(
    groups: &[LocationGroup<'_>],
    vehicles: &[Vehicle],
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let run = || -> Vec<SearchResult> {
        groups
            .par_iter()
            .filter_map(|group| {
                solve_location(group.location_id, &group.listings, vehicles, config)
            })
            .collect()
    };

    let Some(threads) = config.num_threads else {
        return run();
    };
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(run),
        Err(error) => {
            tracing::warn!(threads, %error, "failed to build search pool, using global pool");
            run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn listing(id: &str, location_id: &str, price_in_cents: u64) -> Listing {
        Listing {
            id: id.to_string(),
            length: 20,
            width: 10,
            location_id: location_id.to_string(),
            price_in_cents,
        }
    }

    fn one_vehicle() -> Vec<VehicleRequest> {
        vec![VehicleRequest {
            length: 15,
            quantity: 1,
        }]
    }

    #[test]
    fn results_are_ranked_by_total_price() {
        let catalog = vec![
            listing("a1", "a", 300),
            listing("b1", "b", 100),
            listing("c1", "c", 200),
        ];

        let results = aggregate(&one_vehicle(), &catalog, &SearchConfig::default());
        let locations: Vec<&str> = results.iter().map(|r| r.location_id.as_str()).collect();
        assert_eq!(locations, vec!["b", "c", "a"]);
    }

    #[test]
    fn equal_totals_keep_location_appearance_order() {
        let catalog = vec![
            listing("z1", "z", 100),
            listing("a1", "a", 100),
            listing("m1", "m", 50),
        ];

        for config in [SearchConfig::default(), SearchConfig::exhaustive()] {
            let results = aggregate(&one_vehicle(), &catalog, &config);
            let locations: Vec<&str> = results.iter().map(|r| r.location_id.as_str()).collect();
            assert_eq!(locations, vec!["m", "z", "a"]);
        }
    }

    #[test]
    fn dedicated_pool_matches_sequential_run() {
        let catalog: Vec<Listing> = (0..12)
            .map(|index| listing(&format!("l{index}"), &format!("loc{}", index % 4), 10 * (index as u64 % 5)))
            .collect();
        let requests = vec![VehicleRequest {
            length: 18,
            quantity: 2,
        }];

        let parallel = aggregate(
            &requests,
            &catalog,
            &SearchConfig::default().with_num_threads(2),
        );
        let sequential = aggregate(&requests, &catalog, &SearchConfig::exhaustive());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn search_listings_searches_loaded_catalog() {
        let catalog = StaticCatalog::new(vec![listing("a1", "a", 10)]);
        let results = search_listings(&one_vehicle(), &catalog, &SearchConfig::default())
            .expect("catalog should load");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].listing_ids, vec!["a1"]);
    }

    #[test]
    fn oversized_quantity_is_infeasible_everywhere() {
        let catalog = vec![listing("a1", "a", 10), listing("a2", "a", 20)];
        let huge = VehicleRequest {
            length: 1,
            quantity: i64::MAX as usize,
        };

        assert!(aggregate(&[huge], &catalog, &SearchConfig::default()).is_empty());
        assert!(aggregate(&[huge, huge, huge], &catalog, &SearchConfig::default()).is_empty());
    }

    #[test]
    fn more_vehicles_than_any_location_has_listings() {
        let catalog = vec![listing("a1", "a", 10), listing("b1", "b", 10), listing("b2", "b", 10)];
        let requests = vec![VehicleRequest {
            length: 5,
            quantity: 3,
        }];
        assert!(aggregate(&requests, &catalog, &SearchConfig::exhaustive()).is_empty());
    }

    #[test]
    fn empty_request_places_nothing_everywhere() {
        let catalog = vec![listing("a1", "a", 10), listing("b1", "b", 20)];
        let results = aggregate(&[], &catalog, &SearchConfig::default());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.listing_ids.is_empty() && r.total_price_in_cents == 0));
    }
}
