//! Value types shared by the search pipeline.

use serde::{Deserialize, Serialize};

/// Width assigned to every vehicle unit, independent of the request.
pub const VEHICLE_WIDTH: i64 = 10;

/// A validated request for `quantity` identical vehicles of one length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleRequest {
    pub length: i64,
    pub quantity: usize,
}

/// One vehicle unit expanded from a [`VehicleRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle {
    pub length: i64,
    pub width: i64,
}

impl Vehicle {
    pub fn new(length: i64) -> Self {
        Self {
            length,
            width: VEHICLE_WIDTH,
        }
    }
}

/// One assignable storage unit from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    pub id: String,
    pub length: i64,
    pub width: i64,
    pub location_id: String,
    pub price_in_cents: u64,
}

/// Cheapest complete assignment found for one location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub location_id: String,
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: u64,
}

/// Total number of vehicle units, or `None` if it does not fit in `usize`.
pub fn vehicle_count(requests: &[VehicleRequest]) -> Option<usize> {
    requests
        .iter()
        .try_fold(0usize, |total, request| total.checked_add(request.quantity))
}

/// Expand requests into vehicle units, keeping request order and placing the
/// units of one request contiguously.
///
/// Allocates one `Vehicle` per unit; check [`vehicle_count`] first when the
/// quantities come from outside.
pub fn expand_vehicles(requests: &[VehicleRequest]) -> Vec<Vehicle> {
    requests
        .iter()
        .flat_map(|request| std::iter::repeat(Vehicle::new(request.length)).take(request.quantity))
        .collect()
}
