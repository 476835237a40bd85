#![allow(dead_code)]

pub mod reference;

use storage_search_core::{Listing, VehicleRequest};

/// Listing wide enough for every vehicle unit, so only `length` decides fit.
pub fn wide_listing(id: &str, location_id: &str, length: i64, price_in_cents: u64) -> Listing {
    listing(id, location_id, length, 10, price_in_cents)
}

pub fn listing(
    id: &str,
    location_id: &str,
    length: i64,
    width: i64,
    price_in_cents: u64,
) -> Listing {
    Listing {
        id: id.to_string(),
        length,
        width,
        location_id: location_id.to_string(),
        price_in_cents,
    }
}

pub fn request(length: i64, quantity: usize) -> VehicleRequest {
    VehicleRequest { length, quantity }
}
