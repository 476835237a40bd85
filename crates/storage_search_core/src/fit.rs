use crate::model::{Listing, Vehicle};

/// Whether a `vehicle_length` x `vehicle_width` footprint fits a listing,
/// either as given or rotated by 90 degrees.
pub fn fits(vehicle_length: i64, vehicle_width: i64, listing_length: i64, listing_width: i64) -> bool {
    (vehicle_length <= listing_length && vehicle_width <= listing_width)
        || (vehicle_length <= listing_width && vehicle_width <= listing_length)
}

pub fn vehicle_fits(vehicle: &Vehicle, listing: &Listing) -> bool {
    fits(vehicle.length, vehicle.width, listing.length, listing.width)
}

/// Row-major vehicle x listing fit table, computed once per search.
#[derive(Debug, Clone)]
pub struct FitTable {
    columns: usize,
    cells: Vec<bool>,
}

impl FitTable {
    pub fn build(vehicles: &[Vehicle], listings: &[&Listing]) -> Self {
        let cells = vehicles
            .iter()
            .flat_map(|vehicle| listings.iter().map(move |listing| vehicle_fits(vehicle, listing)))
            .collect();
        Self {
            columns: listings.len(),
            cells,
        }
    }

    #[inline]
    pub fn fits(&self, vehicle: usize, listing: usize) -> bool {
        self.cells[vehicle * self.columns + listing]
    }
}
