//! Vehicle storage listing search.
//!
//! Given requested vehicles and a listing catalog, finds for every location
//! the cheapest way to give each vehicle its own listing it fits into, and
//! ranks the feasible locations by total price.
//!
//! This crate owns the search and the request/catalog contracts. It
//! intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod aggregate;
pub mod bound;
pub mod catalog;
pub mod config;
pub mod contract;
pub mod fit;
pub mod model;
pub mod partition;
pub mod search;
pub mod solver;

pub use aggregate::{aggregate, search_listings};
pub use catalog::{CatalogError, JsonFileCatalog, ListingCatalog, StaticCatalog};
pub use config::SearchConfig;
pub use contract::{normalize_requests, ValidationError, VehicleRequestPayload};
pub use model::{Listing, SearchResult, Vehicle, VehicleRequest, VEHICLE_WIDTH};
