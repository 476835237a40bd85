//! Listing catalog providers.
//!
//! The search loads the catalog exactly once per invocation through
//! [`ListingCatalog`]; where the listings live is up to the provider.

use std::path::{Path, PathBuf};

use crate::model::Listing;

pub const DEFAULT_CATALOG_PATH: &str = "listings.json";

#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Source(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            CatalogError::Parse(error) => write!(f, "{error}"),
            CatalogError::Source(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse(error) => Some(error),
            CatalogError::Source(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::Parse(error)
    }
}

pub trait ListingCatalog: Send + Sync {
    fn load_listings(&self) -> Result<Vec<Listing>, CatalogError>;
}

/// Parse the persisted catalog: a JSON array of listing records.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Listing>, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Catalog stored as a JSON file, re-read on every load.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingCatalog for JsonFileCatalog {
    fn load_listings(&self) -> Result<Vec<Listing>, CatalogError> {
        let bytes = std::fs::read(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_catalog(&bytes)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    listings: Vec<Listing>,
}

impl StaticCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

impl ListingCatalog for StaticCatalog {
    fn load_listings(&self) -> Result<Vec<Listing>, CatalogError> {
        Ok(self.listings.clone())
    }
}
