use storage_search_core::catalog::{parse_catalog, CatalogError, ListingCatalog};
use storage_search_core::Listing;

pub trait ObjectReader: Send + Sync {
    fn read_object(&self, key: &str) -> Result<Vec<u8>, String>;
}

/// Catalog stored as a single JSON object in an object store.
pub struct ObjectStoreCatalog<R> {
    reader: R,
    key: String,
}

impl<R: ObjectReader> ObjectStoreCatalog<R> {
    pub fn new(reader: R, key: impl Into<String>) -> Self {
        Self {
            reader,
            key: key.into(),
        }
    }
}

impl<R: ObjectReader> ListingCatalog for ObjectStoreCatalog<R> {
    fn load_listings(&self) -> Result<Vec<Listing>, CatalogError> {
        let body = self
            .reader
            .read_object(&self.key)
            .map_err(CatalogError::Source)?;
        parse_catalog(&body)
    }
}
