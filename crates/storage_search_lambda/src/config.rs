use storage_search_core::catalog::DEFAULT_CATALOG_PATH;
use storage_search_core::{SearchConfig, ValidationError};

pub const LISTINGS_BUCKET_VAR: &str = "LISTINGS_BUCKET";
pub const LISTINGS_KEY_VAR: &str = "LISTINGS_KEY";
pub const LISTINGS_PATH_VAR: &str = "LISTINGS_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    ObjectStore { bucket: String, key: String },
    File { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub catalog: CatalogSource,
    pub search: SearchConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let catalog = match non_empty(LISTINGS_BUCKET_VAR) {
            Some(bucket) => CatalogSource::ObjectStore {
                bucket,
                key: non_empty(LISTINGS_KEY_VAR)
                    .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string()),
            },
            None => CatalogSource::File {
                path: non_empty(LISTINGS_PATH_VAR)
                    .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string()),
            },
        };

        let mut search = SearchConfig::default();
        if let Some(value) = non_empty("SEARCH_BRANCH_AND_BOUND") {
            search.branch_and_bound = parse_flag("SEARCH_BRANCH_AND_BOUND", &value)?;
        }
        if let Some(value) = non_empty("SEARCH_ASSIGNMENT_BOUND") {
            search.assignment_bound = parse_flag("SEARCH_ASSIGNMENT_BOUND", &value)?;
        }
        if let Some(value) = non_empty("SEARCH_PARALLEL") {
            search.parallel = parse_flag("SEARCH_PARALLEL", &value)?;
        }
        if let Some(value) = non_empty("SEARCH_THREADS") {
            match value.trim().parse::<usize>() {
                Ok(threads) if threads > 0 => search.num_threads = Some(threads),
                _ => {
                    return Err(ValidationError::new(format!(
                        "SEARCH_THREADS must be a positive integer, got '{value}'"
                    )))
                }
            }
        }

        Ok(Self { catalog, search })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ValidationError::new(format!(
            "{name} must be a boolean, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServiceConfig, ValidationError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        ServiceConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_local_catalog_file() {
        let config = config_from(&[]).expect("config should load");
        assert_eq!(
            config.catalog,
            CatalogSource::File {
                path: "listings.json".to_string()
            }
        );
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn bucket_selects_object_store() {
        let config = config_from(&[
            ("LISTINGS_BUCKET", "catalog-bucket"),
            ("LISTINGS_PATH", "ignored.json"),
        ])
        .expect("config should load");
        assert_eq!(
            config.catalog,
            CatalogSource::ObjectStore {
                bucket: "catalog-bucket".to_string(),
                key: "listings.json".to_string(),
            }
        );
    }

    #[test]
    fn search_overrides_are_applied() {
        let config = config_from(&[
            ("SEARCH_BRANCH_AND_BOUND", "false"),
            ("SEARCH_PARALLEL", "0"),
            ("SEARCH_THREADS", "4"),
        ])
        .expect("config should load");
        assert!(!config.search.branch_and_bound);
        assert!(config.search.assignment_bound);
        assert!(!config.search.parallel);
        assert_eq!(config.search.num_threads, Some(4));
    }

    #[test]
    fn rejects_invalid_values() {
        let error = config_from(&[("SEARCH_ASSIGNMENT_BOUND", "maybe")]).expect_err("should fail");
        assert_eq!(
            error.message(),
            "SEARCH_ASSIGNMENT_BOUND must be a boolean, got 'maybe'"
        );
        assert!(config_from(&[("SEARCH_THREADS", "0")]).is_err());
    }
}
