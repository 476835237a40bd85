use std::collections::HashMap;

use crate::model::Listing;

/// Listings sharing one `location_id`, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup<'a> {
    pub location_id: &'a str,
    pub listings: Vec<&'a Listing>,
}

/// Group the catalog by location.
///
/// Groups are returned in order of each location's first appearance in the
/// catalog, and listings keep catalog order within their group.
pub fn partition_by_location(listings: &[Listing]) -> Vec<LocationGroup<'_>> {
    let mut groups: Vec<LocationGroup<'_>> = Vec::new();
    let mut index_by_location: HashMap<&str, usize> = HashMap::new();

    for listing in listings {
        let index = *index_by_location
            .entry(listing.location_id.as_str())
            .or_insert_with(|| {
                groups.push(LocationGroup {
                    location_id: listing.location_id.as_str(),
                    listings: Vec::new(),
                });
                groups.len() - 1
            });
        groups[index].listings.push(listing);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, location_id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            length: 10,
            width: 10,
            location_id: location_id.to_string(),
            price_in_cents: 100,
        }
    }

    fn ids<'a>(group: &LocationGroup<'a>) -> Vec<&'a str> {
        group.listings.iter().map(|listing| listing.id.as_str()).collect()
    }

    #[test]
    fn groups_follow_first_appearance_and_keep_catalog_order() {
        let catalog = vec![
            listing("a1", "a"),
            listing("b1", "b"),
            listing("a2", "a"),
            listing("c1", "c"),
            listing("b2", "b"),
        ];

        let groups = partition_by_location(&catalog);
        let locations: Vec<&str> = groups.iter().map(|group| group.location_id).collect();
        assert_eq!(locations, vec!["a", "b", "c"]);
        assert_eq!(ids(&groups[0]), vec!["a1", "a2"]);
        assert_eq!(ids(&groups[1]), vec!["b1", "b2"]);
        assert_eq!(ids(&groups[2]), vec!["c1"]);
    }

    #[test]
    fn empty_catalog_has_no_groups() {
        assert!(partition_by_location(&[]).is_empty());
    }
}
