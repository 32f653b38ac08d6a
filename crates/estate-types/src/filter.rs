//! Property filtering and sorting.
//!
//! The dashboards keep the full property collection in memory and derive
//! the visible list by running it through [`PropertyQuery::apply`]. The
//! pipeline is pure: the source collection is never mutated and identical
//! inputs always produce identical output.

use crate::Property;

/// Sentinel value of the location filter meaning "no filter".
pub const ALL_LOCATIONS: &str = "all";

/// Price sort directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    None,
    LowToHigh,
    HighToLow,
}

impl SortOrder {
    /// Parse the value of the sort `<select>`; anything unrecognized
    /// means no sort.
    pub fn from_value(value: &str) -> Self {
        match value {
            "lowToHigh" => SortOrder::LowToHigh,
            "highToLow" => SortOrder::HighToLow,
            _ => SortOrder::None,
        }
    }
}

/// Filter and sort parameters, exactly as entered in the filter bar.
///
/// Price bounds stay as raw text: parsing happens inside [`apply`] so
/// that non-numeric input degrades to "no bound" instead of zero.
///
/// [`apply`]: PropertyQuery::apply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
    /// Case-insensitive title substring. Blank means no filter.
    pub search: String,
    /// Exact location match, or [`ALL_LOCATIONS`].
    pub location: String,
    /// Inclusive lower price bound, as entered.
    pub min_price: String,
    /// Inclusive upper price bound, as entered.
    pub max_price: String,
    pub sort: SortOrder,
}

impl PropertyQuery {
    pub fn new() -> Self {
        Self {
            location: ALL_LOCATIONS.to_string(),
            ..Self::default()
        }
    }

    /// Run the full filter/sort pipeline over `properties`.
    ///
    /// Filters compose with AND; each neutral parameter is a no-op. The
    /// sort is stable and applied after filtering.
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        let search = self.search.trim().to_lowercase();
        let min = parse_price_bound(&self.min_price);
        let max = parse_price_bound(&self.max_price);

        let mut result: Vec<Property> = properties
            .iter()
            .filter(|p| search.is_empty() || p.title.to_lowercase().contains(&search))
            .filter(|p| self.location == ALL_LOCATIONS || p.location == self.location)
            .filter(|p| min.is_none_or(|bound| p.price >= bound))
            .filter(|p| max.is_none_or(|bound| p.price <= bound))
            .cloned()
            .collect();

        match self.sort {
            SortOrder::None => {}
            SortOrder::LowToHigh => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::HighToLow => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        result
    }
}

/// Parse a user-entered price bound.
///
/// Empty, whitespace-only, or non-numeric text means "no bound". This is
/// deliberate: coercing garbage to zero would silently exclude valid
/// low-priced listings from a max-price filter.
pub fn parse_price_bound(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Distinct locations in first-seen order, for the location `<select>`.
pub fn unique_locations(properties: &[Property]) -> Vec<String> {
    let mut seen = Vec::new();
    for p in properties {
        if !seen.contains(&p.location) {
            seen.push(p.location.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: &str, title: &str, price: f64, location: &str) -> Property {
        Property {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            price,
            location: location.to_string(),
            images: Vec::new(),
            agent: None,
        }
    }

    fn sample() -> Vec<Property> {
        vec![
            property("p1", "Lake View", 100.0, "A"),
            property("p2", "Hill Top", 300.0, "B"),
            property("p3", "Lakeside Villa", 250.0, "A"),
        ]
    }

    #[test]
    fn test_neutral_query_returns_input_unchanged() {
        let props = sample();
        let result = PropertyQuery::new().apply(&props);

        assert_eq!(result, props);
    }

    #[test]
    fn test_min_price_excludes_cheaper_listings() {
        let props = vec![
            property("p1", "Lake View", 100.0, "A"),
            property("p2", "Hill Top", 300.0, "B"),
        ];
        let query = PropertyQuery {
            min_price: "150".to_string(),
            ..PropertyQuery::new()
        };

        let result = query.apply(&props);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Hill Top");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = PropertyQuery {
            search: "lake".to_string(),
            ..PropertyQuery::new()
        };

        let result = query.apply(&sample());

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.title.to_lowercase().contains("lake")));
    }

    #[test]
    fn test_filters_compose_with_and() {
        let query = PropertyQuery {
            search: "lake".to_string(),
            location: "A".to_string(),
            min_price: "200".to_string(),
            ..PropertyQuery::new()
        };

        let result = query.apply(&sample());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p3");
    }

    #[test]
    fn test_non_numeric_bound_is_no_bound() {
        let query = PropertyQuery {
            max_price: "cheap".to_string(),
            ..PropertyQuery::new()
        };

        // A garbage max bound must not exclude everything.
        assert_eq!(query.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_zero_priced_listing_survives_empty_bounds() {
        let props = vec![property("p0", "Free Plot", 0.0, "A")];
        let query = PropertyQuery {
            min_price: "   ".to_string(),
            max_price: String::new(),
            ..PropertyQuery::new()
        };

        assert_eq!(query.apply(&props).len(), 1);
    }

    #[test]
    fn test_sort_ascending_after_filter() {
        let query = PropertyQuery {
            location: "A".to_string(),
            sort: SortOrder::LowToHigh,
            ..PropertyQuery::new()
        };

        let result = query.apply(&sample());

        let prices: Vec<f64> = result.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100.0, 250.0]);
    }

    #[test]
    fn test_sort_descending() {
        let query = PropertyQuery {
            sort: SortOrder::HighToLow,
            ..PropertyQuery::new()
        };

        let prices: Vec<f64> = query.apply(&sample()).iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![300.0, 250.0, 100.0]);
    }

    #[test]
    fn test_sort_never_reintroduces_excluded_items() {
        let filtered_then_sorted = PropertyQuery {
            min_price: "200".to_string(),
            sort: SortOrder::LowToHigh,
            ..PropertyQuery::new()
        }
        .apply(&sample());

        let mut sorted_subset = PropertyQuery {
            min_price: "200".to_string(),
            ..PropertyQuery::new()
        }
        .apply(&sample());
        sorted_subset.sort_by(|a, b| a.price.total_cmp(&b.price));

        assert_eq!(filtered_then_sorted, sorted_subset);
    }

    #[test]
    fn test_apply_is_idempotent_and_non_mutating() {
        let props = sample();
        let query = PropertyQuery {
            search: "l".to_string(),
            sort: SortOrder::HighToLow,
            ..PropertyQuery::new()
        };

        let first = query.apply(&props);
        let second = query.apply(&props);

        assert_eq!(first, second);
        assert_eq!(props, sample());
    }

    #[test]
    fn test_output_is_subset_of_input() {
        let props = sample();
        let query = PropertyQuery {
            search: "i".to_string(),
            max_price: "275".to_string(),
            ..PropertyQuery::new()
        };

        for p in query.apply(&props) {
            assert!(props.contains(&p));
        }
    }

    #[test]
    fn test_parse_price_bound() {
        assert_eq!(parse_price_bound("150"), Some(150.0));
        assert_eq!(parse_price_bound(" 99.5 "), Some(99.5));
        assert_eq!(parse_price_bound(""), None);
        assert_eq!(parse_price_bound("abc"), None);
        assert_eq!(parse_price_bound("NaN"), None);
    }

    #[test]
    fn test_unique_locations_first_seen_order() {
        let locations = unique_locations(&sample());
        assert_eq!(locations, vec!["A".to_string(), "B".to_string()]);
    }
}
