//! Free-text category labels mapped to Geoapify category queries.

use directory_core::Poi;

/// A set of case-insensitive labels that select one provider category query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMapping {
    pub labels: &'static [&'static str],
    pub categories: &'static str,
}

/// Label table checked in order; the first mapping containing the query wins.
pub const GEOAPIFY_CATEGORY_MAPPINGS: &[CategoryMapping] = &[
    CategoryMapping {
        labels: &["gas stations", "gas station", "fuel"],
        categories: "commercial.gas,service.vehicle.fuel",
    },
    CategoryMapping {
        labels: &["restaurants", "restaurant", "food"],
        categories: "catering.restaurant",
    },
    CategoryMapping {
        labels: &["entertainment"],
        categories: "entertainment",
    },
    CategoryMapping {
        labels: &["coffee", "coffee shops", "coffee shop", "cafe", "cafes"],
        categories: "catering.cafe",
    },
    CategoryMapping {
        labels: &["shopping", "shops", "store", "stores"],
        categories: "commercial",
    },
    CategoryMapping {
        labels: &["hotels", "hotel", "lodging"],
        categories: "accommodation.hotel",
    },
];

/// Used when neither a label mapping nor a top-level category applies.
pub const DEFAULT_GEOAPIFY_CATEGORIES: &str =
    "catering,commercial,service,entertainment,leisure,accommodation,amenity";

/// Where the effective category query came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    /// The query exactly matched a label.
    Mapped,
    /// The session's top-level category.
    TopLevel,
    /// [`DEFAULT_GEOAPIFY_CATEGORIES`].
    Default,
}

/// The category query to send, and why it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    pub categories: String,
    pub source: CategorySource,
}

/// Exact, case-insensitive match of the trimmed query against `mappings`.
#[must_use]
pub fn map_query_to_categories(
    mappings: &[CategoryMapping],
    query: &str,
) -> Option<&'static str> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    mappings
        .iter()
        .find(|mapping| mapping.labels.contains(&normalized.as_str()))
        .map(|mapping| mapping.categories)
}

/// Picks the category query in order of specificity: label mapping, then
/// the top-level category, then the broad default set.
#[must_use]
pub fn select_categories(query: &str, top_level_category: Option<&str>) -> CategorySelection {
    if let Some(categories) = map_query_to_categories(GEOAPIFY_CATEGORY_MAPPINGS, query) {
        return CategorySelection {
            categories: categories.to_string(),
            source: CategorySource::Mapped,
        };
    }
    match top_level_category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => CategorySelection {
            categories: category.to_string(),
            source: CategorySource::TopLevel,
        },
        None => CategorySelection {
            categories: DEFAULT_GEOAPIFY_CATEGORIES.to_string(),
            source: CategorySource::Default,
        },
    }
}

/// Keeps results whose name or description contains `query`
/// (case-insensitive).
#[must_use]
pub fn filter_by_query(pois: Vec<Poi>, query: &str) -> Vec<Poi> {
    let needle = query.trim().to_lowercase();
    pois.into_iter()
        .filter(|poi| {
            poi.name.to_lowercase().contains(&needle)
                || poi.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use directory_core::Address;

    use super::*;

    #[test]
    fn maps_labels_case_insensitively() {
        assert_eq!(
            map_query_to_categories(GEOAPIFY_CATEGORY_MAPPINGS, "  Gas Station "),
            Some("commercial.gas,service.vehicle.fuel")
        );
        assert_eq!(
            map_query_to_categories(GEOAPIFY_CATEGORY_MAPPINGS, "CAFES"),
            Some("catering.cafe")
        );
    }

    #[test]
    fn partial_labels_do_not_match() {
        assert_eq!(map_query_to_categories(GEOAPIFY_CATEGORY_MAPPINGS, "gas"), None);
        assert_eq!(map_query_to_categories(GEOAPIFY_CATEGORY_MAPPINGS, ""), None);
    }

    #[test]
    fn mapped_label_wins_over_top_level_category() {
        let selection = select_categories("Restaurants", Some("leisure"));
        assert_eq!(selection.categories, "catering.restaurant");
        assert_eq!(selection.source, CategorySource::Mapped);
    }

    #[test]
    fn top_level_category_beats_default() {
        let selection = select_categories("pizza", Some("catering"));
        assert_eq!(selection.categories, "catering");
        assert_eq!(selection.source, CategorySource::TopLevel);
    }

    #[test]
    fn blank_top_level_category_is_ignored() {
        let selection = select_categories("pizza", Some("  "));
        assert_eq!(selection.categories, DEFAULT_GEOAPIFY_CATEGORIES);
        assert_eq!(selection.source, CategorySource::Default);
    }

    #[test]
    fn filter_matches_name_or_description() {
        let mut pizzeria = Poi::new("Luigi's Pizzeria", Address::default());
        pizzeria.description = "catering.restaurant".into();
        let mut bakery = Poi::new("Bäckerei", Address::default());
        bakery.description = "catering.restaurant.pizza".into();
        let hotel = Poi::new("Grand Hotel", Address::default());

        let kept = filter_by_query(vec![pizzeria, bakery, hotel], "PIZZA");
        let names: Vec<&str> = kept.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Luigi's Pizzeria", "Bäckerei"]);
    }
}
