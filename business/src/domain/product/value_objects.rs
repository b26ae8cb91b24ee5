use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::model::Product;

/// Sentinel used by the category selector to mean "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Sortable columns of the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    Brand,
    Price,
    Stock,
}

impl SortKey {
    /// Compares two products on this column. Strings compare lexicographically,
    /// numbers numerically; an absent brand sorts before any present one.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Brand => a.brand.cmp(&b.brand),
            SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortKey::Stock => a.stock.cmp(&b.stock),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Title => write!(f, "title"),
            SortKey::Brand => write!(f, "brand"),
            SortKey::Price => write!(f, "price"),
            SortKey::Stock => write!(f, "stock"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "brand" => Ok(SortKey::Brand),
            "price" => Ok(SortKey::Price),
            "stock" => Ok(SortKey::Stock),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current column sort of the product table. `key == None` keeps server order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Column click: the same column flips direction, a new column starts
    /// ascending.
    pub fn request(&self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) {
            self.direction.toggled()
        } else {
            SortDirection::Ascending
        };
        Self::by(key, direction)
    }

    pub fn indicator(&self, key: SortKey) -> Option<&'static str> {
        if self.key != Some(key) {
            return None;
        }
        match self.direction {
            SortDirection::Ascending => Some("↑"),
            SortDirection::Descending => Some("↓"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Maps a selector value, treating the `"all"` sentinel as no filter.
    pub fn from_selection(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    pub fn as_selection(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

/// Inputs of the product table: search text, category selector and column sort.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_ascending_when_new_column_requested() {
        let sort = SortConfig::default().request(SortKey::Price);
        assert_eq!(sort, SortConfig::by(SortKey::Price, SortDirection::Ascending));
    }

    #[test]
    fn should_toggle_direction_when_same_column_requested() {
        let sort = SortConfig::default()
            .request(SortKey::Title)
            .request(SortKey::Title);
        assert_eq!(sort.direction, SortDirection::Descending);

        let sort = sort.request(SortKey::Title);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn should_reset_to_ascending_when_switching_column() {
        let sort = SortConfig::by(SortKey::Title, SortDirection::Descending).request(SortKey::Stock);
        assert_eq!(sort, SortConfig::by(SortKey::Stock, SortDirection::Ascending));
    }

    #[test]
    fn should_show_indicator_only_for_active_column() {
        let sort = SortConfig::by(SortKey::Brand, SortDirection::Descending);
        assert_eq!(sort.indicator(SortKey::Brand), Some("↓"));
        assert_eq!(sort.indicator(SortKey::Price), None);
    }

    #[test]
    fn should_map_all_sentinel_to_no_filter() {
        assert_eq!(CategoryFilter::from_selection("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection("beauty"),
            CategoryFilter::Only("beauty".to_string())
        );
    }

    #[test]
    fn should_parse_sort_key_from_column_name() {
        assert_eq!("stock".parse::<SortKey>(), Ok(SortKey::Stock));
        assert!("rating".parse::<SortKey>().is_err());
    }
}
