//! Derived view state over the fetched product collection.
//!
//! Everything here is a pure function of its inputs: no I/O and no state kept
//! between calls. Sorting uses `sort_by`, which is stable, so products with
//! equal keys keep their server order.

use std::collections::HashSet;

use super::model::Product;
use super::value_objects::{ALL_CATEGORIES, CategoryFilter, ProductQuery};

/// Products with `stock` strictly below this count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;
/// Length of the dashboard's price and stock series.
pub const DASHBOARD_SERIES_LEN: usize = 8;
/// Entries in the dashboard's recently added panel.
pub const RECENT_PRODUCTS_LEN: usize = 4;
const LABEL_MAX_CHARS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_categories: usize,
    pub total_brands: usize,
    /// Sum of prices with two decimals, e.g. `"30.00"`.
    pub total_value: String,
    pub low_stock_products: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Order-preserving distinct values.
fn distinct<T, I>(values: I) -> Vec<T>
where
    T: Eq + std::hash::Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .collect()
}

pub fn stats(products: &[Product]) -> CatalogStats {
    let total_value = products.iter().fold(0.0, |acc, product| acc + product.price);

    CatalogStats {
        total_products: products.len(),
        total_categories: distinct(products.iter().map(|p| p.category.as_str())).len(),
        // An absent brand is one more distinct value, not skipped.
        total_brands: distinct(products.iter().map(|p| p.brand.as_deref())).len(),
        total_value: format!("{:.2}", total_value),
        low_stock_products: products
            .iter()
            .filter(|product| product.stock < LOW_STOCK_THRESHOLD)
            .count(),
    }
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.category.as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Category selector options: the `"all"` sentinel followed by [`categories`].
pub fn category_options(products: &[Product]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories(products))
        .collect()
}

/// One point per distinct category, valued by its product count.
pub fn category_distribution(products: &[Product]) -> Vec<SeriesPoint> {
    categories(products)
        .into_iter()
        .map(|category| {
            let count = products.iter().filter(|p| p.category == category).count();
            SeriesPoint {
                label: category,
                value: count as f64,
            }
        })
        .collect()
}

/// The first `n` products in server order.
pub fn recent(products: &[Product], n: usize) -> Vec<Product> {
    products.iter().take(n).cloned().collect()
}

/// The `n` most expensive products, highest first.
pub fn top_by_price(products: &[Product], n: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| b.price.total_cmp(&a.price));
    sorted.truncate(n);
    sorted
}

/// The `n` products with the least stock, lowest first.
pub fn lowest_stock(products: &[Product], n: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by_key(|product| product.stock);
    sorted.truncate(n);
    sorted
}

pub fn price_series(products: &[Product]) -> Vec<SeriesPoint> {
    top_by_price(products, DASHBOARD_SERIES_LEN)
        .iter()
        .map(|p| SeriesPoint {
            label: short_label(&p.title),
            value: p.price,
        })
        .collect()
}

pub fn stock_series(products: &[Product]) -> Vec<SeriesPoint> {
    lowest_stock(products, DASHBOARD_SERIES_LEN)
        .iter()
        .map(|p| SeriesPoint {
            label: short_label(&p.title),
            value: f64::from(p.stock),
        })
        .collect()
}

/// Chart label: at most 12 characters, with `...` when the title was cut.
pub fn short_label(title: &str) -> String {
    if title.chars().count() > LABEL_MAX_CHARS {
        let head: String = title.chars().take(LABEL_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}

/// Case-insensitive substring match on title, description or brand.
pub fn matches_search(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();
    let contains = |field: &str| !field.is_empty() && field.to_lowercase().contains(&needle);

    contains(&product.title)
        || contains(&product.description)
        || product.brand.as_deref().is_some_and(contains)
}

/// Keeps products matching `query`; an empty query keeps everything.
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| matches_search(product, query))
        .cloned()
        .collect()
}

pub fn filter_by_category(products: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}

/// Search AND category, then the optional column sort.
pub fn filter_and_sort(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut rows: Vec<Product> = products
        .iter()
        .filter(|product| query.category.matches(product))
        .filter(|product| query.search.is_empty() || matches_search(product, &query.search))
        .cloned()
        .collect();

    if let Some(key) = query.sort.key {
        let direction = query.sort.direction;
        rows.sort_by(|a, b| direction.apply(key.compare(a, b)));
    }

    rows
}
