//! Pure query operations over the catalog: filter, sort, paginate.
//!
//! These compose strictly in sequence (category -> price range -> sort ->
//! paginate); no stage mutates the catalog or depends on the HTTP layer.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Supported sort orderings for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name ascending, case-insensitive
    #[default]
    Name,
    /// Price ascending
    PriceLow,
    /// Price descending
    PriceHigh,
    /// Rating descending
    Rating,
}

impl SortKey {
    /// Parses a sort key; unrecognized values fall back to name ascending.
    pub fn parse(value: &str) -> Self {
        match value {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Name,
        }
    }
}

/// Keeps products whose category matches `category`, compared on lower-cased
/// canonical form. A single policy applied at every call site.
pub fn filter_by_category<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    category: &str,
) -> Vec<&'a Product> {
    let wanted = category.to_lowercase();
    products
        .into_iter()
        .filter(|p| p.category.to_lowercase() == wanted)
        .collect()
}

/// Keeps products with `min <= price <= max` (inclusive bounds).
pub fn filter_by_price_range<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    min: i64,
    max: i64,
) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|p| p.price >= min && p.price <= max)
        .collect()
}

/// Sorts a projection by the given key. Stable, so equal keys keep their
/// catalog order.
pub fn sort_by<'a>(mut products: Vec<&'a Product>, key: SortKey) -> Vec<&'a Product> {
    match key {
        SortKey::Name => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    products
}

/// Returns the 1-based page `[(page-1)*size, page*size)`. Out-of-range page
/// numbers yield an empty slice, not an error.
pub fn paginate<'a>(products: &[&'a Product], page_size: u64, page_number: u64) -> Vec<&'a Product> {
    if page_size == 0 || page_number == 0 {
        return Vec::new();
    }
    let start = (page_number - 1).saturating_mul(page_size) as usize;
    if start >= products.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size as usize).min(products.len());
    products[start..end].to_vec()
}

/// A product listing request: optional filters plus sort and page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub min_price: i64,
    pub max_price: i64,
    pub sort: SortKey,
    pub page: u64,
    pub per_page: u64,
}

/// One page of results plus the totals the pagination UI needs.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPage {
    pub items: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Runs the full pipeline: category filter, price filter, sort, paginate.
pub fn run(products: &[Product], query: &ProductQuery) -> QueryPage {
    let filtered: Vec<&Product> = match &query.category {
        Some(category) => filter_by_category(products, category),
        None => products.iter().collect(),
    };
    let filtered = filter_by_price_range(filtered, query.min_price, query.max_price);
    let sorted = sort_by(filtered, query.sort);

    let per_page = query.per_page.max(1);
    let total = sorted.len() as u64;
    let total_pages = if total == 0 {
        0
    } else {
        (total + per_page - 1) / per_page
    };
    let items = paginate(&sorted, per_page, query.page)
        .into_iter()
        .cloned()
        .collect();

    QueryPage {
        items,
        total,
        page: query.page,
        per_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: &str, price: i64, rating: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            rating,
            stock: true,
            description: String::new(),
            image: String::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Zip Case", "Accessories", 1500, 3.5),
            product(2, "Anchor Lamp", "Home", 4500, 4.8),
            product(3, "Band", "Fitness", 1500, 4.1),
            product(4, "mat", "Fitness", 3000, 4.4),
            product(5, "Cable", "Accessories", 900, 3.9),
        ]
    }

    #[test]
    fn category_filter_is_case_insensitive_everywhere() {
        let products = fixture();
        let lower = filter_by_category(&products, "fitness");
        let mixed = filter_by_category(&products, "FitNess");
        assert_eq!(lower.len(), 2);
        assert_eq!(
            lower.iter().map(|p| p.id).collect::<Vec<_>>(),
            mixed.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let products = fixture();
        let hits = filter_by_price_range(&products, 900, 1500);
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let products = fixture();
        let sorted = sort_by(products.iter().collect(), SortKey::Name);
        let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Anchor Lamp", "Band", "Cable", "mat", "Zip Case"]);
    }

    #[test]
    fn price_sorts_reverse_each_other_for_distinct_prices() {
        let products = vec![
            product(1, "a", "X", 300, 4.0),
            product(2, "b", "X", 100, 4.0),
            product(3, "c", "X", 200, 4.0),
        ];
        let low: Vec<i64> = sort_by(products.iter().collect(), SortKey::PriceLow)
            .iter()
            .map(|p| p.id)
            .collect();
        let mut high: Vec<i64> = sort_by(products.iter().collect(), SortKey::PriceHigh)
            .iter()
            .map(|p| p.id)
            .collect();
        high.reverse();
        assert_eq!(low, high);
    }

    #[test]
    fn rating_sorts_descending() {
        let products = fixture();
        let sorted = sort_by(products.iter().collect(), SortKey::Rating);
        assert_eq!(sorted[0].id, 2);
        assert_eq!(sorted.last().map(|p| p.id), Some(1));
    }

    #[test]
    fn unknown_sort_key_falls_back_to_name() {
        assert_eq!(SortKey::parse("newest"), SortKey::Name);
        assert_eq!(SortKey::parse("price-high"), SortKey::PriceHigh);
    }

    #[test]
    fn paginate_slices_one_based_pages() {
        let products: Vec<Product> = (1..=30)
            .map(|i| product(i, &format!("p{}", i), "X", i * 100, 4.0))
            .collect();
        let refs: Vec<&Product> = products.iter().collect();

        assert_eq!(paginate(&refs, 12, 1).len(), 12);
        assert_eq!(paginate(&refs, 12, 2).len(), 12);
        assert_eq!(paginate(&refs, 12, 3).len(), 6);
        assert!(paginate(&refs, 12, 4).is_empty());
    }

    #[test]
    fn run_composes_filter_sort_paginate() {
        let products = fixture();
        let page = run(
            &products,
            &ProductQuery {
                category: Some("accessories".to_string()),
                min_price: 0,
                max_price: i64::MAX,
                sort: SortKey::PriceLow,
                page: 1,
                per_page: 12,
            },
        );
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(
            page.items.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![5, 1]
        );
    }

    #[test]
    fn run_reports_empty_page_out_of_range() {
        let products = fixture();
        let page = run(
            &products,
            &ProductQuery {
                category: None,
                min_price: 0,
                max_price: i64::MAX,
                sort: SortKey::Name,
                page: 9,
                per_page: 12,
            },
        );
        assert_eq!(page.total, 5);
        assert!(page.items.is_empty());
    }
}
