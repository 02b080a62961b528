//! Filter-then-sort pipeline.
//!
//! Pure functions over a product slice. The composition order is fixed:
//! filtering decides membership, sorting only reorders what survived.

use crate::catalog::Product;
use crate::listing::{CategoryFilter, SortKey};

/// Products passing `filter`, in their original relative order.
pub fn filter_products<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Reorder `products` in place under `key`.
///
/// Uses a stable sort, so products with equal keys keep their input order.
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    if key.is_identity() {
        return;
    }
    products.sort_by(|a, b| key.compare(a, b));
}

/// Filter, then sort.
pub fn apply<'a>(products: &'a [Product], filter: &CategoryFilter, key: SortKey) -> Vec<&'a Product> {
    let mut displayed = filter_products(products, filter);
    sort_products(&mut displayed, key);
    displayed
}

/// Same as [`apply`] but yields positions into `products`.
pub(crate) fn apply_indices(products: &[Product], filter: &CategoryFilter, key: SortKey) -> Vec<usize> {
    let mut indices: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .map(|(i, _)| i)
        .collect();
    if !key.is_identity() {
        indices.sort_by(|&a, &b| key.compare(&products[a], &products[b]));
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::price::Price;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn two_products() -> Vec<Product> {
        vec![
            Product::new("1", "One", Price::new(100), Category::Evening),
            Product::new("2", "Two", Price::new(50), Category::Luxury),
        ]
    }

    #[test]
    fn test_price_low_across_all() {
        let products = two_products();
        let shown = apply(&products, &CategoryFilter::All, SortKey::PriceLow);
        assert_eq!(ids(&shown), vec!["2", "1"]);
    }

    #[test]
    fn test_filter_ignores_sort() {
        let products = two_products();
        for key in SortKey::ALL {
            let shown = apply(&products, &CategoryFilter::Only(Category::Evening), key);
            assert_eq!(ids(&shown), vec!["1"]);
        }
    }

    #[test]
    fn test_unknown_sort_key_keeps_filtered_order() {
        let products = Catalog::seed().products().to_vec();
        let shown = apply(&products, &CategoryFilter::All, SortKey::parse("bogus"));
        assert_eq!(ids(&shown), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_empty_input() {
        let products: Vec<Product> = Vec::new();
        for key in SortKey::ALL {
            assert!(apply(&products, &CategoryFilter::All, key).is_empty());
            assert!(apply(&products, &CategoryFilter::parse("luxury"), key).is_empty());
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let products = Catalog::seed().products().to_vec();
        assert!(apply(&products, &CategoryFilter::parse("floral"), SortKey::Name).is_empty());
    }

    #[test]
    fn test_seed_orderings() {
        let products = Catalog::seed().products().to_vec();

        let by_price = apply(&products, &CategoryFilter::All, SortKey::PriceLow);
        assert_eq!(ids(&by_price), vec!["6", "3", "1", "2", "4", "5"]);

        let by_price_desc = apply(&products, &CategoryFilter::All, SortKey::PriceHigh);
        assert_eq!(ids(&by_price_desc), vec!["5", "4", "2", "1", "3", "6"]);

        // Golden Aurora and Silk Whisper tie at 4.9 and keep catalog order.
        let by_rating = apply(&products, &CategoryFilter::All, SortKey::Rating);
        assert_eq!(ids(&by_rating), vec!["5", "2", "4", "1", "3", "6"]);

        let by_name = apply(&products, &CategoryFilter::All, SortKey::Name);
        assert_eq!(ids(&by_name), vec!["6", "2", "1", "5", "4", "3"]);
    }

    #[test]
    fn test_signed_zero_ratings_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            Product::new("1", "Unrated", Price::new(10), Category::Casual).with_rating(-0.0, 0),
            Product::new("2", "Also unrated", Price::new(20), Category::Casual).with_rating(0.0, 0),
        ])
        .unwrap();

        let shown = apply(catalog.products(), &CategoryFilter::All, SortKey::Rating);
        assert_eq!(ids(&shown), vec!["1", "2"]);
    }

    #[test]
    fn test_casual_by_price() {
        let products = Catalog::seed().products().to_vec();
        let shown = apply(&products, &CategoryFilter::Only(Category::Casual), SortKey::PriceLow);
        assert_eq!(ids(&shown), vec!["6", "3"]);
    }

    #[test]
    fn test_indices_agree_with_apply() {
        let products = Catalog::seed().products().to_vec();
        for key in SortKey::ALL {
            for filter in CategoryFilter::options() {
                let by_ref = apply(&products, &filter, key);
                let by_index: Vec<&Product> = apply_indices(&products, &filter, key)
                    .into_iter()
                    .map(|i| &products[i])
                    .collect();
                assert_eq!(by_ref, by_index);
            }
        }
    }
}
