use thiserror::Error;
use tracing::{debug, warn};

use crate::models::product::Product;

/// Line totals at or above this amount get the bulk discount.
pub const DISCOUNT_THRESHOLD: f64 = 1000.0;
pub const BULK_DISCOUNT_FACTOR: f64 = 0.95;
pub const STANDARD_DISCOUNT_FACTOR: f64 = 0.99;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    #[error("No product list was supplied")]
    MissingProducts,
}

/// Pick the multiplier for an undiscounted line total.
pub fn discount_factor(line_total: f64) -> f64 {
    if line_total >= DISCOUNT_THRESHOLD {
        BULK_DISCOUNT_FACTOR
    } else {
        STANDARD_DISCOUNT_FACTOR
    }
}

/// Discounted line total for a single product.
///
/// The product is borrowed, so there is no "absent product" case to handle.
pub fn discounted_price(product: &Product) -> f64 {
    let base_price = product.line_total();
    base_price * discount_factor(base_price)
}

/// Add the discounted line totals of `products` onto `total`, in order.
///
/// `total` is never reset, callers start it at zero when they want a fresh
/// sum. Passing `None` fails with [`PricingError::MissingProducts`] and leaves
/// `total` untouched; an empty slice succeeds and adds nothing.
pub fn accumulate_total(
    products: Option<&[Product]>,
    total: &mut f64,
) -> Result<(), PricingError> {
    let products = products.ok_or_else(|| {
        warn!("Batch pricing called without a product list");
        PricingError::MissingProducts
    })?;

    add_discounted(products, total);
    debug!("Accumulated {} products, running total {}", products.len(), total);
    Ok(())
}

/// Grand total of a product list, starting from zero.
pub fn batch_total(products: &[Product]) -> f64 {
    let mut total = 0.0;
    add_discounted(products, &mut total);
    total
}

fn add_discounted(products: &[Product], total: &mut f64) {
    for (index, product) in products.iter().enumerate() {
        let price = discounted_price(product);
        debug!("Product {} ({}) priced at {}", index, product, price);
        *total += price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_uses_bulk_factor_at_exactly_one_thousand() {
        assert_eq!(discount_factor(1000.0), BULK_DISCOUNT_FACTOR);
        assert_eq!(discount_factor(1000.5), BULK_DISCOUNT_FACTOR);
        assert_eq!(discount_factor(999.99), STANDARD_DISCOUNT_FACTOR);
        assert_eq!(discount_factor(0.0), STANDARD_DISCOUNT_FACTOR);
    }

    #[test]
    fn test_discounted_price_sample_products() {
        assert_eq!(discounted_price(&Product::new(500.0, 2)), 1000.0 * 0.95);
        assert_eq!(discounted_price(&Product::new(5.0, 100)), 500.0 * 0.99);
    }

    #[test]
    fn test_discounted_price_accepts_unvalidated_input() {
        let refund = Product::new(-20.0, 3);
        assert_eq!(discounted_price(&refund), -60.0 * 0.99);

        let nothing = Product::new(12.5, 0);
        assert_eq!(discounted_price(&nothing), 0.0);
    }

    #[test]
    fn test_accumulate_missing_products_leaves_total_unchanged() {
        let mut total = 42.0;
        let result = accumulate_total(None, &mut total);

        assert_eq!(result, Err(PricingError::MissingProducts));
        assert_eq!(total, 42.0);
    }

    #[test]
    fn test_accumulate_empty_slice_succeeds() {
        let mut total = 7.0;
        let result = accumulate_total(Some(&[]), &mut total);

        assert!(result.is_ok());
        assert_eq!(total, 7.0);
    }

    #[test]
    fn test_accumulate_is_additive() {
        let products = [Product::new(500.0, 2), Product::new(5.0, 100)];
        let mut total = 100.0;

        accumulate_total(Some(&products), &mut total).unwrap();
        accumulate_total(Some(&products), &mut total).unwrap();

        let once = discounted_price(&products[0]) + discounted_price(&products[1]);
        assert!((total - (100.0 + 2.0 * once)).abs() < 1e-9);
    }

    #[test]
    fn test_batch_total_of_empty_list_is_zero() {
        assert_eq!(batch_total(&[]), 0.0);
    }

    #[test]
    fn test_batch_total_agrees_with_accumulate_total() {
        let products = [Product::new(500.0, 2), Product::new(5.0, 100)];
        let mut accumulated = 0.0;
        accumulate_total(Some(&products), &mut accumulated).unwrap();

        assert_eq!(batch_total(&products).to_bits(), accumulated.to_bits());
    }

    #[test]
    fn test_batch_total_matches_sum_of_singles() {
        let products = [
            Product::new(500.0, 2),
            Product::new(5.0, 100),
            Product::new(0.1, 7),
            Product::new(333.33, 3),
            Product::new(1000.0, 1),
        ];

        let mut expected = 0.0;
        for product in &products {
            expected += discounted_price(product);
        }

        assert_eq!(batch_total(&products), expected);
    }
}
