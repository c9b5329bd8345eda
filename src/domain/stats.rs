use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::product::Product;

/// Placeholder shown for name fields when the result set is empty.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Aggregate figures derived from one listing's result set.
///
/// Never persisted; recomputed on every read, over the filtered set rather
/// than the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStats {
    pub total_count: usize,
    pub average_price: f64,
    pub cheapest_name: String,
    pub cheapest_price: f64,
    pub most_expensive_name: String,
    pub most_expensive_price: f64,
    pub latest_product_name: String,
    pub latest_product_date: NaiveDateTime,
}

impl Default for ProductStats {
    /// The sentinel value reported for an empty result set.
    fn default() -> Self {
        Self {
            total_count: 0,
            average_price: 0.0,
            cheapest_name: EMPTY_PLACEHOLDER.to_string(),
            cheapest_price: 0.0,
            most_expensive_name: EMPTY_PLACEHOLDER.to_string(),
            most_expensive_price: 0.0,
            latest_product_name: EMPTY_PLACEHOLDER.to_string(),
            latest_product_date: NaiveDateTime::default(),
        }
    }
}

impl ProductStats {
    /// Reduce an ordered result set to its aggregate figures.
    ///
    /// Ties on price or creation time resolve to the first element in the
    /// given order, so the caller's sort (and its id tie-break) carries
    /// through to the reported extremes.
    pub fn compute(products: &[Product]) -> Self {
        let Some(first) = products.first() else {
            return Self::default();
        };

        let mut total = first.price;
        let mut cheapest = first;
        let mut most_expensive = first;
        let mut latest = first;

        for product in &products[1..] {
            total += product.price;
            if product.price < cheapest.price {
                cheapest = product;
            }
            if product.price > most_expensive.price {
                most_expensive = product;
            }
            if product.created_at > latest.created_at {
                latest = product;
            }
        }

        Self {
            total_count: products.len(),
            average_price: total / products.len() as f64,
            cheapest_name: cheapest.name.clone(),
            cheapest_price: cheapest.price,
            most_expensive_name: most_expensive.name.clone(),
            most_expensive_price: most_expensive.price,
            latest_product_name: latest.name.clone(),
            latest_product_date: latest.created_at,
        }
    }
}
