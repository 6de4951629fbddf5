//! Interchangeable pricing strategies.
//!
//! New discounts are added by implementing [`DiscountStrategy`]; existing strategies and
//! [`Product`] never change. Strategies are pure: they compute a price and leave the
//! product untouched.

use tracing::warn;

use crate::domain::Product;

pub trait DiscountStrategy {
    /// Price after the discount, given the undiscounted price.
    fn discounted_price(&self, price: f64) -> f64;

    /// Text appended after the product name in discount reports.
    fn report_suffix(&self) -> &'static str {
        ""
    }

    fn apply_discount(&self, product: &Product) -> f64 {
        self.discounted_price(product.price)
    }
}

/// Takes a percentage off the price. Values outside `0..=100` are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    pub percentage: f64,
}

impl PercentageDiscount {
    pub fn new(percentage: f64) -> Self {
        if !(0.0..=100.0).contains(&percentage) {
            warn!(percentage, "Percentage discount outside 0..=100");
        }
        Self { percentage }
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn discounted_price(&self, price: f64) -> f64 {
        price * (1.0 - self.percentage / 100.0)
    }
}

/// Subtracts a fixed amount, never going below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAmountDiscount {
    pub amount: f64,
}

impl FixedAmountDiscount {
    pub fn new(amount: f64) -> Self {
        if amount < 0.0 {
            warn!(amount, "Negative fixed discount raises the price");
        }
        Self { amount }
    }
}

impl DiscountStrategy for FixedAmountDiscount {
    fn discounted_price(&self, price: f64) -> f64 {
        (price - self.amount).max(0.0)
    }

    fn report_suffix(&self) -> &'static str {
        " with fixed discount"
    }
}

/// Average unit price when a pair is bought and one unit is free.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuyOneGetOneFree;

impl DiscountStrategy for BuyOneGetOneFree {
    fn discounted_price(&self, price: f64) -> f64 {
        price / 2.0
    }

    fn report_suffix(&self) -> &'static str {
        " with BOGO offer"
    }
}

/// Formats `Discounted price for {name}{suffix}: ${price:.2}` for each product.
pub fn discount_report<'a>(
    strategy: &'a dyn DiscountStrategy,
    products: &'a [Product],
) -> impl Iterator<Item = String> + 'a {
    products.iter().map(move |product| {
        format!(
            "Discounted price for {}{}: ${:.2}",
            product.name,
            strategy.report_suffix(),
            strategy.apply_discount(product)
        )
    })
}
