use kassa_core::{CustomerTotals, OrderRecord, ProductTotals};

use crate::Kassa;

impl Kassa {
    /// Customers by lifetime spend, highest first.
    ///
    /// Orders without an email are not attributed to anyone.
    #[must_use]
    pub fn top_customers(&self, orders: &[OrderRecord], limit: usize) -> Vec<CustomerTotals> {
        let mut ranked = kassa_core::top_customers(orders);
        ranked.truncate(limit);
        ranked
    }

    /// Products by line revenue, highest first.
    #[must_use]
    pub fn top_products(&self, orders: &[OrderRecord], limit: usize) -> Vec<ProductTotals> {
        let mut ranked = kassa_core::top_products(orders);
        ranked.truncate(limit);
        ranked
    }
}
