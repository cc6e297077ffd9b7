use crate::domain::customer::Receipt;
use crate::domain::marketplace::Marketplace;
use crate::domain::order::Order;
use crate::error::{MarketError, Result};
use tracing::{debug, info, warn};

/// Processes orders against a marketplace.
///
/// `Checkout` owns the marketplace for the duration of a run. Each order is
/// resolved by product name and executed as a single purchase; a rejected order
/// leaves the marketplace unchanged and does not stop later orders.
pub struct Checkout {
    marketplace: Marketplace,
}

impl Checkout {
    pub fn new(marketplace: Marketplace) -> Self {
        Self { marketplace }
    }

    pub fn marketplace(&self) -> &Marketplace {
        &self.marketplace
    }

    /// Executes one order and reports what happened.
    pub fn process_order(&mut self, order: &Order) -> Result<Receipt> {
        debug!(
            customer = %order.customer,
            product = %order.product,
            quantity = order.quantity,
            "processing order"
        );

        let result = self.purchase(order);
        match &result {
            Ok(receipt) => info!(
                customer = %order.customer,
                product = %receipt.product,
                quantity = receipt.quantity,
                cost = %receipt.cost,
                method = %receipt.payment_method,
                remaining = %receipt.remaining_balance,
                "purchase completed"
            ),
            Err(e) => warn!(
                customer = %order.customer,
                product = %order.product,
                quantity = order.quantity,
                error = %e,
                "purchase rejected"
            ),
        }
        result
    }

    fn purchase(&mut self, order: &Order) -> Result<Receipt> {
        let product_id = self
            .marketplace
            .find_product(&order.product)
            .ok_or_else(|| MarketError::ProductNotFound(order.product.clone()))?;
        self.marketplace
            .purchase(order.customer, product_id, order.quantity)
    }

    /// Consumes the checkout and returns the final state of the marketplace.
    pub fn into_marketplace(self) -> Marketplace {
        self.marketplace
    }
}
