use crate::domain::customer::Receipt;
use crate::domain::product::Product;
use crate::error::{MarketError, PurchaseError, Result};
use std::io::Write;

/// Prints the human-readable product listing.
pub fn write_catalog<'a, W: Write>(
    out: &mut W,
    products: impl IntoIterator<Item = &'a Product>,
) -> Result<()> {
    writeln!(out, "Available products:")?;
    for product in products {
        writeln!(
            out,
            "- {}, Price: {}, Quantity: {}",
            product.name, product.price, product.quantity
        )?;
    }
    Ok(())
}

/// Prints the receipt of a successful purchase, or a one-line failure.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Result<Receipt>) -> Result<()> {
    match outcome {
        Ok(receipt) => writeln!(out, "{receipt}")?,
        Err(MarketError::Purchase(PurchaseError::NoPaymentMethod)) => {
            writeln!(out, "Payment method not set.")?
        }
        Err(e) => writeln!(out, "Purchase failed: {e}")?,
    }
    Ok(())
}
