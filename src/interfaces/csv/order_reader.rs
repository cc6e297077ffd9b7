use crate::domain::order::Order;
use crate::error::{MarketError, Result};
use std::io::Read;

/// Reads purchase orders from CSV with a `customer, product, quantity` header.
///
/// `customer` is a numeric customer id, `product` is matched by exact name when
/// the order is executed, and `quantity` must be a non-negative whole number.
/// A row that breaks any of these (a negative or fractional quantity, a missing
/// column, a non-numeric id) yields an `Err` for that row only, so the caller
/// can report it and carry on with the next order. Whether the customer or the
/// product exists is not checked here.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Orders in file order, one `Result` per data row.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MarketError::from))
    }
}
