use crate::domain::product::Product;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CatalogRow<'a> {
    name: &'a str,
    price: String,
    quantity: u32,
    seller: u32,
}

const HEADER: [&str; 4] = ["name", "price", "quantity", "seller"];

/// Writes the product catalog as CSV: `name,price,quantity,seller`.
///
/// The header row is always written, so an empty catalog is still a valid file.
pub struct CatalogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CatalogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }

    pub fn write_catalog<'a>(
        &mut self,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for product in products {
            self.writer.serialize(CatalogRow {
                name: &product.name,
                price: product.price.to_string(),
                quantity: product.quantity,
                seller: product.seller_id.0,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
