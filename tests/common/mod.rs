use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` orders of one unit of `product` for `customer`.
pub fn generate_orders_csv(
    path: &Path,
    customer: u32,
    product: &str,
    rows: usize,
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["customer", "product", "quantity"])?;

    let customer = customer.to_string();
    for _ in 0..rows {
        wtr.write_record([customer.as_str(), product, "1"])?;
    }

    wtr.flush()?;
    Ok(())
}
