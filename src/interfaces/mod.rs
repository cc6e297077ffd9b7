//! Input and output formats: CSV orders in, catalog and receipts out.

pub mod console;
pub mod csv;
