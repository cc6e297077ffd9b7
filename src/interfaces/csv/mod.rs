pub mod catalog_writer;
pub mod order_reader;
