//! Application layer that drives orders through the marketplace.
//!
//! `Checkout` is the entry point used by the binary: it owns the marketplace
//! and runs each order as one purchase, logging the outcome.

pub mod checkout;
