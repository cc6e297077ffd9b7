use clap::{Parser, ValueEnum};
use marketplace_sim::application::checkout::Checkout;
use marketplace_sim::domain::order::Order;
use marketplace_sim::error::Result as MarketResult;
use marketplace_sim::infrastructure::scenario::Scenario;
use marketplace_sim::interfaces::console;
use marketplace_sim::interfaces::csv::catalog_writer::CatalogWriter;
use marketplace_sim::interfaces::csv::order_reader::OrderReader;
use marketplace_sim::logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Catalog, purchase outcomes, then the catalog again
    Text,
    /// Final catalog only, as CSV
    Csv,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (customer, product, quantity). Replaces the scenario's orders.
    orders: Option<PathBuf>,

    /// Scenario JSON file. Defaults to the built-in demonstration.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let scenario = match &cli.scenario {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            Scenario::from_reader(file).into_diagnostic()?
        }
        None => Scenario::demo().into_diagnostic()?,
    };
    let mut checkout = Checkout::new(scenario.build().into_diagnostic()?);

    let orders: Box<dyn Iterator<Item = MarketResult<Order>>> = match cli.orders {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            Box::new(OrderReader::new(file).orders())
        }
        None => Box::new(scenario.orders.into_iter().map(Ok)),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let text = cli.format == Format::Text;

    if text {
        console::write_catalog(&mut out, checkout.marketplace().list_products())
            .into_diagnostic()?;
    }

    for order_result in orders {
        match order_result {
            Ok(order) => {
                let outcome = checkout.process_order(&order);
                if text {
                    console::write_outcome(&mut out, &outcome).into_diagnostic()?;
                }
            }
            Err(e) => {
                warn!("Error reading order: {}", e);
            }
        }
    }

    let market = checkout.into_marketplace();
    if text {
        console::write_catalog(&mut out, market.list_products()).into_diagnostic()?;
    } else {
        CatalogWriter::new(&mut out)
            .write_catalog(market.list_products())
            .into_diagnostic()?;
    }
    out.flush().into_diagnostic()?;

    Ok(())
}
