use anyhow::Context;
use checkout_pricing::{
    format_cents, CheckoutError, CheckoutRequest, DeliveryAddress, FulfillmentType, LineItem,
    PriceOrderInteractor,
};
use clap::Parser;
use delivery_zones::config::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "delivery_quote")]
#[command(about = "Quote delivery for an address and price an order")]
struct Cli {
    #[arg(long, default_value = "")]
    line1: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    postal_code: String,
    /// `<name>:<unit price cents>:<quantity>`, repeatable
    #[arg(long = "item")]
    items: Vec<LineItem>,
    #[arg(long, default_value_t = false)]
    pickup: bool,
    #[arg(long, default_value = "configuration")]
    config_dir: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    shared_kernel::tracing::config_telemetry("delivery_quote")?;
    let cli = Cli::parse();

    let settings = Settings::from_directory(&cli.config_dir)?;
    let quoter = settings
        .delivery
        .quoter()
        .context("Failed to set up delivery quoting")?;

    if cli.items.is_empty() {
        return Ok(match quoter.quote(&cli.line1, &cli.city, &cli.postal_code) {
            Some(quote) => {
                println!("Service area: {}", quote.area.label);
                println!("Delivery: {}", format_cents(quote.fee_cents));
                let tax_cents = settings
                    .delivery
                    .tax_rate_basis_points
                    .tax_on(quote.fee_cents)
                    .context("Delivery fee is too large to tax")?;
                println!("Tax on delivery: {}", format_cents(tax_cents));
                println!("ETA: {}", quote.eta_text);
                ExitCode::SUCCESS
            }
            None => {
                println!("Delivery is available to: {}", quoter.areas().summarize());
                ExitCode::FAILURE
            }
        });
    }

    let request = CheckoutRequest {
        fulfillment: if cli.pickup {
            FulfillmentType::Pickup
        } else {
            FulfillmentType::Delivery
        },
        address: DeliveryAddress {
            line1: cli.line1,
            city: cli.city,
            postal_code: cli.postal_code,
            ..Default::default()
        },
        items: cli.items,
    };

    let interactor =
        PriceOrderInteractor::new(quoter).with_tax_rate(settings.delivery.tax_rate_basis_points);
    match interactor.price_order(&request) {
        Ok(order) => {
            order.summary_lines().iter().for_each(|line| println!("{line}"));
            Ok(ExitCode::SUCCESS)
        }
        Err(
            err @ (CheckoutError::OutsideDeliveryZone(_)
            | CheckoutError::MissingDeliveryFields(_)
            | CheckoutError::AmountTooLarge),
        ) => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("Failed to price order"),
    }
}
