use crate::order::{CheckoutRequest, FulfillmentType, LineItem};
use chrono::NaiveDate;
use delivery_zones::quote::estimate_delivery_date;
use delivery_zones::{AreaLabel, DeliveryQuoter, DeliveryZoneError, TaxRate};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("At least one item is required.")]
    EmptyCart,
    #[error("Quantity for {product_name} must be at least 1.")]
    InvalidQuantity { product_name: String },
    #[error("Delivery requires: {}.", .0.join(", "))]
    MissingDeliveryFields(Vec<&'static str>),
    #[error(transparent)]
    OutsideDeliveryZone(#[from] DeliveryZoneError),
    #[error("Order total is too large to process.")]
    AmountTooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryDetails {
    pub service_area: AreaLabel,
    pub eta_text: &'static str,
    pub estimated_delivery_date: NaiveDate,
}

/// Amounts owed for an order, in cents. `total_cents` is always
/// `subtotal_cents + delivery_fee_cents + tax_cents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedOrder {
    pub fulfillment: FulfillmentType,
    pub items: Vec<LineItem>,
    pub subtotal_cents: u64,
    pub delivery_fee_cents: u64,
    pub tax_cents: u64,
    pub total_cents: u64,
    pub delivery: Option<DeliveryDetails>,
}

pub struct PriceOrderInteractor {
    quoter: DeliveryQuoter,
    tax_rate: TaxRate,
}

impl PriceOrderInteractor {
    pub fn new(quoter: DeliveryQuoter) -> Self {
        Self {
            quoter,
            tax_rate: TaxRate::default(),
        }
    }

    pub fn with_tax_rate(self, tax_rate: TaxRate) -> Self {
        Self { tax_rate, ..self }
    }

    #[tracing::instrument(
        err,
        skip(self, request),
        fields(fulfillment = %request.fulfillment, items = request.items.len()),
        level = "info"
    )]
    pub fn price_order(&self, request: &CheckoutRequest) -> Result<PricedOrder, CheckoutError> {
        if request.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if let Some(item) = request.items.iter().find(|item| item.quantity == 0) {
            return Err(CheckoutError::InvalidQuantity {
                product_name: item.product_name.clone(),
            });
        }

        let delivery = match request.fulfillment {
            FulfillmentType::Pickup => None,
            FulfillmentType::Delivery => {
                let missing = request.address.missing_required_fields();
                if !missing.is_empty() {
                    return Err(CheckoutError::MissingDeliveryFields(missing));
                }

                // one reading of the clock so the ETA text and the date agree
                let now = self.quoter.now();
                let quote = self.quoter.areas().require_delivery_quote(
                    &request.address.line1,
                    &request.address.city,
                    &request.address.postal_code,
                    &now,
                )?;
                Some((quote, estimate_delivery_date(&now)))
            }
        };

        let subtotal_cents = request
            .items
            .iter()
            .try_fold(0u64, |subtotal, item| {
                item.total_cents()
                    .and_then(|line_total| subtotal.checked_add(line_total))
            })
            .ok_or(CheckoutError::AmountTooLarge)?;
        let delivery_fee_cents = delivery
            .as_ref()
            .map(|(quote, _)| quote.fee_cents)
            .unwrap_or_default();
        let taxable_cents = subtotal_cents
            .checked_add(delivery_fee_cents)
            .ok_or(CheckoutError::AmountTooLarge)?;
        let tax_cents = self
            .tax_rate
            .tax_on(taxable_cents)
            .ok_or(CheckoutError::AmountTooLarge)?;
        let total_cents = taxable_cents
            .checked_add(tax_cents)
            .ok_or(CheckoutError::AmountTooLarge)?;

        Ok(PricedOrder {
            fulfillment: request.fulfillment,
            items: request.items.clone(),
            subtotal_cents,
            delivery_fee_cents,
            tax_cents,
            total_cents,
            delivery: delivery.map(|(quote, estimated_delivery_date)| DeliveryDetails {
                service_area: quote.area.label,
                eta_text: quote.eta_text,
                estimated_delivery_date,
            }),
        })
    }
}
