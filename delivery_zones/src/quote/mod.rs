mod eta;

pub use eta::{
    delivery_eta_text, estimate_delivery_date, NEXT_DAY_ETA, ORDER_CUTOFF_HOUR, SAME_DAY_ETA,
};

use crate::areas::{DeliveryArea, ServiceAreas};
use chrono::NaiveDate;
use serde::Serialize;
use shared_kernel::business_date_time::{BusinessDateTime, Clock};
use std::sync::Arc;
use thiserror::Error;

/// Fee and arrival estimate for one address at one point in time.
/// Built fresh for every address change and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryQuote {
    pub area: DeliveryArea,
    pub fee_cents: u64,
    pub eta_text: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryZoneError {
    #[error("Delivery is available to: {supported_areas}. Please adjust your city/postal code.")]
    OutsideServiceAreas { supported_areas: String },
}

impl ServiceAreas {
    pub fn build_delivery_quote(
        &self,
        address_line1: &str,
        city: &str,
        postal_code: &str,
        now: &BusinessDateTime,
    ) -> Option<DeliveryQuote> {
        let area = self.match_delivery_area(address_line1, city, postal_code)?;
        Some(DeliveryQuote {
            area: area.clone(),
            fee_cents: area.fee_cents,
            eta_text: delivery_eta_text(now),
        })
    }

    /// Like [`ServiceAreas::build_delivery_quote`], for callers that cannot
    /// proceed without a quote (placing a delivery order).
    pub fn require_delivery_quote(
        &self,
        address_line1: &str,
        city: &str,
        postal_code: &str,
        now: &BusinessDateTime,
    ) -> Result<DeliveryQuote, DeliveryZoneError> {
        self.build_delivery_quote(address_line1, city, postal_code, now)
            .ok_or_else(|| DeliveryZoneError::OutsideServiceAreas {
                supported_areas: self.summarize(),
            })
    }
}

/// Quotes addresses against a fixed set of areas using the time from `clock`.
#[derive(Clone)]
pub struct DeliveryQuoter {
    areas: Arc<ServiceAreas>,
    clock: Arc<dyn Clock>,
}

impl DeliveryQuoter {
    pub fn new(areas: Arc<ServiceAreas>, clock: Arc<dyn Clock>) -> Self {
        Self { areas, clock }
    }

    pub fn areas(&self) -> &ServiceAreas {
        &self.areas
    }

    pub fn now(&self) -> BusinessDateTime {
        self.clock.now()
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub fn quote(
        &self,
        address_line1: &str,
        city: &str,
        postal_code: &str,
    ) -> Option<DeliveryQuote> {
        self.areas
            .build_delivery_quote(address_line1, city, postal_code, &self.clock.now())
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn require_quote(
        &self,
        address_line1: &str,
        city: &str,
        postal_code: &str,
    ) -> Result<DeliveryQuote, DeliveryZoneError> {
        self.areas
            .require_delivery_quote(address_line1, city, postal_code, &self.clock.now())
    }

    pub fn estimate_delivery_date(&self) -> NaiveDate {
        estimate_delivery_date(&self.clock.now())
    }
}
