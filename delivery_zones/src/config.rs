use crate::areas::{DeliveryArea, ServiceAreas};
use crate::quote::DeliveryQuoter;
use crate::tax::TaxRate;
use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;
use shared_kernel::business_date_time::SystemClock;
use shared_kernel::configuration::{config, config_from_directory};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub delivery: DeliverySettings,
}

#[derive(Debug, Deserialize)]
pub struct DeliverySettings {
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default)]
    pub tax_rate_basis_points: TaxRate,
    /// Declaration order is match precedence.
    pub areas: Vec<DeliveryArea>,
}

fn default_timezone() -> Tz {
    chrono_tz::America::Edmonton
}

impl Settings {
    pub fn parse() -> anyhow::Result<Self> {
        config::<Settings>().context("Failed to deserialize settings to delivery settings")
    }

    pub fn from_directory(configuration_directory: &Path) -> anyhow::Result<Self> {
        config_from_directory::<Settings>(configuration_directory)
            .context("Failed to deserialize settings to delivery settings")
    }
}

impl DeliverySettings {
    pub fn service_areas(&self) -> anyhow::Result<ServiceAreas> {
        ServiceAreas::new(self.areas.clone()).context("Invalid delivery areas in configuration")
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock::new(self.timezone)
    }

    pub fn quoter(&self) -> anyhow::Result<DeliveryQuoter> {
        let areas = self.service_areas()?;
        Ok(DeliveryQuoter::new(Arc::new(areas), Arc::new(self.clock())))
    }
}
