use serde::{Deserialize, Serialize};

/// A flat tax rate in basis points (1/100 of a percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate {
    basis_points: u32,
}

impl TaxRate {
    /// 5% goods and services tax.
    pub const GST: TaxRate = TaxRate::from_basis_points(500);

    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self { basis_points }
    }

    pub fn basis_points(&self) -> u32 {
        self.basis_points
    }

    /// Tax on `taxable_cents`, rounded to the nearest cent with halves rounded up.
    /// `None` when the tax itself does not fit in a `u64`, which takes a rate
    /// above 100%.
    pub fn tax_on(&self, taxable_cents: u64) -> Option<u64> {
        u64::try_from(self.scaled_tax(u128::from(taxable_cents))).ok()
    }

    fn scaled_tax(&self, taxable_cents: u128) -> u128 {
        (taxable_cents * u128::from(self.basis_points) + 5_000) / 10_000
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::GST
    }
}

/// Tax owed on an order: 5% of the subtotal plus the delivery fee.
/// Pass `0` as the fee for pickup orders.
pub fn calculate_tax_cents(subtotal_cents: u64, delivery_fee_cents: u64) -> u64 {
    let taxable_cents = u128::from(subtotal_cents) + u128::from(delivery_fee_cents);
    // 5% of twice u64::MAX is well inside u64
    u64::try_from(TaxRate::GST.scaled_tax(taxable_cents)).unwrap_or(u64::MAX)
}
