pub mod areas;
pub mod config;
pub mod quote;
pub mod tax;

pub use areas::{AreaKey, AreaLabel, DeliveryArea, ServiceAreas, ServiceAreasError};
pub use quote::{DeliveryQuote, DeliveryQuoter, DeliveryZoneError};
pub use tax::{calculate_tax_cents, TaxRate};
