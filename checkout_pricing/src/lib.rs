pub mod order;
pub mod pricing;
pub mod receipt;

pub use order::{CheckoutRequest, DeliveryAddress, FulfillmentType, LineItem};
pub use pricing::{CheckoutError, DeliveryDetails, PriceOrderInteractor, PricedOrder};
pub use receipt::format_cents;
