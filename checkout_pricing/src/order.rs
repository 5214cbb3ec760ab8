use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentType {
    Pickup,
    Delivery,
}

impl Display for FulfillmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FulfillmentType::Pickup => write!(f, "Pickup"),
            FulfillmentType::Delivery => write!(f, "Delivery"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryAddress {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub postal_code: String,
    pub notes: String,
}

impl DeliveryAddress {
    /// Names of the fields a delivery cannot go without, in form order.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("line1", &self.line1),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_name: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity, `None` if that does not fit in a `u64`.
    pub fn total_cents(&self) -> Option<u64> {
        self.unit_price_cents.checked_mul(u64::from(self.quantity))
    }
}

/// Parses `"<product name>:<unit price in cents>:<quantity>"`.
/// The product name may itself contain colons.
impl FromStr for LineItem {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.rsplitn(3, ':');
        let (Some(quantity), Some(unit_price_cents), Some(product_name)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!(
                "Expected <name>:<unit price cents>:<quantity>, got {value:?}"
            ));
        };

        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(format!("Missing product name in {value:?}"));
        }
        let unit_price_cents = unit_price_cents
            .trim()
            .parse::<u64>()
            .map_err(|err| format!("Invalid unit price in {value:?}: {err}"))?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|err| format!("Invalid quantity in {value:?}: {err}"))?;

        Ok(LineItem {
            product_name: product_name.to_owned(),
            unit_price_cents,
            quantity,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub fulfillment: FulfillmentType,
    #[serde(default)]
    pub address: DeliveryAddress,
    pub items: Vec<LineItem>,
}

#[cfg(test)]
mod tests {
    use super::{DeliveryAddress, LineItem};
    use rstest::rstest;

    #[test]
    fn test_missing_fields_are_listed_in_form_order() {
        let address = DeliveryAddress {
            line1: " ".to_string(),
            city: "Leduc".to_string(),
            ..Default::default()
        };

        assert_eq!(address.missing_required_fields(), vec!["line1", "postal_code"]);
    }

    #[test]
    fn test_line2_and_notes_are_optional() {
        let address = DeliveryAddress {
            line1: "12 Main St".to_string(),
            city: "Leduc".to_string(),
            postal_code: "T9E 7A2".to_string(),
            ..Default::default()
        };

        assert!(address.missing_required_fields().is_empty());
    }

    #[rstest]
    #[case("Ribeye:2899:2", "Ribeye", 2899, 2)]
    #[case(" Ground Beef : 1299 : 3 ", "Ground Beef", 1299, 3)]
    #[case("Box: Family:15000:1", "Box: Family", 15000, 1)]
    fn test_line_item_parsing(
        #[case] input: &str,
        #[case] product_name: &str,
        #[case] unit_price_cents: u64,
        #[case] quantity: u32,
    ) {
        let item = input.parse::<LineItem>().unwrap();
        assert_eq!(item.product_name, product_name);
        assert_eq!(item.unit_price_cents, unit_price_cents);
        assert_eq!(item.quantity, quantity);
    }

    #[rstest]
    #[case("Ribeye")]
    #[case("Ribeye:2899")]
    #[case(":2899:1")]
    #[case("Ribeye:12.99:1")]
    #[case("Ribeye:1299:-1")]
    fn test_malformed_line_items_are_rejected(#[case] input: &str) {
        assert!(input.parse::<LineItem>().is_err());
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            product_name: "Striploin".to_string(),
            unit_price_cents: 3150,
            quantity: 4,
        };
        assert_eq!(item.total_cents(), Some(12_600));
    }

    #[test]
    fn test_line_total_overflow_is_reported() {
        let item = "Whole Cow:18446744073709551615:2".parse::<LineItem>().unwrap();
        assert_eq!(item.total_cents(), None);
    }
}
