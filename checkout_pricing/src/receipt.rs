use crate::order::FulfillmentType;
use crate::pricing::PricedOrder;

/// `1234` becomes `"$12.34"`.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

impl PricedOrder {
    /// Receipt style summary of the order, one line per entry.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Fulfillment: {}", self.fulfillment)];

        if let Some(delivery) = &self.delivery {
            lines.push(format!("Service area: {}", delivery.service_area));
            lines.push(format!("ETA: {}", delivery.eta_text));
            lines.push(format!(
                "Estimated delivery: {}",
                delivery.estimated_delivery_date.format("%Y-%m-%d")
            ));
        }

        lines.push(String::new());
        lines.push("Items:".to_string());
        lines.extend(self.items.iter().map(|item| {
            format!(
                "- {} x{}: {}",
                item.product_name,
                item.quantity,
                item.total_cents().map_or_else(|| "-".to_string(), format_cents)
            )
        }));

        lines.push(String::new());
        lines.push(format!("Subtotal: {}", format_cents(self.subtotal_cents)));
        if self.fulfillment == FulfillmentType::Delivery {
            lines.push(format!("Delivery: {}", format_cents(self.delivery_fee_cents)));
        }
        lines.push(format!("Tax: {}", format_cents(self.tax_cents)));
        lines.push(format!("Total: {}", format_cents(self.total_cents)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::format_cents;
    use crate::order::{FulfillmentType, LineItem};
    use crate::pricing::PricedOrder;
    use rstest::rstest;

    #[rstest]
    #[case(0, "$0.00")]
    #[case(5, "$0.05")]
    #[case(1234, "$12.34")]
    #[case(200_000, "$2000.00")]
    fn test_format_cents(#[case] cents: u64, #[case] expected: &str) {
        assert_eq!(format_cents(cents), expected);
    }

    #[test]
    fn test_pickup_summary_has_no_delivery_line() {
        let order = PricedOrder {
            fulfillment: FulfillmentType::Pickup,
            items: vec![LineItem {
                product_name: "Brisket".to_string(),
                unit_price_cents: 4550,
                quantity: 2,
            }],
            subtotal_cents: 9100,
            delivery_fee_cents: 0,
            tax_cents: 455,
            total_cents: 9555,
            delivery: None,
        };

        assert_eq!(
            order.summary_lines(),
            vec![
                "Fulfillment: Pickup",
                "",
                "Items:",
                "- Brisket x2: $91.00",
                "",
                "Subtotal: $91.00",
                "Tax: $4.55",
                "Total: $95.55",
            ]
        );
    }
}
