use checkout_pricing::{
    CheckoutRequest, DeliveryAddress, FulfillmentType, LineItem, PriceOrderInteractor,
};
use chrono::NaiveDate;
use chrono_tz::America::Edmonton;
use delivery_zones::{DeliveryQuoter, ServiceAreas};
use shared_kernel::business_date_time::{BusinessDateTime, MockClock};
use std::sync::Arc;

fn interactor_at(hour: u32, minute: u32) -> PriceOrderInteractor {
    let mut clock = MockClock::new();
    clock.expect_now().returning(move || {
        let naive = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        BusinessDateTime::from_local(naive, Edmonton).unwrap()
    });
    PriceOrderInteractor::new(DeliveryQuoter::new(
        Arc::new(ServiceAreas::storefront_defaults()),
        Arc::new(clock),
    ))
}

fn delivery_to(
    line1: &str,
    city: &str,
    postal_code: &str,
    items: Vec<LineItem>,
) -> CheckoutRequest {
    CheckoutRequest {
        fulfillment: FulfillmentType::Delivery,
        address: DeliveryAddress {
            line1: line1.to_string(),
            city: city.to_string(),
            postal_code: postal_code.to_string(),
            ..Default::default()
        },
        items,
    }
}

fn item(product_name: &str, unit_price_cents: u64, quantity: u32) -> LineItem {
    LineItem {
        product_name: product_name.to_string(),
        unit_price_cents,
        quantity,
    }
}

#[test]
fn test_morning_delivery_to_st_albert_is_taxed_on_fee() {
    let request = delivery_to(
        "123 Any St",
        "St. Albert",
        "T5A1A1",
        vec![item("Ribeye", 2500, 2), item("Ground Beef", 1250, 4)],
    );

    let order = interactor_at(10, 0).price_order(&request).unwrap();

    assert_eq!(order.subtotal_cents, 10_000);
    assert_eq!(order.delivery_fee_cents, 2_000);
    assert_eq!(order.tax_cents, 600);
    assert_eq!(order.total_cents, 12_600);

    let delivery = order.delivery.unwrap();
    assert_eq!(delivery.service_area.as_str(), "St. Albert");
    assert_eq!(delivery.eta_text, "Arrives today between 4–5 PM");
    assert_eq!(
        delivery.estimated_delivery_date,
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    );
}

#[test]
fn test_afternoon_delivery_rolls_to_next_day() {
    let request = delivery_to(
        "88 Sample Ave",
        "Strathcona County",
        "T8A 3C1",
        vec![item("Brisket", 999, 1)],
    );

    let order = interactor_at(12, 30).price_order(&request).unwrap();

    assert_eq!(order.delivery_fee_cents, 2_500);
    // 5% of 34.99 is 1.7495
    assert_eq!(order.tax_cents, 175);
    assert_eq!(order.total_cents, 999 + 2_500 + 175);

    let delivery = order.delivery.unwrap();
    assert_eq!(delivery.service_area.as_str(), "Sherwood Park");
    assert_eq!(delivery.eta_text, "Arrives by 1 PM tomorrow");
    assert_eq!(
        delivery.estimated_delivery_date,
        NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
    );
}

#[test]
fn test_delivery_summary_lists_fee_and_eta() {
    let request = delivery_to(
        "4 Rue Leduc",
        "Leduc",
        "T9E 7A2",
        vec![item("Short Ribs", 1800, 1)],
    );

    let order = interactor_at(9, 0).price_order(&request).unwrap();

    assert_eq!(
        order.summary_lines(),
        vec![
            "Fulfillment: Delivery",
            "Service area: Leduc",
            "ETA: Arrives today between 4–5 PM",
            "Estimated delivery: 2026-02-01",
            "",
            "Items:",
            "- Short Ribs x1: $18.00",
            "",
            "Subtotal: $18.00",
            "Delivery: $35.00",
            "Tax: $2.65",
            "Total: $55.65",
        ]
    );
}

#[test]
fn test_pricing_is_repeatable() {
    let request = delivery_to(
        "7 Church Rd",
        "Spruce Grove",
        "T7X 0B5",
        vec![item("Sausages", 899, 3)],
    );
    let interactor = interactor_at(11, 59);

    assert_eq!(
        interactor.price_order(&request).unwrap(),
        interactor.price_order(&request).unwrap()
    );
}

#[test]
fn test_checkout_request_deserializes_from_storefront_payload() {
    let payload = r#"{
        "fulfillment": "delivery",
        "address": {"line1": "12 Main St", "city": "Leduc", "postal_code": "T9E 7A2"},
        "items": [{"product_name": "Ribeye", "unit_price_cents": 2899, "quantity": 1}]
    }"#;

    let request: CheckoutRequest = serde_json::from_str(payload).unwrap();

    assert_eq!(request.fulfillment, FulfillmentType::Delivery);
    assert_eq!(request.address.line2, "");
    let order = interactor_at(9, 0).price_order(&request).unwrap();
    assert_eq!(order.delivery_fee_cents, 3_500);
}
