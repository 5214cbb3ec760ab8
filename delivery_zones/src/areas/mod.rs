mod matching;
mod normalize;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use shared_kernel::{non_empty_string, string_key};
use std::collections::HashSet;
use thiserror::Error;

string_key!(AreaKey);
non_empty_string!(AreaLabel);

/// A named zone with a flat delivery fee. An address belongs to the zone when one
/// of `city_keywords` appears in its city or first address line, or when its
/// postal code starts with one of `postal_prefixes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryArea {
    pub key: AreaKey,
    pub label: AreaLabel,
    pub fee_cents: u64,
    pub city_keywords: Vec<String>,
    pub postal_prefixes: Vec<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServiceAreasError {
    #[error("At least one delivery area must be configured")]
    NoAreas,
    #[error("Delivery area key {0} is declared more than once")]
    DuplicateKey(AreaKey),
    #[error("Delivery area {0} has a blank city keyword")]
    BlankKeyword(AreaKey),
    #[error("Delivery area {0} has a blank postal prefix")]
    BlankPostalPrefix(AreaKey),
}

/// The ordered list of areas the business delivers to.
///
/// Order matters: an address is assigned to the first area it matches, so when
/// two areas overlap the one declared earlier wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAreas {
    areas: Vec<DeliveryArea>,
}

impl DeliveryArea {
    /// Keywords are matched against normalized address text, so they are
    /// normalized the same way. `"St. Albert"` is stored as `"st albert"`.
    fn with_normalized_keywords(self) -> Self {
        Self {
            city_keywords: self
                .city_keywords
                .iter()
                .map(|keyword| normalize::normalize_text(keyword))
                .unique()
                .collect(),
            ..self
        }
    }
}

impl ServiceAreas {
    pub fn new(areas: Vec<DeliveryArea>) -> Result<Self, ServiceAreasError> {
        if areas.is_empty() {
            return Err(ServiceAreasError::NoAreas);
        }
        let areas = areas
            .into_iter()
            .map(DeliveryArea::with_normalized_keywords)
            .collect::<Vec<_>>();

        let mut seen_keys = HashSet::new();
        for area in areas.iter() {
            if !seen_keys.insert(&area.key) {
                return Err(ServiceAreasError::DuplicateKey(area.key.clone()));
            }
            // a blank keyword is a substring of every address
            if area.city_keywords.iter().any(|keyword| keyword.is_empty()) {
                return Err(ServiceAreasError::BlankKeyword(area.key.clone()));
            }
            if area
                .postal_prefixes
                .iter()
                .any(|prefix| normalize::normalize_postal_code(prefix).is_empty())
            {
                return Err(ServiceAreasError::BlankPostalPrefix(area.key.clone()));
            }
        }

        Ok(Self { areas })
    }

    /// The areas served by the storefront around Edmonton.
    pub fn storefront_defaults() -> Self {
        fn area(
            key: &str,
            label: &str,
            fee_cents: u64,
            city_keywords: &[&str],
            postal_prefixes: &[&str],
        ) -> DeliveryArea {
            DeliveryArea {
                key: key.into(),
                label: AreaLabel(label.to_owned()),
                fee_cents,
                city_keywords: city_keywords.iter().map(|k| k.to_string()).collect(),
                postal_prefixes: postal_prefixes.iter().map(|p| p.to_string()).collect(),
            }
        }

        Self {
            areas: vec![
                area(
                    "st_albert",
                    "St. Albert",
                    2000,
                    &["st albert", "st. albert", "saint albert"],
                    &["T8N", "T8T"],
                ),
                area(
                    "sherwood_park",
                    "Sherwood Park",
                    2500,
                    &["sherwood park", "sherwood"],
                    &["T8A", "T8B", "T8H"],
                ),
                area(
                    "spruce_grove",
                    "Spruce Grove",
                    3500,
                    &["spruce grove"],
                    &["T7X"],
                ),
                area("leduc", "Leduc", 3500, &["leduc"], &["T9E"]),
            ]
            .into_iter()
            .map(DeliveryArea::with_normalized_keywords)
            .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeliveryArea> {
        self.areas.iter()
    }

    pub fn find(&self, key: &AreaKey) -> Option<&DeliveryArea> {
        self.areas.iter().find(|area| &area.key == key)
    }

    /// `"St. Albert ($20), Sherwood Park ($25), ..."` in declaration order.
    /// Fees are shown in whole dollars, truncating any cents.
    pub fn summarize(&self) -> String {
        self.areas
            .iter()
            .map(|area| format!("{} (${})", area.label, area.fee_cents / 100))
            .join(", ")
    }
}
