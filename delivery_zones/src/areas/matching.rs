use super::normalize::{normalize_postal_code, normalize_text};
use super::{DeliveryArea, ServiceAreas};

struct NormalizedAddress {
    address_line1: String,
    city: String,
    postal_code: String,
}

impl NormalizedAddress {
    fn new(address_line1: &str, city: &str, postal_code: &str) -> Self {
        Self {
            address_line1: normalize_text(address_line1),
            city: normalize_text(city),
            postal_code: normalize_postal_code(postal_code),
        }
    }
}

impl DeliveryArea {
    fn matches(&self, address: &NormalizedAddress) -> bool {
        let keyword_hit = self
            .city_keywords
            .iter()
            .any(|keyword| address.city.contains(keyword.as_str()))
            || self
                .city_keywords
                .iter()
                .any(|keyword| address.address_line1.contains(keyword.as_str()));
        if keyword_hit {
            return true;
        }

        !address.postal_code.is_empty()
            && self
                .postal_prefixes
                .iter()
                .any(|prefix| address.postal_code.starts_with(&normalize_postal_code(prefix)))
    }
}

impl ServiceAreas {
    /// Finds the first area, in declaration order, that the address falls into.
    ///
    /// Inputs are free text as typed by the customer. Returns `None` when every
    /// field is blank or no area matches.
    pub fn match_delivery_area(
        &self,
        address_line1: &str,
        city: &str,
        postal_code: &str,
    ) -> Option<&DeliveryArea> {
        if [address_line1, city, postal_code]
            .iter()
            .all(|field| field.trim().is_empty())
        {
            return None;
        }

        let address = NormalizedAddress::new(address_line1, city, postal_code);
        let area = self.areas.iter().find(|area| area.matches(&address));
        match area {
            Some(area) => tracing::debug!(area = %area.key, "address matched delivery area"),
            None => tracing::debug!("address is outside all delivery areas"),
        }
        area
    }
}
