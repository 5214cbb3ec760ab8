use chrono::NaiveDate;
use shared_kernel::business_date_time::BusinessDateTime;

/// Orders placed before this hour go out on the same day.
pub const ORDER_CUTOFF_HOUR: u32 = 12;

pub const SAME_DAY_ETA: &str = "Arrives today between 4–5 PM";
pub const NEXT_DAY_ETA: &str = "Arrives by 1 PM tomorrow";

/// Only the hour of `now`, read in the business timezone, is considered.
pub fn delivery_eta_text(now: &BusinessDateTime) -> &'static str {
    if now.hour() < ORDER_CUTOFF_HOUR {
        SAME_DAY_ETA
    } else {
        NEXT_DAY_ETA
    }
}

pub fn estimate_delivery_date(now: &BusinessDateTime) -> NaiveDate {
    if now.hour() < ORDER_CUTOFF_HOUR {
        now.date()
    } else {
        now.next_day()
    }
}
