use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
/// BusinessDateTime stores the instant as `DateTime<UTC>` and renders it in the
/// timezone the business operates from.
pub struct BusinessDateTime {
    instant: DateTime<Utc>,
    timezone: Tz,
}

impl BusinessDateTime {
    pub fn now_in(timezone: Tz) -> Self {
        Self::from_utc(Utc::now(), timezone)
    }

    pub fn from_utc(instant: DateTime<Utc>, timezone: Tz) -> Self {
        Self { instant, timezone }
    }

    /// Interprets a wall-clock reading taken in `timezone`.
    /// Ambiguous and skipped readings (DST transitions) are rejected.
    pub fn from_local(value: NaiveDateTime, timezone: Tz) -> Result<Self, String> {
        timezone
            .from_local_datetime(&value)
            .single()
            .ok_or_else(|| format!("Failed to convert {value} to the {timezone} timezone"))
            .map(|date_time| Self::from_utc(date_time.with_timezone(&Utc), timezone))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn to_date_time(&self) -> DateTime<Tz> {
        self.timezone.from_utc_datetime(&self.instant.naive_utc())
    }

    pub fn date(&self) -> NaiveDate {
        self.to_date_time().date_naive()
    }

    pub fn hour(&self) -> u32 {
        self.to_date_time().hour()
    }

    pub fn next_day(&self) -> NaiveDate {
        self.date() + Duration::days(1)
    }
}

impl From<BusinessDateTime> for DateTime<Utc> {
    fn from(value: BusinessDateTime) -> Self {
        value.instant
    }
}

/// Source of the current time. Everything that depends on "now" takes one of
/// these so that tests can pin the time.
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> BusinessDateTime;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> BusinessDateTime {
        BusinessDateTime::now_in(self.timezone)
    }
}
