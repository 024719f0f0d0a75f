//! Application clock.
//!
//! Record timestamps are wall-clock times in the configured application
//! timezone (`APP_TIMEZONE`), not UTC instants. The clock is built once at
//! startup and handed to the record service.

use chrono::{SubsecRound, Utc};
use chrono_tz::Tz;

use crate::types::LocalTimestamp;

/// Timezone used when `APP_TIMEZONE` is not set.
pub const DEFAULT_TIMEZONE: Tz = Tz::UTC;

/// Produces timestamps in a fixed IANA timezone.
#[derive(Debug, Clone, Copy)]
pub struct AppClock {
    tz: Tz,
}

impl AppClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Build a clock from an IANA zone name such as `Africa/Lagos`.
    pub fn from_zone_name(name: &str) -> Result<Self, String> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|e| format!("Unknown timezone '{name}': {e}"))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Current wall-clock time in the application timezone, truncated to
    /// the microsecond precision of a Postgres `TIMESTAMP`.
    pub fn now(&self) -> LocalTimestamp {
        Utc::now()
            .with_timezone(&self.tz)
            .naive_local()
            .trunc_subsecs(6)
    }
}

impl Default for AppClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}
