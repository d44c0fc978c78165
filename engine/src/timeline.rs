//! Life timeline - derives week counts from the settings, with caching.
//!
//! Week counts use whole calendar weeks between dates. The expectancy end
//! date is built with calendar month arithmetic, so "+1 year" lands on the
//! same month/day a year later and short target months clamp to their last
//! day, matching the host calendar rather than a fixed 52-weeks/year
//! approximation.

use std::sync::Mutex;

use chrono::{DateTime, Days, Duration, Local, Months, NaiveDate};

use crate::settings::LifeSettings;

/// Cached weeks-lived values are honored for this long.
pub const WEEKS_LIVED_CACHE_SECS: i64 = 3600;

// ============================================================================
// Cache
// ============================================================================

#[derive(Debug, Default)]
struct TimelineCache {
    total_weeks: Option<i64>,
    weeks_lived: Option<WeeksLivedEntry>,
}

/// Weeks lived plus the instant it was computed. Stored and read as a unit
/// behind the cache mutex so readers never see a half-updated pair.
#[derive(Debug, Clone, Copy)]
struct WeeksLivedEntry {
    weeks: i64,
    computed_at: DateTime<Local>,
}

// ============================================================================
// Timeline
// ============================================================================

/// Owns the settings record and answers week-count queries.
///
/// All reads take `&self`; the cache lives behind its own mutex so the
/// desktop shell can share a timeline across its command handlers.
pub struct LifeTimeline {
    settings: LifeSettings,
    cache: Mutex<TimelineCache>,
}

impl LifeTimeline {
    pub fn new(settings: LifeSettings) -> Self {
        Self {
            settings,
            cache: Mutex::new(TimelineCache::default()),
        }
    }

    pub fn settings(&self) -> &LifeSettings {
        &self.settings
    }

    /// The single mutation entry point. Every settings change goes through
    /// here so the caches can never survive a stale record.
    pub fn set_settings(&mut self, settings: LifeSettings) {
        self.settings = settings;
        self.invalidate();
    }

    /// Drop both cached week counts. Idempotent.
    pub fn invalidate(&self) {
        let mut cache = self.cache.lock().unwrap();
        *cache = TimelineCache::default();
    }

    /// Expected end-of-life date: birth plus years, then months, then weeks.
    /// A step that would leave the representable date range is skipped.
    pub fn expectancy_end_date(&self) -> NaiveDate {
        let s = &self.settings;
        let mut end = s.birth_date;

        if let Some(date) = s
            .expectancy_years
            .checked_mul(12)
            .and_then(|months| end.checked_add_months(Months::new(months)))
        {
            end = date;
        }
        if let Some(date) = end.checked_add_months(Months::new(s.expectancy_months)) {
            end = date;
        }
        if let Some(date) = end.checked_add_days(Days::new(u64::from(s.expectancy_weeks) * 7)) {
            end = date;
        }

        end
    }

    /// Whole weeks from birth to the expectancy end date, floored at 0.
    /// Cached until [`LifeTimeline::invalidate`]; the inputs only change
    /// through [`LifeTimeline::set_settings`].
    pub fn total_weeks(&self) -> i64 {
        let mut cache = self.cache.lock().unwrap();
        if let Some(total) = cache.total_weeks {
            return total;
        }

        let total = weeks_between(self.settings.birth_date, self.expectancy_end_date()).max(0);
        cache.total_weeks = Some(total);
        total
    }

    /// Whole weeks from birth to `now`, floored at 0.
    ///
    /// The value changes continuously in reality but is only recomputed once
    /// the previous computation is over an hour old, so UI-tick readers stay
    /// cheap. A read after the window refreshes both value and timestamp.
    pub fn weeks_lived_as_of(&self, now: DateTime<Local>) -> i64 {
        let mut cache = self.cache.lock().unwrap();
        if let Some(entry) = cache.weeks_lived {
            let age = now.signed_duration_since(entry.computed_at);
            if age < Duration::seconds(WEEKS_LIVED_CACHE_SECS) {
                return entry.weeks;
            }
        }

        let weeks = weeks_between(self.settings.birth_date, now.date_naive()).max(0);
        cache.weeks_lived = Some(WeeksLivedEntry {
            weeks,
            computed_at: now,
        });
        weeks
    }

    /// `total_weeks - weeks_lived`, floored at 0. Derived on every call.
    pub fn weeks_remaining(&self, now: DateTime<Local>) -> i64 {
        (self.total_weeks() - self.weeks_lived_as_of(now)).max(0)
    }

    /// Share of the expectancy already lived, in percent. 0.0 when the
    /// expectancy horizon is empty.
    pub fn percent_lived(&self, now: DateTime<Local>) -> f64 {
        let total = self.total_weeks();
        if total <= 0 {
            return 0.0;
        }
        self.weeks_lived_as_of(now) as f64 / total as f64 * 100.0
    }

    /// True once the lived weeks reach the expectancy horizon.
    pub fn has_outlived(&self, now: DateTime<Local>) -> bool {
        self.weeks_lived_as_of(now) >= self.total_weeks()
    }
}

// ============================================================================
// Week arithmetic
// ============================================================================

/// Whole calendar weeks from `start` to `end` (negative when `end` precedes
/// `start`).
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_weeks()
}

/// `date` plus a whole number of calendar weeks, or `None` when the result
/// leaves the representable date range.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_weeks(weeks)?)
}
