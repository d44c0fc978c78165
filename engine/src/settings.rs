//! User settings record shared by the timeline and the desktop shell.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Editing-surface bounds
// ============================================================================

/// Upper bound applied to the years field by the settings editor.
pub const EXPECTANCY_YEARS_MAX: u32 = 120;

/// Upper bound applied to the months field by the settings editor.
pub const EXPECTANCY_MONTHS_MAX: u32 = 12;

/// Upper bound applied to the weeks field by the settings editor.
pub const EXPECTANCY_WEEKS_MAX: u32 = 4;

// ============================================================================
// Settings record
// ============================================================================

/// Birth date plus the configured life expectancy.
///
/// The timeline tolerates any non-negative expectancy values; the editing
/// bounds above are enforced at the editing surface via [`LifeSettings::clamped`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSettings {
    pub birth_date: NaiveDate,
    pub expectancy_years: u32,
    pub expectancy_months: u32,
    pub expectancy_weeks: u32,
}

impl LifeSettings {
    pub fn new(birth_date: NaiveDate, years: u32, months: u32, weeks: u32) -> Self {
        Self {
            birth_date,
            expectancy_years: years,
            expectancy_months: months,
            expectancy_weeks: weeks,
        }
    }

    /// Copy with each expectancy field clamped to its editing bound.
    pub fn clamped(&self) -> Self {
        Self {
            birth_date: self.birth_date,
            expectancy_years: self.expectancy_years.min(EXPECTANCY_YEARS_MAX),
            expectancy_months: self.expectancy_months.min(EXPECTANCY_MONTHS_MAX),
            expectancy_weeks: self.expectancy_weeks.min(EXPECTANCY_WEEKS_MAX),
        }
    }
}

impl Default for LifeSettings {
    fn default() -> Self {
        Self {
            // NaiveDate::default() is 1970-01-01
            birth_date: NaiveDate::default(),
            expectancy_years: 75,
            expectancy_months: 0,
            expectancy_weeks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_caps_each_field() {
        let settings = LifeSettings::new(NaiveDate::default(), 500, 40, 9);
        let clamped = settings.clamped();

        assert_eq!(clamped.expectancy_years, EXPECTANCY_YEARS_MAX);
        assert_eq!(clamped.expectancy_months, EXPECTANCY_MONTHS_MAX);
        assert_eq!(clamped.expectancy_weeks, EXPECTANCY_WEEKS_MAX);
    }

    #[test]
    fn test_clamped_keeps_in_range_values() {
        let settings = LifeSettings::new(NaiveDate::default(), 75, 4, 2);
        assert_eq!(settings.clamped(), settings);
    }
}
