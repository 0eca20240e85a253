use serde::{Deserialize, Serialize};

/// Timeframe granularity for sampled bar data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrameUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl TimeFrameUnit {
    /// Resolves a free-form unit name to a canonical unit.
    ///
    /// Matching is case-insensitive. Anything outside the recognized set
    /// (including the empty string) falls back to [`TimeFrameUnit::Minute`];
    /// callers that want strictness must validate upstream.
    pub fn resolve(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "minute" => TimeFrameUnit::Minute,
            "hour" => TimeFrameUnit::Hour,
            "day" => TimeFrameUnit::Day,
            "week" => TimeFrameUnit::Week,
            "month" => TimeFrameUnit::Month,
            _ => TimeFrameUnit::Minute,
        }
    }
}

/// A timeframe = amount × unit (e.g., 5-Minute, 1-Day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFrame {
    pub amount: u32,
    pub unit: TimeFrameUnit,
}

impl TimeFrame {
    /// Creates a new timeframe. The amount is taken as-is; providers apply
    /// their own validation rules when the request is issued.
    pub fn new(amount: u32, unit: TimeFrameUnit) -> Self {
        Self { amount, unit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod unit_resolution_tests {
        use super::*;

        #[test]
        fn resolves_all_recognized_units() {
            assert_eq!(TimeFrameUnit::resolve("minute"), TimeFrameUnit::Minute);
            assert_eq!(TimeFrameUnit::resolve("hour"), TimeFrameUnit::Hour);
            assert_eq!(TimeFrameUnit::resolve("day"), TimeFrameUnit::Day);
            assert_eq!(TimeFrameUnit::resolve("week"), TimeFrameUnit::Week);
            assert_eq!(TimeFrameUnit::resolve("month"), TimeFrameUnit::Month);
        }

        #[test]
        fn resolution_is_case_insensitive() {
            assert_eq!(TimeFrameUnit::resolve("Minute"), TimeFrameUnit::Minute);
            assert_eq!(TimeFrameUnit::resolve("HOUR"), TimeFrameUnit::Hour);
            assert_eq!(TimeFrameUnit::resolve("dAy"), TimeFrameUnit::Day);
            assert_eq!(TimeFrameUnit::resolve("WeEk"), TimeFrameUnit::Week);
            assert_eq!(TimeFrameUnit::resolve("MONTH"), TimeFrameUnit::Month);
        }

        #[test]
        fn unrecognized_unit_falls_back_to_minute() {
            assert_eq!(TimeFrameUnit::resolve("fortnight"), TimeFrameUnit::Minute);
            assert_eq!(TimeFrameUnit::resolve("min"), TimeFrameUnit::Minute);
            assert_eq!(TimeFrameUnit::resolve(""), TimeFrameUnit::Minute);
        }
    }

    mod timeframe_creation_tests {
        use super::*;

        #[test]
        fn amount_passes_through_unvalidated() {
            let tf = TimeFrame::new(5, TimeFrameUnit::Minute);
            assert_eq!(tf.amount, 5);
            assert!(matches!(tf.unit, TimeFrameUnit::Minute));

            // Providers own range rules; construction never rejects.
            let tf = TimeFrame::new(97, TimeFrameUnit::Month);
            assert_eq!(tf.amount, 97);
        }
    }
}
