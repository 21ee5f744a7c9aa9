//! Orders-per-day counter shared between the worker and HTTP handlers.

use chrono::{NaiveDate, Utc};
use std::sync::Mutex;

struct Bucket {
    day: NaiveDate,
    count: u64,
}

/// Counts orders for the current UTC day.
///
/// The count rolls over to 0 when an order for a newer day arrives. Orders
/// carrying a date older than the current bucket are counted toward the
/// current bucket anyway: late deliveries should not rewind the display.
pub struct DailyCounter {
    inner: Mutex<Bucket>,
}

impl DailyCounter {
    /// Creates a counter starting at 0 for today.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Bucket {
                day: Utc::now().date_naive(),
                count: 0,
            }),
        }
    }

    /// Records one order for the given day and returns the new daily count.
    ///
    /// A newer day resets the count before recording.
    pub fn record(&self, day: NaiveDate) -> u64 {
        let mut bucket = self.inner.lock().expect("counter mutex poisoned");
        if day > bucket.day {
            bucket.day = day;
            bucket.count = 0;
        }
        bucket.count += 1;
        bucket.count
    }

    /// Returns the current daily count.
    pub fn current(&self) -> u64 {
        self.inner.lock().expect("counter mutex poisoned").count
    }

    /// Returns the day the current count belongs to.
    pub fn day(&self) -> NaiveDate {
        self.inner.lock().expect("counter mutex poisoned").day
    }
}

impl Default for DailyCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_counts_within_one_day() {
        let counter = DailyCounter::new();
        let today = counter.day();

        assert_eq!(counter.record(today), 1);
        assert_eq!(counter.record(today), 2);
        assert_eq!(counter.record(today), 3);
        assert_eq!(counter.current(), 3);
    }

    #[test]
    fn test_resets_on_new_day() {
        let counter = DailyCounter::new();
        let today = counter.day();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

        counter.record(today);
        counter.record(today);
        assert_eq!(counter.record(tomorrow), 1);
        assert_eq!(counter.day(), tomorrow);
        assert_eq!(counter.current(), 1);
    }

    #[test]
    fn test_stale_day_counts_toward_current_bucket() {
        let counter = DailyCounter::new();
        let today = counter.day();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

        counter.record(today);
        assert_eq!(counter.record(yesterday), 2);
        assert_eq!(counter.day(), today);
    }
}
