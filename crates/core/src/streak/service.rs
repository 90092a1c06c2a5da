//! Reading-streak service - consecutive-day streak tracking
//!
//! Tracks discrete "read" events into a [`StreakStats`] record persisted
//! under the `taqwa_tracker_reading_streak` slot. Streak credit is granted
//! at most once per calendar day; item counts accumulate on every call.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use taqwa_domain::constants::{
    DEFAULT_RECENT_ACTIVITY_DAYS, READING_HISTORY_LIMIT, READING_STREAK_KEY,
};
use taqwa_domain::{ReadActivity, ReadItem, StreakStats};

use crate::events::{ChangeNotifier, SubscriptionId};
use crate::slots;
use crate::storage_ports::StateStore;
use crate::time_ports::{Clock, SystemClock};

/// Reading-streak service
///
/// The durable store is the source of truth; the in-memory copy is a cache
/// republished to subscribers after every mutation.
pub struct ReadStreakService {
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    stats: RwLock<StreakStats>,
    changed: ChangeNotifier<StreakStats>,
}

impl ReadStreakService {
    /// Create a service reading calendar days from the UTC system clock.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a service with an injected clock (used by tests to pin dates).
    ///
    /// Loads the persisted record and applies lazy decay: a streak older
    /// than one whole day is shown as broken. The correction lives in the
    /// in-memory projection only and is persisted by the next `track_read`.
    pub fn with_clock(store: Arc<dyn StateStore>, clock: Arc<dyn Clock>) -> Self {
        let mut stats: StreakStats = slots::load_or_default(store.as_ref(), READING_STREAK_KEY);
        decay_if_stale(&mut stats, clock.today());

        Self { store, clock, stats: RwLock::new(stats), changed: ChangeNotifier::new() }
    }

    /// Record `count` items read now, optionally remembering the item itself
    /// for the dashboard's recent list.
    ///
    /// Idempotent per calendar day with respect to streak credit: the first
    /// call of a day moves `current_streak`/`total_days_read`, later calls
    /// only accumulate item counts.
    pub fn track_read(&self, count: u32, item: Option<ReadItem>) {
        let today = self.clock.today();

        // The projection was hydrated from the store at construction and
        // every mutation funnels through this service, so it stays correct
        // even when a persist fails (degraded mode).
        let mut stats = self.stats.read().clone();
        apply_read(&mut stats, today, count, item);

        slots::save(self.store.as_ref(), READING_STREAK_KEY, &stats);
        *self.stats.write() = stats.clone();
        self.changed.notify(&stats);
    }

    /// Overwrite the record with zeroed defaults. Confirmation is a UI
    /// concern; this always resets.
    pub fn reset(&self) {
        let stats = StreakStats::default();
        slots::save(self.store.as_ref(), READING_STREAK_KEY, &stats);
        *self.stats.write() = stats.clone();
        self.changed.notify(&stats);
    }

    /// Current streak statistics (in-memory projection).
    pub fn stats(&self) -> StreakStats {
        self.stats.read().clone()
    }

    /// The last `days` history entries, oldest first. Pure read.
    pub fn recent_activity(&self, days: usize) -> Vec<ReadActivity> {
        let stats = self.stats.read();
        let skip = stats.reading_history.len().saturating_sub(days);
        stats.reading_history.iter().skip(skip).cloned().collect()
    }

    /// The last week of history, the dashboard's default window.
    pub fn recent_week_activity(&self) -> Vec<ReadActivity> {
        self.recent_activity(DEFAULT_RECENT_ACTIVITY_DAYS)
    }

    /// Subscribe to republished streak state.
    pub fn on_change(
        &self,
        listener: impl Fn(&StreakStats) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(listener)
    }

    /// Drop a subscription made with [`Self::on_change`].
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.changed.unsubscribe(id);
    }
}

/// Apply one read event to the record. Pure; `today` is the single date
/// snapshot for the whole computation.
fn apply_read(stats: &mut StreakStats, today: NaiveDate, count: u32, item: Option<ReadItem>) {
    let activity = today_activity(stats, today);
    activity.items_read += count;
    if let Some(item) = item {
        activity.recent_items.push(item);
    }

    stats.total_items_read += count;

    // Streak credit only on the first read of a new day.
    if stats.last_read_date != Some(today) {
        increment_streak(stats, today);
    }
}

/// Find or create today's history entry, evicting the oldest entries once
/// the history exceeds its cap.
fn today_activity(stats: &mut StreakStats, today: NaiveDate) -> &mut ReadActivity {
    let idx = match stats.reading_history.iter().position(|a| a.date == today) {
        Some(idx) => idx,
        None => {
            stats.reading_history.push(ReadActivity::new(today));
            if stats.reading_history.len() > READING_HISTORY_LIMIT {
                let excess = stats.reading_history.len() - READING_HISTORY_LIMIT;
                stats.reading_history.drain(..excess);
            }
            stats.reading_history.len() - 1
        }
    };
    &mut stats.reading_history[idx]
}

/// Advance the streak counters for a first read on `today`.
fn increment_streak(stats: &mut StreakStats, today: NaiveDate) {
    match stats.last_read_date {
        None => {
            // First read ever.
            stats.current_streak = 1;
            stats.total_days_read = 1;
        }
        Some(last) => match day_diff(last, today) {
            // Clamped clock skew: no credit, and the recorded date must
            // not move backwards or the skewed day would earn a second
            // credit once the clock recovers.
            0 => return,
            1 => {
                // Consecutive day.
                stats.current_streak += 1;
                stats.total_days_read += 1;
            }
            _ => {
                // Streak broken, restart; lifetime day count still moves.
                stats.current_streak = 1;
                stats.total_days_read += 1;
            }
        },
    }

    stats.longest_streak = stats.longest_streak.max(stats.current_streak);
    stats.last_read_date = Some(today);
}

/// Zero the visible streak when more than one whole day passed since the
/// last read. No background timer does this; it runs on next observation.
fn decay_if_stale(stats: &mut StreakStats, today: NaiveDate) {
    match stats.last_read_date {
        None => stats.current_streak = 0,
        Some(last) => {
            if day_diff(last, today) > 1 {
                stats.current_streak = 0;
            }
        }
    }
}

/// Whole-day difference on calendar dates. A negative difference (clock
/// skew) is clamped to 0 so skew reads as same-day, never as elapsed days.
fn day_diff(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_item(title: &str) -> ReadItem {
        ReadItem {
            kind: taqwa_domain::ReadItemKind::Quran,
            title: title.into(),
            subtitle: None,
            link: format!("/quran/{title}"),
            timestamp: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn first_read_starts_streak_at_one() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 1), 1, None);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.total_days_read, 1);
        assert_eq!(stats.total_items_read, 1);
        assert_eq!(stats.last_read_date, Some(date(2025, 6, 1)));
        assert_eq!(stats.reading_history.len(), 1);
    }

    #[test]
    fn same_day_reads_accumulate_items_without_streak_credit() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 1), 1, None);
        apply_read(&mut stats, date(2025, 6, 1), 2, None);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_days_read, 1);
        assert_eq!(stats.total_items_read, 3);
        assert_eq!(stats.reading_history.len(), 1);
        assert_eq!(stats.reading_history[0].items_read, 3);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 1), 1, None);
        apply_read(&mut stats, date(2025, 6, 2), 1, None);

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.total_days_read, 2);
        assert_eq!(stats.last_read_date, Some(date(2025, 6, 2)));
    }

    #[test]
    fn gap_resets_streak_but_counts_the_day() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 1), 1, None);
        apply_read(&mut stats, date(2025, 6, 2), 1, None);
        apply_read(&mut stats, date(2025, 6, 7), 1, None);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.total_days_read, 3);
    }

    #[test]
    fn negative_day_diff_is_treated_as_same_day() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 2), 1, None);
        // Clock skew: "today" precedes the stored last read date.
        apply_read(&mut stats, date(2025, 6, 1), 1, None);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_days_read, 1);
        assert_eq!(stats.total_items_read, 2);
        assert_eq!(stats.last_read_date, Some(date(2025, 6, 2)));
    }

    #[test]
    fn skewed_read_cannot_double_count_the_recovered_day() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 2), 1, None);
        apply_read(&mut stats, date(2025, 6, 1), 1, None);
        // Clock recovers; June 2nd was already credited.
        apply_read(&mut stats, date(2025, 6, 2), 1, None);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_days_read, 1);
        assert_eq!(stats.total_items_read, 3);
    }

    #[test]
    fn history_is_capped_fifo() {
        let mut stats = StreakStats::default();
        let start = date(2020, 1, 1);
        for offset in 0..(READING_HISTORY_LIMIT as i64 + 10) {
            apply_read(&mut stats, start + chrono::Duration::days(offset), 1, None);
        }

        assert_eq!(stats.reading_history.len(), READING_HISTORY_LIMIT);
        // Oldest entries were evicted first.
        assert_eq!(stats.reading_history[0].date, start + chrono::Duration::days(10));
    }

    #[test]
    fn items_are_appended_to_todays_recent_list() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 1), 1, Some(sample_item("1")));
        apply_read(&mut stats, date(2025, 6, 1), 1, Some(sample_item("2")));

        let recent = &stats.reading_history[0].recent_items;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].title, "2");
    }

    #[test]
    fn decay_zeroes_streak_after_a_missed_day() {
        let mut stats = StreakStats::default();
        apply_read(&mut stats, date(2025, 6, 1), 1, None);

        let mut observed = stats.clone();
        decay_if_stale(&mut observed, date(2025, 6, 2));
        assert_eq!(observed.current_streak, 1, "one elapsed day keeps the streak alive");

        decay_if_stale(&mut stats, date(2025, 6, 3));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 1, "longest streak is historical");
    }

    #[test]
    fn decay_with_no_reads_keeps_zero() {
        let mut stats = StreakStats::default();
        decay_if_stale(&mut stats, date(2025, 6, 3));
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn longest_streak_never_below_current() {
        let mut stats = StreakStats::default();
        let start = date(2025, 6, 1);
        for offset in 0..5 {
            apply_read(&mut stats, start + chrono::Duration::days(offset), 1, None);
            assert!(stats.current_streak <= stats.longest_streak);
        }
        assert_eq!(stats.longest_streak, 5);
    }
}
