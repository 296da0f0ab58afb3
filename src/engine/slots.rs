use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::model::SlotSpec;

/// Lazy iterator over back-to-back slot start times within one day window.
///
/// Yields `day_start`, `day_start + duration`, … for as long as the slot
/// still fits: a start is emitted only if `start + duration <= day_end`.
/// A partial trailing slot is dropped, never truncated. `Clone` restarts
/// the walk from wherever the clone was taken.
///
/// Performs no collision checking against existing slots — deduplication
/// across repeated bulk-adds is the caller's concern.
#[derive(Debug, Clone)]
pub struct SlotWindow {
    /// Next candidate start, minutes from midnight.
    cursor: u32,
    /// End of the bookable window, minutes from midnight.
    end: u32,
    /// Slot length in minutes.
    duration: u32,
}

impl SlotWindow {
    /// Sub-minute components of the endpoints are ignored; the domain is
    /// wall-clock HH:mm.
    pub fn new(day_start: NaiveTime, day_end: NaiveTime, duration_minutes: u32) -> Self {
        Self {
            cursor: minute_of_day(day_start),
            end: minute_of_day(day_end),
            duration: duration_minutes,
        }
    }
}

impl Iterator for SlotWindow {
    type Item = NaiveTime;

    fn next(&mut self) -> Option<NaiveTime> {
        // A zero duration would never advance the cursor; treat it as an
        // empty window (the factory rejects it before it gets here).
        if self.duration == 0 || self.cursor + self.duration > self.end {
            return None;
        }
        let start = self.cursor;
        self.cursor += self.duration;
        Some(time_of_minute(start))
    }
}

/// Expand a bulk-entry request into candidate slots for the factory:
/// every start the window yields, paired with the date.
pub fn expand_window(
    date: NaiveDate,
    day_start: NaiveTime,
    day_end: NaiveTime,
    duration_minutes: u32,
) -> Vec<SlotSpec> {
    SlotWindow::new(day_start, day_end, duration_minutes)
        .map(|start_time| SlotSpec { date, start_time })
        .collect()
}

fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

fn time_of_minute(m: u32) -> NaiveTime {
    // cursor stays strictly below `end`, which is at most 1439.
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).expect("minute-of-day in range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn full_day_window_30min() {
        let starts: Vec<NaiveTime> = SlotWindow::new(t(9, 0), t(18, 0), 30).collect();
        assert_eq!(starts.len(), 18);
        assert_eq!(starts[0], t(9, 0));
        assert_eq!(starts[1], t(9, 30));
        assert_eq!(*starts.last().unwrap(), t(17, 30));
        assert!(starts.iter().all(|s| *s < t(18, 0)));
    }

    #[test]
    fn partial_trailing_slot_dropped() {
        // 09:00–10:00 at 45min: only 09:00–09:45 fits; no 09:45–10:00 stub
        let starts: Vec<NaiveTime> = SlotWindow::new(t(9, 0), t(10, 0), 45).collect();
        assert_eq!(starts, vec![t(9, 0)]);
    }

    #[test]
    fn exact_fit_emits_last_slot() {
        let starts: Vec<NaiveTime> = SlotWindow::new(t(9, 0), t(10, 0), 30).collect();
        assert_eq!(starts, vec![t(9, 0), t(9, 30)]);
    }

    #[test]
    fn window_too_narrow_for_one_slot() {
        let starts: Vec<NaiveTime> = SlotWindow::new(t(9, 0), t(9, 20), 30).collect();
        assert!(starts.is_empty());
    }

    #[test]
    fn empty_and_inverted_windows() {
        assert_eq!(SlotWindow::new(t(9, 0), t(9, 0), 30).count(), 0);
        assert_eq!(SlotWindow::new(t(18, 0), t(9, 0), 30).count(), 0);
    }

    #[test]
    fn zero_duration_yields_nothing() {
        assert_eq!(SlotWindow::new(t(9, 0), t(18, 0), 0).count(), 0);
    }

    #[test]
    fn clone_restarts_mid_walk() {
        let mut window = SlotWindow::new(t(9, 0), t(12, 0), 60);
        assert_eq!(window.next(), Some(t(9, 0)));
        let resumed = window.clone();
        assert_eq!(window.next(), Some(t(10, 0)));
        // The clone replays from where it was taken
        assert_eq!(resumed.collect::<Vec<_>>(), vec![t(10, 0), t(11, 0)]);
    }

    #[test]
    fn expand_window_attaches_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let specs = expand_window(date, t(9, 0), t(11, 0), 60);
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|s| s.date == date));
        assert_eq!(specs[0].start_time, t(9, 0));
        assert_eq!(specs[1].start_time, t(10, 0));
    }

    #[test]
    fn seconds_on_endpoints_are_ignored() {
        let start = NaiveTime::from_hms_opt(9, 0, 42).unwrap();
        let starts: Vec<NaiveTime> = SlotWindow::new(start, t(10, 0), 30).collect();
        assert_eq!(starts, vec![t(9, 0), t(9, 30)]);
    }
}
