use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Guest contact details attached to a claimed slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

/// A single bookable slot. Owned by exactly one `Schedule`; `id` is unique
/// within that schedule and meaningless outside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Ulid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booked: bool,
    /// Present if and only if `booked` is true.
    pub booked_by: Option<BookingInfo>,
}

impl TimeSlot {
    /// End of a slot starting at `start`. Naive minute arithmetic: the sum
    /// wraps around midnight without rolling the date forward.
    pub fn end_of(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
        start + Duration::minutes(i64::from(duration_minutes))
    }
}

/// The aggregate root. Immutable after construction except each slot's
/// `booked`/`booked_by` pair, which flips false → true exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Ulid,
    pub host_name: String,
    pub title: String,
    pub description: String,
    pub slot_duration_minutes: u32,
    /// Caller-supplied order, preserved.
    pub slots: Vec<TimeSlot>,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    pub fn slot(&self, slot_id: Ulid) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn slot_mut(&mut self, slot_id: Ulid) -> Option<&mut TimeSlot> {
        self.slots.iter_mut().find(|s| s.id == slot_id)
    }

    pub fn booked_count(&self) -> usize {
        self.slots.iter().filter(|s| s.booked).count()
    }

    pub fn free_count(&self) -> usize {
        self.slots.len() - self.booked_count()
    }
}

// ── Host input ───────────────────────────────────────────────────

/// One candidate slot: a date plus a start time. End time and id are
/// assigned by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

/// Everything a host submits to publish a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchedule {
    pub host_name: String,
    pub title: String,
    /// Defaults to empty when the host leaves it blank.
    #[serde(default)]
    pub description: String,
    pub slot_duration_minutes: u32,
    pub slots: Vec<SlotSpec>,
}

// ── Query result types ───────────────────────────────────────────

/// Booked/free counts for a host's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub id: Ulid,
    pub title: String,
    pub host_name: String,
    pub total_slots: usize,
    pub booked_slots: usize,
    pub free_slots: usize,
}
