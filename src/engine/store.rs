use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::RwLock;
use ulid::Ulid;

use crate::model::Schedule;

pub type SharedSchedule = Arc<RwLock<Schedule>>;

struct StoreEntry {
    /// Monotonic insertion order, kept across upserts of the same id so
    /// re-saving an aggregate does not reshuffle listing order.
    seq: u64,
    schedule: SharedSchedule,
}

/// Keyed store of schedule aggregates. Process-wide, initialized empty,
/// torn down with the process — no durability. Each aggregate sits behind
/// its own `RwLock`, so all mutations to one schedule's slots serialize
/// through that schedule's write lock.
pub struct ScheduleStore {
    schedules: DashMap<Ulid, StoreEntry>,
    insert_seq: AtomicU64,
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self {
            schedules: DashMap::new(),
            insert_seq: AtomicU64::new(0),
        }
    }

    /// Upsert. Last writer wins: an existing entry's aggregate is replaced
    /// wholesale, slots included. A caller still holding the superseded
    /// handle mutates a detached aggregate.
    pub fn insert(&self, schedule: Schedule) -> SharedSchedule {
        let id = schedule.id;
        let shared: SharedSchedule = Arc::new(RwLock::new(schedule));
        match self.schedules.entry(id) {
            Entry::Occupied(mut e) => {
                e.get_mut().schedule = shared.clone();
            }
            Entry::Vacant(v) => {
                let seq = self.insert_seq.fetch_add(1, Ordering::Relaxed);
                v.insert(StoreEntry {
                    seq,
                    schedule: shared.clone(),
                });
            }
        }
        shared
    }

    /// Never an error for a missing key.
    pub fn get(&self, id: &Ulid) -> Option<SharedSchedule> {
        self.schedules.get(id).map(|e| e.schedule.clone())
    }

    /// Returns whether an entry existed and was removed.
    pub fn remove(&self, id: &Ulid) -> bool {
        self.schedules.remove(id).is_some()
    }

    pub fn contains(&self, id: &Ulid) -> bool {
        self.schedules.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// All entries with their insertion sequence, unordered. Listing order
    /// is the query layer's concern.
    pub fn entries(&self) -> Vec<(u64, SharedSchedule)> {
        self.schedules
            .iter()
            .map(|e| (e.seq, e.schedule.clone()))
            .collect()
    }
}
