mod error;
mod factory;
mod mutations;
mod queries;
mod slots;
mod store;

pub use error::EngineError;
pub use factory::build_schedule;
pub use slots::{SlotWindow, expand_window};
pub use store::{ScheduleStore, SharedSchedule};

/// Facade over the schedule store. All mutations to a given schedule are
/// serialized through that schedule's write lock, so the booking
/// read-check-write is atomic with respect to other callers.
pub struct Engine {
    store: ScheduleStore,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            store: ScheduleStore::new(),
        }
    }
}
