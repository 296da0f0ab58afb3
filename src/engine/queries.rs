use ulid::Ulid;

use crate::model::{Schedule, ScheduleSummary, TimeSlot};

use super::{Engine, EngineError};

impl Engine {
    /// Snapshot of one aggregate. `None` for an unknown id.
    pub async fn get_schedule(&self, id: &Ulid) -> Option<Schedule> {
        let shared = self.store.get(id)?;
        let guard = shared.read().await;
        Some(guard.clone())
    }

    /// All schedules, most recently created first. Equal creation stamps
    /// fall back to insertion order, newest insert first.
    pub async fn list_schedules(&self) -> Vec<Schedule> {
        let entries = self.store.entries();
        let mut rows = Vec::with_capacity(entries.len());
        for (seq, shared) in entries {
            let guard = shared.read().await;
            rows.push((seq, guard.clone()));
        }
        rows.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at).then(b.0.cmp(&a.0)));
        rows.into_iter().map(|(_, schedule)| schedule).collect()
    }

    /// Slots a guest can still pick, in schedule order.
    pub async fn available_slots(&self, id: &Ulid) -> Result<Vec<TimeSlot>, EngineError> {
        let shared = self
            .store
            .get(id)
            .ok_or(EngineError::ScheduleNotFound(*id))?;
        let guard = shared.read().await;
        Ok(guard.slots.iter().filter(|s| !s.booked).cloned().collect())
    }

    /// Claimed slots with their booker, for the host's bookings view.
    pub async fn booked_slots(&self, id: &Ulid) -> Result<Vec<TimeSlot>, EngineError> {
        let shared = self
            .store
            .get(id)
            .ok_or(EngineError::ScheduleNotFound(*id))?;
        let guard = shared.read().await;
        Ok(guard.slots.iter().filter(|s| s.booked).cloned().collect())
    }

    /// Booked/free counters for the host's dashboard.
    pub async fn summary(&self, id: &Ulid) -> Result<ScheduleSummary, EngineError> {
        let shared = self
            .store
            .get(id)
            .ok_or(EngineError::ScheduleNotFound(*id))?;
        let guard = shared.read().await;
        let booked = guard.booked_count();
        Ok(ScheduleSummary {
            id: guard.id,
            title: guard.title.clone(),
            host_name: guard.host_name.clone(),
            total_slots: guard.slots.len(),
            booked_slots: booked,
            free_slots: guard.slots.len() - booked,
        })
    }
}
