use tracing::info;
use ulid::Ulid;

use crate::limits::*;
use crate::model::{BookingInfo, NewSchedule, Schedule};
use crate::observability;

use super::factory::build_schedule;
use super::{Engine, EngineError};

impl Engine {
    /// Validate and persist a new schedule, returning a snapshot of what
    /// was stored. Construction itself is pure (`build_schedule`); the
    /// store insert is the explicit persistence step.
    pub fn create_schedule(&self, input: NewSchedule) -> Result<Schedule, EngineError> {
        if self.store.len() >= MAX_SCHEDULES {
            return Err(EngineError::LimitExceeded("too many schedules"));
        }

        let schedule = build_schedule(input)?;
        let snapshot = schedule.clone();
        self.store.insert(schedule);

        metrics::counter!(observability::SCHEDULES_CREATED_TOTAL).increment(1);
        metrics::gauge!(observability::SCHEDULES_ACTIVE).increment(1.0);
        info!(
            schedule = %snapshot.id,
            slots = snapshot.slots.len(),
            "schedule created"
        );
        Ok(snapshot)
    }

    /// Claim one slot for a guest. The full read-check-write runs under
    /// the schedule's write lock: of N calls racing on the same slot,
    /// exactly one succeeds and the rest fail with `AlreadyBooked`. The
    /// transition is terminal — nothing books a slot back to free.
    ///
    /// Returns a snapshot of the updated aggregate.
    pub async fn book_slot(
        &self,
        schedule_id: Ulid,
        slot_id: Ulid,
        booking: BookingInfo,
    ) -> Result<Schedule, EngineError> {
        validate_booking(&booking)?;

        let shared = self
            .store
            .get(&schedule_id)
            .ok_or(EngineError::ScheduleNotFound(schedule_id))?;
        let mut guard = shared.write().await;

        let slot = guard
            .slot_mut(slot_id)
            .ok_or(EngineError::SlotNotFound(slot_id))?;
        if slot.booked {
            metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            return Err(EngineError::AlreadyBooked(slot_id));
        }

        // Flag and booker flip together; the lock makes the pair atomic
        // with respect to every other caller.
        slot.booked = true;
        slot.booked_by = Some(booking);

        metrics::counter!(observability::BOOKINGS_TOTAL).increment(1);
        info!(schedule = %schedule_id, slot = %slot_id, "slot booked");
        Ok(guard.clone())
    }

    /// Administrative removal. Returns whether the schedule existed.
    /// Not reachable from any guest- or host-facing collaborator.
    pub fn delete_schedule(&self, schedule_id: &Ulid) -> bool {
        let existed = self.store.remove(schedule_id);
        if existed {
            metrics::gauge!(observability::SCHEDULES_ACTIVE).decrement(1.0);
            info!(schedule = %schedule_id, "schedule deleted");
        }
        existed
    }
}

fn validate_booking(booking: &BookingInfo) -> Result<(), EngineError> {
    if booking.name.trim().is_empty() {
        return Err(EngineError::Validation("guest name must not be empty"));
    }
    if booking.email.trim().is_empty() {
        return Err(EngineError::Validation("guest email must not be empty"));
    }
    if booking.name.len() > MAX_NAME_LEN {
        return Err(EngineError::LimitExceeded("guest name too long"));
    }
    if booking.email.len() > MAX_EMAIL_LEN {
        return Err(EngineError::LimitExceeded("guest email too long"));
    }
    if let Some(msg) = &booking.message
        && msg.len() > MAX_MESSAGE_LEN
    {
        return Err(EngineError::LimitExceeded("message too long"));
    }
    Ok(())
}
