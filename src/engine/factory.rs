use chrono::Utc;
use ulid::Ulid;

use crate::limits::*;
use crate::model::{NewSchedule, Schedule, TimeSlot};

use super::EngineError;

/// Validate host input and construct the aggregate. Pure construction:
/// no store access — persistence is the engine's explicit follow-up step.
///
/// Every candidate gets a fresh ULID, `end_time = start_time + duration`
/// (wrapping past midnight), and starts unbooked. Candidate order is
/// preserved; identical candidates are kept as distinct slots.
pub fn build_schedule(input: NewSchedule) -> Result<Schedule, EngineError> {
    let NewSchedule {
        host_name,
        title,
        description,
        slot_duration_minutes,
        slots,
    } = input;

    if host_name.trim().is_empty() {
        return Err(EngineError::Validation("host name must not be empty"));
    }
    if title.trim().is_empty() {
        return Err(EngineError::Validation("title must not be empty"));
    }
    if slot_duration_minutes == 0 {
        return Err(EngineError::Validation(
            "slot duration must be a positive number of minutes",
        ));
    }
    if slots.is_empty() {
        return Err(EngineError::Validation("at least one slot is required"));
    }

    if host_name.len() > MAX_NAME_LEN {
        return Err(EngineError::LimitExceeded("host name too long"));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(EngineError::LimitExceeded("title too long"));
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(EngineError::LimitExceeded("description too long"));
    }
    if slot_duration_minutes > MAX_SLOT_DURATION_MINUTES {
        return Err(EngineError::LimitExceeded("slot duration longer than a day"));
    }
    if slots.len() > MAX_SLOTS_PER_SCHEDULE {
        return Err(EngineError::LimitExceeded("too many slots on schedule"));
    }

    let slots = slots
        .into_iter()
        .map(|spec| TimeSlot {
            id: Ulid::new(),
            date: spec.date,
            start_time: spec.start_time,
            end_time: TimeSlot::end_of(spec.start_time, slot_duration_minutes),
            booked: false,
            booked_by: None,
        })
        .collect();

    Ok(Schedule {
        id: Ulid::new(),
        host_name,
        title,
        description,
        slot_duration_minutes,
        slots,
        created_at: Utc::now(),
    })
}
