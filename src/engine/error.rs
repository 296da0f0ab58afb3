use ulid::Ulid;

#[derive(Debug)]
pub enum EngineError {
    ScheduleNotFound(Ulid),
    SlotNotFound(Ulid),
    AlreadyBooked(Ulid),
    Validation(&'static str),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::ScheduleNotFound(id) => write!(f, "schedule not found: {id}"),
            EngineError::SlotNotFound(id) => write!(f, "slot not found: {id}"),
            EngineError::AlreadyBooked(id) => write!(f, "slot already booked: {id}"),
            EngineError::Validation(msg) => write!(f, "validation failed: {msg}"),
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
