//! Operational bounds. Checked up front in the engine; exceeding one is a
//! `LimitExceeded` error, never a truncation.

/// Max schedules held in one process.
pub const MAX_SCHEDULES: usize = 10_000;

/// Max slots a single schedule may carry.
pub const MAX_SLOTS_PER_SCHEDULE: usize = 500;

/// Max length of host and guest names, in bytes.
pub const MAX_NAME_LEN: usize = 100;

/// Max length of a schedule title, in bytes.
pub const MAX_TITLE_LEN: usize = 200;

/// Max length of a schedule description, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 2_000;

/// Max length of a guest's free-form message, in bytes.
pub const MAX_MESSAGE_LEN: usize = 2_000;

/// Max length of a guest email address, in bytes (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// A slot may not be longer than one day; end-time arithmetic wraps at
/// most once past midnight.
pub const MAX_SLOT_DURATION_MINUTES: u32 = 24 * 60;
