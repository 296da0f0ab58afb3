//! In-memory slot booking core.
//!
//! A host publishes a schedule of bookable time slots; guests claim slots
//! through [`Engine::book_slot`], which guarantees at most one booking per
//! slot even under concurrent requests. State lives for the process
//! lifetime only — this is a volatile cache-of-record, not a database.

pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;

pub use engine::{Engine, EngineError};
