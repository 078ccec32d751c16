//! Async shell around the pure rules.
//!
//! The monitor reaches the outside world only through three capability
//! traits:
//!
//! - [`HistoryLookup`]: last static / moving record for a device
//! - [`Persistence`]: storage for validated moving readings
//! - [`AlertSink`]: where fired alerts go
//!
//! In-memory implementations live in [`memory`]; [`TracingSink`] turns
//! alerts into `tracing` events.

mod env;
mod error;
pub mod memory;
mod monitor;
mod sink;

pub use env::{AlertSink, HistoryLookup, Persistence};
pub use error::{HistoryError, MonitorError, PersistError};
pub use monitor::MotionMonitor;
pub use sink::TracingSink;
