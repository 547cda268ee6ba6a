// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current instant. Injected so approval timestamps and the
/// concurrency snapshots derived from them are deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
