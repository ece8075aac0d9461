//! Human-readable entity code generation.
//!
//! Every entity carries a short code (`CLT-0007`, `INV-2026-0012`,
//! `TMS-202608-0003`) assigned once at creation. Codes embed a running
//! sequence; the next sequence number is derived from the complete set of
//! existing codes supplied by the owning store, so generation is deterministic
//! and side-effect free.
//!
//! There is **no cross-invocation locking**: two generators racing against the
//! same stale snapshot can produce the same code. Uniqueness enforcement
//! (constraint + retry) belongs to the persistence layer.

pub mod generator;

pub use generator::{next_code, EntityKind, Period, PeriodScope};
