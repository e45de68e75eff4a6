//! solace-audit
//!
//! Application-level audit events for clinically sensitive actions,
//! logged through `tracing` so they land in the platform's structured
//! log pipeline alongside request logs.

pub mod error;
pub mod events;

pub use error::AuditError;
pub use events::AuditEvent;
