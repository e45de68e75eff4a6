//! solace-core
//!
//! Pure domain types for the Solace teletherapy platform. No backend
//! dependency — this is the shared vocabulary between the screening
//! engine, the web UI, and the persistence layer.

pub mod error;
pub mod models;
