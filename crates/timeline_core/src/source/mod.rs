//! Payload sources and loading.
//!
//! # Responsibility
//! - Abstract where the timeline payload comes from (file, memory, network).
//! - Turn transport results into a parsed payload or a typed load error.
//!
//! # Invariants
//! - A non-success status is an error even when a body is present.
//! - Loading never retries.

pub mod loader;
