//! Filter engine: active categories plus free-text search.
//!
//! # Responsibility
//! - Own the legend toggle state machine over the active category set.
//! - Decide per-event visibility from category membership and search match.
//!
//! # Invariants
//! - Visibility of one event never depends on another event.
//! - Filtering flips flags on rendered items; it never rebuilds them.

pub mod active_set;
pub mod query;
pub mod visibility;
