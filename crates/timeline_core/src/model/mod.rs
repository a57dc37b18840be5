//! Timeline domain model loaded from the static JSON payload.
//!
//! # Responsibility
//! - Define the category, era and event records consumed by the engine.
//! - Keep the payload wire shape (`categories`, `timelineData`) in one place.
//!
//! # Invariants
//! - Everything here is immutable after load; filtering never mutates events.
//! - Category and event order follow payload insertion order.

pub mod category;
pub mod era;
pub mod payload;
