//! Layout engine: balanced column placement per era section.
//!
//! # Responsibility
//! - Decide viewport mode from the current width.
//! - Place visible items into the shortest column and size each section.
//!
//! # Invariants
//! - Layout is recomputed from scratch on every call and is deterministic.
//! - Hidden items never reserve space.
//! - The engine reads heights through [`masonry::Measure`]; it never measures.

pub mod masonry;
