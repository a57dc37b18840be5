//! Session services.
//!
//! # Responsibility
//! - Own the per-page timeline session and route observed UI events into
//!   filter and layout recomputes.

pub mod timeline_controller;
