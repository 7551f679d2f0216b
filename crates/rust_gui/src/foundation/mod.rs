//! Foundation module - Core utilities and types
//!
//! - Math types (vectors, colors, rectangles)
//! - Logging utilities

pub mod math;
pub mod logging;
