//! atlas-core
//!
//! Session record model for ATLAS consulting runs. Pure data — no rendering
//! dependency. Defines how agent sections are keyed, how their fields are
//! read with typed defaults, and how records are loaded from JSON.

pub mod error;
pub mod keys;
pub mod models;
