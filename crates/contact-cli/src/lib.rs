//! CLI library components for the contact formatter.

pub mod logging;
pub mod pipeline;
pub mod types;
