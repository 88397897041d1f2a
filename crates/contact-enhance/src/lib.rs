//! Enhancement boundary: hand the mapped records to a text-completion
//! service for cleanup, and fall back to them unchanged on any failure.
//!
//! The service has no guaranteed output schema. The contract here is
//! strict: network errors, non-2xx responses, non-JSON content, wrong
//! shapes, and record-count drift all degrade to the pre-enhancement
//! dataset. Nothing propagates past [`enhance_contacts`].

mod client;

pub use client::{EnhanceConfig, EnhanceError, EnhanceOutcome, enhance_contacts};
