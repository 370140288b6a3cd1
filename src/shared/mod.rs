//! Shared Module
//!
//! Types describing the analysis domain. They carry no server concerns and
//! are serialized as-is in API responses.

/// Lesion categories and prediction payloads
pub mod lesion;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use lesion::{Lesion, Prediction, Risk};
