//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw property record assembled at the input boundary
//! - the categorical attribute enums and their wire labels
//! - the prediction result returned to the caller

pub mod types;

pub use types::*;
