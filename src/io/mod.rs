//! File formats at the crate boundary.
//!
//! - `record`: one property record as JSON
//! - `batch`: many records as CSV, with row-level validation errors
//! - `export`: scored batch results back out as CSV

pub mod batch;
pub mod export;
pub mod record;
