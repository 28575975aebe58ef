//! `homeval` library crate.
//!
//! The binary (`homeval`) is a thin wrapper around this library so that:
//!
//! - the prediction pipeline is testable without spawning processes
//! - modules are reusable (e.g., future web/service front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod estimator;
pub mod features;
pub mod interval;
pub mod io;
pub mod report;
pub mod schema;
