//! Structured logging facility for metricdiff
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! All output goes to standard error; standard output is reserved for the
//! rendered report.
//!
//! # Usage
//!
//! ```rust
//! use metricdiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! # Logging Ownership
//!
//! The CLI command layer owns lifecycle events (`start` / `end` /
//! `end_error`). Core and store code use only `tracing::debug!()`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
