//! Core types shared across metricdiff facilities
//!
//! This crate provides foundational constants used by both the error
//! and logging facilities:
//!
//! - **Schema constants**: Canonical lifecycle event names

pub mod schema;
