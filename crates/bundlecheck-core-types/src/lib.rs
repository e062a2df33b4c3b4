//! Core types shared across bundlecheck facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the logging facility and structured error reporting.

pub mod schema;
