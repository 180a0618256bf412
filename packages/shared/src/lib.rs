//! Shared utilities for Parlor.
//!
//! Logging setup and time helpers used by every package in the workspace.

pub mod logger;
pub mod time;
