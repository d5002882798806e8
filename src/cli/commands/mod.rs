//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod bounds;
mod common;
pub mod init;
pub mod points;
pub mod replay;
pub mod snapshot;
pub mod validate;
