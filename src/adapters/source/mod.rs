//! Case source abstraction
//!
//! This module provides a trait-based abstraction over where case rows come
//! from, plus a factory that builds the configured source.

pub mod factory;
pub mod traits;

pub use factory::create_case_source;
pub use traits::CaseSource;
