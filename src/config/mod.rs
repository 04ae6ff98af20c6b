//! Configuration module for inline_sass
//!
//! This module provides `InlineSassOptions`, its fluent builder, and JSON
//! loading for option bags supplied by build pipelines.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::InlineSassOptionsBuilder;
pub use types::{CssStyle, InlineSassOptions, InlinerOptions, SassOptions};
