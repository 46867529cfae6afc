//! Conversion configuration
//!
//! Two layers, later wins:
//! 1. Built-in defaults
//! 2. CLI flags
//!
//! There is no configuration file; the CLI assembles a [`ConversionConfig`]
//! and [`ConversionInputs`] and the core validates them before touching any
//! file.

mod defaults;
mod options;

pub use defaults::BuiltinDefaults;
pub use options::{ConfigError, ConversionConfig, ConversionInputs};
