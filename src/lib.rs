//! bin2coe - Xilinx COE memory-initialization file generator
//!
//! This crate converts raw binary images and hex-data text files into a
//! single COE vector: regions are placed at word addresses, gaps are filled
//! with a default token and the declared depth is validated against the
//! loaded content.

pub mod config;
pub mod convert;
pub mod depth;
pub mod encode;
pub mod loader;
pub mod region;
pub mod report;

pub use coe_format::{ByteOrder, DecodeMode};
pub use config::{BuiltinDefaults, ConfigError, ConversionConfig, ConversionInputs};
pub use convert::{convert, ConversionContext, ConvertError, ConvertResult, ErrorKind, EXIT_FAILURE};
pub use region::{Region, RegionStore};
pub use report::ConversionReport;
