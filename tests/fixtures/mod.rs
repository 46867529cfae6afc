//! Test fixtures and helpers shared by the integration tests

use std::path::{Path, PathBuf};

/// Path to the sample hex-data file
pub fn boot_dat_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/boot.dat")
}

/// Split a COE file into its tokens, checking header and terminator
pub fn coe_tokens(text: &str) -> Vec<String> {
    let body = text
        .strip_prefix("MEMORY_INITIALIZATION_RADIX=16;\nMEMORY_INITIALIZATION_VECTOR=\n")
        .expect("COE header")
        .strip_suffix(";\n")
        .expect("COE terminator");
    if body.is_empty() {
        return Vec::new();
    }
    body.split(",\n").map(str::to_string).collect()
}
