//! Depth validation
//!
//! A declared depth of 0 means "derive from content". A nonzero declared
//! depth must cover every word the loaded content needs.

use crate::convert::{ConvertError, ConvertResult};

/// Reject a nonzero declared depth smaller than the implied depth.
pub fn check(declared: u64, implied: u64) -> ConvertResult<()> {
    if declared != 0 && declared < implied {
        return Err(ConvertError::DepthTooSmall {
            declared,
            required: implied,
        });
    }
    Ok(())
}

/// Final output depth: the declared depth or the deepest implied depth,
/// whichever is larger.
pub fn resolve<I>(declared: u64, implied: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    implied.into_iter().fold(declared, u64::max)
}
