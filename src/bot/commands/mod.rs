//! Discord command implementations.

/// Archive commands
pub mod archive;

pub use archive::*;
