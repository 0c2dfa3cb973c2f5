//! Icon container output.

/// ICO encoding and the output file write.
pub mod ico;
