//! Report rendering for the binary.
pub(crate) mod summary;
