/// Implements the shared console/file logging setup for the lab binaries.
pub mod logsetup;
