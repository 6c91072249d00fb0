// Declare the feature-gated modules
#[cfg(feature = "configs")]
pub mod configs;
#[cfg(feature = "connections")]
pub mod connections;
#[cfg(feature = "loggers")]
pub mod loggers;

// Re-export the most commonly used items
#[cfg(feature = "configs")]
pub use configs::config_env::*;
#[cfg(feature = "loggers")]
pub use loggers::logsetup::*;
