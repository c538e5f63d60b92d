mod config;
mod tracing;

pub use self::config::*;
pub use self::tracing::*;
