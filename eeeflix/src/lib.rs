pub mod config;
pub mod directory;
pub mod errors;
pub mod metrics;
pub mod ratelimit;
pub mod search;

pub use crate::config::{CliOverrides, DirectoryConfig};
pub use directory::{generate, Directory, StudentRecord};
pub use errors::{DirectoryError, DirectoryResult};
pub use ratelimit::{debounce, throttle, Debounce, Throttle};
pub use search::{query, resolve_profile, select_featured, FeaturedMode};
