/// Derived views over the directory.
///
/// All three entry points are synchronous and borrow from the
/// [`Directory`](crate::directory::Directory) they are given:
///
/// - [`query`] filters by case-insensitive name or roll substring,
/// - [`select_featured`] produces the landing page highlights,
/// - [`resolve_profile`] backs the individual profile page.
///
/// Nothing here caches. Callers that run [`query`] per keystroke gate it
/// with a [`Throttle`](crate::ratelimit::Throttle) or
/// [`Debounce`](crate::ratelimit::Debounce).
pub mod featured;
pub mod profile;
pub mod query;

pub use featured::{select_featured, FeaturedMode};
pub use profile::{resolve_profile, StudentProfile, DEFAULT_PROFILE_ID};
pub use query::{query, search_batch};
