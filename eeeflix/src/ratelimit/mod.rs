/// Call governors for UI event handlers.
///
/// Both governors are plain state machines owned by a single-threaded event
/// loop. They never spawn timers of their own: [`Throttle`] decides on the
/// spot, and [`Debounce`] exposes [`Debounce::poll`] and
/// [`Debounce::deadline`] so the loop can wake it when the wait is over.
///
/// ```rust,ignore
/// let mut search = throttle(|text: String| render(query(&directory, &text)), period);
/// for line in input.lines() {
///     search.call(line?);
/// }
/// ```
///
/// Time comes from a [`Clock`]; tests drive [`ManualClock`] by hand.
pub mod clock;
pub mod debounce;
pub mod throttle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::{debounce, Debounce};
pub use throttle::{throttle, Throttle};
