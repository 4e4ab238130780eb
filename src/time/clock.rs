use chrono::NaiveDateTime;

/// A port that provides the **current local time** for the application.
///
/// # Purpose
/// Collision-avoiding file names embed a timestamp. Reading it through
/// this trait keeps [`resolve`](crate::web::upload::filename::resolve)
/// deterministic under test.
///
/// # Typical Implementations
/// - `SystemClock`: the OS clock in the server's local timezone
/// - `FixedClock`: a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock time.
    fn now(&self) -> NaiveDateTime;
}
