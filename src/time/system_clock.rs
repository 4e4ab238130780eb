use chrono::{Local, NaiveDateTime};

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// Returns the current time in the server's local timezone, the same
/// wall-clock a file listing of the output folder would show.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
