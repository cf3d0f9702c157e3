/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use chrono::{DateTime, FixedOffset, Local, Utc};
use tracing::trace;

/// Something that can tell what time it is.
///
/// Everything that depends on "now" takes one of these, so that
/// tests can pin the current time with a [`FixedClock`].
pub trait Clock {
    /// The current instant
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The wall clock of the machine, in its local offset.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now().fixed_offset();
        trace!(%now, "read local clock");
        now
    }
}

/// The wall clock of the machine, in UTC.
#[derive(Copy, Clone, Debug, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Utc::now().fixed_offset();
        trace!(%now, "read utc clock");
        now
    }
}

/// A clock that is stuck at a single instant.
///
/// ```
/// use calendar::{Clock, FixedClock};
/// use chrono::DateTime;
///
/// let instant = DateTime::parse_from_rfc3339("2023-06-14T15:30:00Z").unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock that always returns `instant`
    pub fn new<Tz: chrono::TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.fixed_offset(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}
