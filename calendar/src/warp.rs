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

use crate::clock::Clock;
use crate::components::Components;
use crate::elapsed::Elapsed;
use crate::error::WarpError;
use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, TimeZone, Timelike, Weekday};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An instant in time that can be warped around: moved by
/// durations, snapped to the edges of its day or to other days
/// of its week.
///
/// Every operation returns a new value and leaves the original
/// one untouched, so calls can be chained. The instant keeps the
/// offset it was built with and all the calendar arithmetic
/// happens on that offset's wall clock. Convert to the desired
/// timezone **before** warping.
///
/// ```
/// use calendar::warp;
/// use chrono::{TimeZone, Utc, Weekday};
///
/// // Wednesday
/// let t = warp(Utc.with_ymd_and_hms(2023, 6, 14, 15, 30, 0).unwrap());
///
/// let monday = t.first_day_of_week(Weekday::Mon);
/// assert_eq!(monday, warp(Utc.with_ymd_and_hms(2023, 6, 12, 0, 0, 0).unwrap()));
///
/// let next_tuesday = t.next_weekday(Weekday::Tue).sub_minutes(2);
/// assert_eq!(next_tuesday, warp(Utc.with_ymd_and_hms(2023, 6, 20, 15, 28, 0).unwrap()));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeWarp {
    time: DateTime<FixedOffset>,
}

/// Wraps an instant, keeping its offset.
pub fn warp<Tz: TimeZone>(instant: DateTime<Tz>) -> TimeWarp {
    TimeWarp::new(instant)
}

/// The current instant, according to `clock`
pub fn now<C: Clock + ?Sized>(clock: &C) -> TimeWarp {
    TimeWarp::now(clock)
}

/// Today at 00:00
pub fn today<C: Clock + ?Sized>(clock: &C) -> TimeWarp {
    now(clock).beginning_of_day()
}

/// Tomorrow at 00:00
pub fn tomorrow<C: Clock + ?Sized>(clock: &C) -> TimeWarp {
    today(clock).tomorrow()
}

/// Yesterday at 00:00
pub fn yesterday<C: Clock + ?Sized>(clock: &C) -> TimeWarp {
    today(clock).yesterday()
}

/// Unwraps the result of an arithmetic operation. Failing to
/// build or apply a duration is not something callers of the
/// plain methods are expected to recover from.
fn fatal<T>(result: Result<T, WarpError>) -> T {
    result.unwrap_or_else(|err| panic!("{}", err))
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeWarp {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::new(instant)
    }
}

impl From<TimeWarp> for DateTime<FixedOffset> {
    fn from(t: TimeWarp) -> Self {
        t.time
    }
}

impl fmt::Display for TimeWarp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)
    }
}

impl TimeWarp {
    /// Wraps an instant, keeping its offset.
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            time: instant.fixed_offset(),
        }
    }

    /// The current instant, according to `clock`
    pub fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        Self { time: clock.now() }
    }

    /// The wrapped instant
    pub fn time(&self) -> DateTime<FixedOffset> {
        self.time
    }

    /// Consumes the value, returning the wrapped instant
    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.time
    }

    /// The day of the week of the wrapped instant
    pub fn weekday(&self) -> Weekday {
        self.time.weekday()
    }

    fn checked_shift(self, delta: TimeDelta) -> Result<Self, WarpError> {
        self.time
            .checked_add_signed(delta)
            .map(|time| Self { time })
            .ok_or(WarpError::OutOfRange {
                instant: self.time,
                delta,
            })
    }

    /* ADDITION */

    /// Adds the sum of all the non-zero `components`.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError`] if the duration cannot be built or if
    /// the result falls outside of the representable range.
    pub fn checked_add_components(self, components: Components) -> Result<Self, WarpError> {
        let delta = components.to_duration()?;
        self.checked_shift(delta)
    }

    /// Adds the sum of all the non-zero `components`. Slots may
    /// have different signs.
    ///
    /// ```
    /// use calendar::{warp, Components};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let t = warp(Utc.with_ymd_and_hms(2023, 6, 14, 10, 0, 0).unwrap());
    /// let later = t.add_components(Components::hms(2, -30, 0));
    /// assert_eq!(later, warp(Utc.with_ymd_and_hms(2023, 6, 14, 11, 30, 0).unwrap()));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics where [`TimeWarp::checked_add_components`] would fail.
    pub fn add_components(self, components: Components) -> Self {
        fatal(self.checked_add_components(components))
    }

    /// Adds a number of weeks
    pub fn add_weeks(self, weeks: i64) -> Self {
        fatal(Components::from_weeks(weeks).and_then(|c| self.checked_add_components(c)))
    }

    /// Adds a number of days
    pub fn add_days(self, days: i64) -> Self {
        fatal(Components::from_days(days).and_then(|c| self.checked_add_components(c)))
    }

    /// Adds a number of hours
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_components(Components::from_hours(hours))
    }

    /// Adds a number of minutes
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_components(Components::from_minutes(minutes))
    }

    /// Adds a number of seconds
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.add_components(Components::from_seconds(seconds))
    }

    /* SUBTRACTION */

    /// Subtracts the first non-zero slot of `components` and adds
    /// all the others (see [`Components::to_sub_duration`]).
    ///
    /// # Errors
    ///
    /// Same as [`TimeWarp::checked_add_components`].
    pub fn checked_sub_components(self, components: Components) -> Result<Self, WarpError> {
        if components.non_zero_count() > 1 {
            debug!(
                %components,
                "only the first non-zero component is subtracted, the rest are added"
            );
        }
        let delta = components.to_sub_duration()?;
        self.checked_shift(delta)
    }

    /// Subtracts the first non-zero slot of `components` and adds
    /// all the others.
    ///
    /// With a single non-zero slot this is a plain subtraction. With
    /// more, the result is probably not what you want; use
    /// [`TimeWarp::sub_all_components`] instead.
    ///
    /// ```
    /// use calendar::{warp, Components};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let t = warp(Utc.with_ymd_and_hms(2023, 6, 14, 12, 0, 0).unwrap());
    ///
    /// // -2 hours, +30 minutes
    /// let earlier = t.sub_components(Components::hms(2, 30, 0));
    /// assert_eq!(earlier, warp(Utc.with_ymd_and_hms(2023, 6, 14, 10, 30, 0).unwrap()));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics where [`TimeWarp::checked_sub_components`] would fail.
    pub fn sub_components(self, components: Components) -> Self {
        fatal(self.checked_sub_components(components))
    }

    /// Subtracts the sum of all the non-zero `components`.
    ///
    /// # Errors
    ///
    /// Same as [`TimeWarp::checked_add_components`].
    pub fn checked_sub_all_components(self, components: Components) -> Result<Self, WarpError> {
        let delta = components.to_duration()?;
        // The range of a TimeDelta is symmetric
        self.checked_shift(-delta)
    }

    /// Subtracts the sum of all the non-zero `components`.
    ///
    /// ```
    /// use calendar::{warp, Components};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let t = warp(Utc.with_ymd_and_hms(2023, 6, 14, 12, 0, 0).unwrap());
    /// let earlier = t.sub_all_components(Components::hms(2, 30, 0));
    /// assert_eq!(earlier, warp(Utc.with_ymd_and_hms(2023, 6, 14, 9, 30, 0).unwrap()));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics where [`TimeWarp::checked_sub_all_components`] would fail.
    pub fn sub_all_components(self, components: Components) -> Self {
        fatal(self.checked_sub_all_components(components))
    }

    /// Subtracts a number of weeks
    pub fn sub_weeks(self, weeks: i64) -> Self {
        fatal(Components::from_weeks(weeks).and_then(|c| self.checked_sub_components(c)))
    }

    /// Subtracts a number of days
    pub fn sub_days(self, days: i64) -> Self {
        fatal(Components::from_days(days).and_then(|c| self.checked_sub_components(c)))
    }

    /// Subtracts a number of hours
    pub fn sub_hours(self, hours: i64) -> Self {
        self.sub_components(Components::from_hours(hours))
    }

    /// Subtracts a number of minutes
    pub fn sub_minutes(self, minutes: i64) -> Self {
        self.sub_components(Components::from_minutes(minutes))
    }

    /// Subtracts a number of seconds
    pub fn sub_seconds(self, seconds: i64) -> Self {
        self.sub_components(Components::from_seconds(seconds))
    }

    /// The day after, same time
    pub fn tomorrow(self) -> Self {
        self.add_days(1)
    }

    /// The day before, same time
    pub fn yesterday(self) -> Self {
        self.sub_days(1)
    }

    /* WEEKDAYS */

    /// The date of `day` within the current week, keeping the time.
    ///
    /// Weeks go from Sunday to Saturday here, so asking for Sunday
    /// always goes back and asking for Saturday always goes forward.
    pub fn this_weekday(self, day: Weekday) -> Self {
        let d = self.weekday().num_days_from_sunday() as i64 - day.num_days_from_sunday() as i64;
        match d.cmp(&0) {
            Ordering::Equal => self,
            Ordering::Greater => self.sub_days(d),
            Ordering::Less => self.add_days(-d),
        }
    }

    /// The occurrence of `day` in the following week
    pub fn next_weekday(self, day: Weekday) -> Self {
        self.this_weekday(day).add_days(7)
    }

    /// The occurrence of `day` in the previous week
    pub fn last_weekday(self, day: Weekday) -> Self {
        self.this_weekday(day).sub_days(7)
    }

    /// The beginning of the first day of the week, where the week
    /// is considered to start on `starts_with` (e.g. `Weekday::Mon`
    /// or `Weekday::Sun`, depending on where you are).
    pub fn first_day_of_week(self, starts_with: Weekday) -> Self {
        self.this_weekday(starts_with).beginning_of_day()
    }

    /* DAY BOUNDARIES */

    /// Sets the time to 00:00:00, keeping the date.
    pub fn beginning_of_day(self) -> Self {
        let elapsed = Components::new(
            self.time.hour() as i64,
            self.time.minute() as i64,
            self.time.second() as i64,
            0,
            0,
            self.time.nanosecond() as i64,
        );
        self.sub_all_components(elapsed)
    }

    /// Sets hours, minutes and seconds to 23:59:59, keeping the date.
    ///
    /// Whatever fraction of a second the instant had is kept as it
    /// was, so `end_of_day` of 10:00:00.25 is 23:59:59.25.
    pub fn end_of_day(self) -> Self {
        self.add_components(Components::hms(
            23 - self.time.hour() as i64,
            59 - self.time.minute() as i64,
            59 - self.time.second() as i64,
        ))
    }

    /* QUERIES */

    /// The time elapsed from `self` until `later`
    pub fn elapsed(&self, later: TimeWarp) -> Elapsed {
        Elapsed::new(later.time.signed_duration_since(self.time))
    }

    /// The time elapsed from `self` until `later`, as something
    /// like `"1h2m3.5s"`. It starts with a `-` if `later` is
    /// actually earlier.
    pub fn since(&self, later: TimeWarp) -> String {
        self.elapsed(later).to_string()
    }

    /// Checks whether this is a Friday
    pub fn is_friday(&self) -> bool {
        self.weekday() == Weekday::Fri
    }

    /// Checks whether this is the 25th of December, of any year.
    pub fn is_christmas(&self) -> bool {
        let day = self.beginning_of_day().time;
        day.month() == 12 && day.day() == 25
    }
}
