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

use crate::error::WarpError;
use chrono::TimeDelta;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the slots of [`Components`], in the order in which
/// they are scanned.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Hours
    Hours,
    /// Minutes
    Minutes,
    /// Seconds
    Seconds,
    /// Milliseconds
    Millis,
    /// Microseconds
    Micros,
    /// Nanoseconds
    Nanos,
}

impl Unit {
    /// All the units, in scan order.
    pub const ALL: [Unit; 6] = [
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
        Unit::Millis,
        Unit::Micros,
        Unit::Nanos,
    ];

    /// The suffix used when printing a value of this unit
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Hours => "h",
            Unit::Minutes => "m",
            Unit::Seconds => "s",
            Unit::Millis => "ms",
            Unit::Micros => "us",
            Unit::Nanos => "ns",
        }
    }

    /// Builds the duration of `value` units, or `None` if it
    /// does not fit.
    pub fn duration(self, value: i64) -> Option<TimeDelta> {
        match self {
            Unit::Hours => TimeDelta::try_hours(value),
            Unit::Minutes => TimeDelta::try_minutes(value),
            Unit::Seconds => TimeDelta::try_seconds(value),
            Unit::Millis => TimeDelta::try_milliseconds(value),
            // These two can never leave the range of a TimeDelta
            Unit::Micros => Some(TimeDelta::microseconds(value)),
            Unit::Nanos => Some(TimeDelta::nanoseconds(value)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// The pieces of a signed duration. A zero means "do not
/// touch this unit", so a [`Components`] only ever contributes
/// its non-zero slots.
///
/// ```
/// use calendar::Components;
///
/// // Two hours forward and thirty minutes back
/// let c = Components::hms(2, -30, 0);
/// assert_eq!(c.to_duration().unwrap(), chrono::TimeDelta::minutes(90));
///
/// // Named fields work too
/// let c = Components {
///     millis: 250,
///     ..Components::default()
/// };
/// assert_eq!(c.to_duration().unwrap(), chrono::TimeDelta::milliseconds(250));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Components {
    /// Hours
    pub hours: i64,
    /// Minutes
    pub minutes: i64,
    /// Seconds
    pub seconds: i64,
    /// Milliseconds
    pub millis: i64,
    /// Microseconds
    pub micros: i64,
    /// Nanoseconds
    pub nanos: i64,
}

impl Components {
    /// Builds the components positionally: hours, minutes, seconds,
    /// milliseconds, microseconds and nanoseconds.
    pub fn new(
        hours: i64,
        minutes: i64,
        seconds: i64,
        millis: i64,
        micros: i64,
        nanos: i64,
    ) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            millis,
            micros,
            nanos,
        }
    }

    /// Hours, minutes and seconds; everything finer is zero.
    pub fn hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self::new(hours, minutes, seconds, 0, 0, 0)
    }

    /// A number of weeks, expressed in hours.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::TooManyWeeks`] if that many hours do not
    /// fit in a duration.
    pub fn from_weeks(weeks: i64) -> Result<Self, WarpError> {
        weeks
            .checked_mul(7 * 24)
            .filter(|hours| Unit::Hours.duration(*hours).is_some())
            .map(Self::from_hours)
            .ok_or(WarpError::TooManyWeeks { weeks })
    }

    /// A number of days, expressed in hours.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::TooManyDays`] if that many hours do not
    /// fit in a duration.
    pub fn from_days(days: i64) -> Result<Self, WarpError> {
        days.checked_mul(24)
            .filter(|hours| Unit::Hours.duration(*hours).is_some())
            .map(Self::from_hours)
            .ok_or(WarpError::TooManyDays { days })
    }

    /// Only hours
    pub fn from_hours(hours: i64) -> Self {
        Self {
            hours,
            ..Self::default()
        }
    }

    /// Only minutes
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes,
            ..Self::default()
        }
    }

    /// Only seconds
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            ..Self::default()
        }
    }

    /// The value held in a certain slot
    pub fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
            Unit::Millis => self.millis,
            Unit::Micros => self.micros,
            Unit::Nanos => self.nanos,
        }
    }

    /// Checks whether every slot is zero
    pub fn is_zero(&self) -> bool {
        Unit::ALL.iter().all(|u| self.get(*u) == 0)
    }

    /// Counts the slots that hold something other than zero
    pub fn non_zero_count(&self) -> usize {
        Unit::ALL.iter().filter(|u| self.get(**u) != 0).count()
    }

    /// The first slot, in scan order, that is not zero
    pub fn first_non_zero(&self) -> Option<Unit> {
        Unit::ALL.into_iter().find(|u| self.get(*u) != 0)
    }

    /// Sums `value * unit` over every non-zero slot.
    pub fn to_duration(&self) -> Result<TimeDelta, WarpError> {
        self.sum(None)
    }

    /// The duration that subtraction applies: like
    /// [`Components::to_duration`], but with the first non-zero slot
    /// negated and every other slot left as it is.
    ///
    /// This is what subtraction has always done: with more than one
    /// non-zero slot, only the first one gets subtracted and the
    /// rest are still added.
    ///
    /// ```
    /// use calendar::Components;
    /// use chrono::TimeDelta;
    ///
    /// // -2 hours, +30 minutes
    /// let d = Components::hms(2, 30, 0).to_sub_duration().unwrap();
    /// assert_eq!(d, TimeDelta::minutes(-90));
    /// ```
    pub fn to_sub_duration(&self) -> Result<TimeDelta, WarpError> {
        self.sum(self.first_non_zero())
    }

    fn sum(&self, negated: Option<Unit>) -> Result<TimeDelta, WarpError> {
        let mut total = TimeDelta::zero();
        for unit in Unit::ALL {
            let value = self.get(unit);
            if value == 0 {
                continue;
            }
            let overflow = WarpError::ComponentOverflow { unit, value };
            let mut part = unit.duration(value).ok_or_else(|| overflow.clone())?;
            if negated == Some(unit) {
                // Negating the duration and not the value keeps i64::MIN exact
                part = TimeDelta::zero().checked_sub(&part).ok_or(overflow)?;
            }
            total = total
                .checked_add(&part)
                .ok_or(WarpError::DurationOverflow)?;
        }
        Ok(total)
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0s");
        }
        for unit in Unit::ALL {
            let value = self.get(unit);
            if value != 0 {
                write!(f, "{}{}", value, unit)?;
            }
        }
        Ok(())
    }
}
