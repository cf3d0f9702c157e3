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

use crate::components::Unit;
use chrono::{DateTime, FixedOffset, TimeDelta};

/// Everything that can go wrong while warping an instant.
///
/// The plain (non-`checked_`) methods of [`crate::TimeWarp`] panic
/// with the message of one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WarpError {
    /// A single component, multiplied by its unit, does not fit
    /// in a duration.
    #[error("component {value}{unit} does not fit in a duration")]
    ComponentOverflow {
        /// The slot that overflowed
        unit: Unit,
        /// The value that was given for it
        value: i64,
    },

    /// A number of days that does not fit in a duration once
    /// expressed in hours.
    #[error("{days} days do not fit in a duration")]
    TooManyDays {
        /// The number of days that was given
        days: i64,
    },

    /// A number of weeks that does not fit in a duration once
    /// expressed in hours.
    #[error("{weeks} weeks do not fit in a duration")]
    TooManyWeeks {
        /// The number of weeks that was given
        weeks: i64,
    },

    /// Every component fits on its own, but their sum does not.
    #[error("the combined duration overflows")]
    DurationOverflow,

    /// The shifted instant cannot be represented.
    #[error("shifting {instant} by {delta} leaves the representable range")]
    OutOfRange {
        /// The instant before shifting
        instant: DateTime<FixedOffset>,
        /// The duration it was shifted by
        delta: TimeDelta,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_overflow_message() {
        let err = WarpError::ComponentOverflow {
            unit: Unit::Hours,
            value: i64::MAX,
        };
        assert_eq!(
            err.to_string(),
            format!("component {}h does not fit in a duration", i64::MAX)
        );
    }

    #[test]
    fn test_days_and_weeks_messages() {
        assert_eq!(
            WarpError::TooManyDays { days: -5 }.to_string(),
            "-5 days do not fit in a duration"
        );
        assert_eq!(
            WarpError::TooManyWeeks { weeks: 7 }.to_string(),
            "7 weeks do not fit in a duration"
        );
    }

    #[test]
    fn test_duration_overflow_message() {
        assert_eq!(
            WarpError::DurationOverflow.to_string(),
            "the combined duration overflows"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<WarpError>();
    }
}
