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

use chrono::TimeDelta;
use std::fmt;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// The time elapsed between two instants, printed in a compact
/// human-readable way.
///
/// Durations of at least a second are printed as hours, minutes
/// and (fractional) seconds, omitting leading zero units. Shorter
/// durations use the largest unit that keeps a whole part.
///
/// ```
/// use calendar::Elapsed;
/// use chrono::TimeDelta;
///
/// assert_eq!(Elapsed::new(TimeDelta::seconds(3725)).to_string(), "1h2m5s");
/// assert_eq!(Elapsed::new(TimeDelta::milliseconds(1500)).to_string(), "1.5s");
/// assert_eq!(Elapsed::new(TimeDelta::microseconds(1500)).to_string(), "1.5ms");
/// assert_eq!(Elapsed::new(TimeDelta::zero()).to_string(), "0s");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elapsed(TimeDelta);

impl Elapsed {
    /// Wraps a duration
    pub fn new(delta: TimeDelta) -> Self {
        Self(delta)
    }

    /// The wrapped duration
    pub fn delta(&self) -> TimeDelta {
        self.0
    }

    /// Total nanoseconds; wide enough for any TimeDelta.
    fn total_nanos(&self) -> i128 {
        // subsec_nanos carries the same sign as num_seconds
        self.0.num_seconds() as i128 * NANOS_PER_SECOND as i128 + self.0.subsec_nanos() as i128
    }
}

impl From<TimeDelta> for Elapsed {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

/// Prints `value / 10^precision` with the trailing zeros of the
/// fraction removed (and no dot at all if the fraction is zero).
fn with_fraction(value: u128, precision: u32) -> String {
    let scale = 10u128.pow(precision);
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", fraction, width = precision as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_nanos();
        if total == 0 {
            return f.write_str("0s");
        }
        if total < 0 {
            f.write_str("-")?;
        }
        let nanos = total.unsigned_abs();

        if nanos < NANOS_PER_MICRO {
            return write!(f, "{}ns", nanos);
        }
        if nanos < NANOS_PER_MILLI {
            return write!(f, "{}µs", with_fraction(nanos, 3));
        }
        if nanos < NANOS_PER_SECOND {
            return write!(f, "{}ms", with_fraction(nanos, 6));
        }

        let seconds = nanos / NANOS_PER_SECOND;
        let sub_second = nanos % NANOS_PER_SECOND;
        let minutes = seconds / 60;
        let hours = minutes / 60;

        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if minutes > 0 {
            write!(f, "{}m", minutes % 60)?;
        }
        write!(
            f,
            "{}s",
            with_fraction((seconds % 60) * NANOS_PER_SECOND + sub_second, 9)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(delta: TimeDelta) -> String {
        Elapsed::new(delta).to_string()
    }

    #[test]
    fn test_zero() {
        assert_eq!(show(TimeDelta::zero()), "0s");
    }

    #[test]
    fn test_below_a_second() {
        assert_eq!(show(TimeDelta::nanoseconds(1)), "1ns");
        assert_eq!(show(TimeDelta::nanoseconds(999)), "999ns");
        assert_eq!(show(TimeDelta::microseconds(1)), "1µs");
        assert_eq!(show(TimeDelta::nanoseconds(1_100)), "1.1µs");
        assert_eq!(show(TimeDelta::milliseconds(2)), "2ms");
        assert_eq!(show(TimeDelta::microseconds(2_250)), "2.25ms");
        assert_eq!(show(TimeDelta::nanoseconds(999_999_999)), "999.999999ms");
    }

    #[test]
    fn test_seconds_minutes_hours() {
        assert_eq!(show(TimeDelta::seconds(1)), "1s");
        assert_eq!(show(TimeDelta::milliseconds(61_500)), "1m1.5s");
        assert_eq!(show(TimeDelta::seconds(60)), "1m0s");
        assert_eq!(show(TimeDelta::hours(1)), "1h0m0s");
        assert_eq!(show(TimeDelta::hours(72) + TimeDelta::minutes(3)), "72h3m0s");
        assert_eq!(
            show(TimeDelta::seconds(1) + TimeDelta::nanoseconds(1)),
            "1.000000001s"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(show(TimeDelta::minutes(-90)), "-1h30m0s");
        assert_eq!(show(TimeDelta::milliseconds(-1500)), "-1.5s");
        assert_eq!(show(TimeDelta::nanoseconds(-5)), "-5ns");
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        // More nanoseconds than an i64 can hold
        let s = show(TimeDelta::max_value());
        assert!(s.ends_with('s'));
        assert!(show(TimeDelta::min_value()).starts_with('-'));
    }

    #[test]
    fn test_delta_accessor() {
        let d = TimeDelta::seconds(42);
        assert_eq!(Elapsed::from(d).delta(), d);
    }
}
