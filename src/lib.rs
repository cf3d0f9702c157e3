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

#![deny(missing_docs)]

//! `timewarp` is a small layer of calendar arithmetic over `chrono`:
//! chainable operations to move an instant by durations, find days
//! of its week, and snap it to the edges of its day.
//!
//! ```
//! use timewarp::{warp, Weekday};
//! use chrono::{TimeZone, Utc};
//!
//! // Convert to the desired timezone before warping!
//! let now = warp(Utc.with_ymd_and_hms(2023, 6, 14, 15, 30, 0).unwrap());
//!
//! assert_eq!(now.yesterday().to_string(), "2023-06-13 15:30:00 +00:00");
//! assert_eq!(now.first_day_of_week(Weekday::Mon).to_string(), "2023-06-12 00:00:00 +00:00");
//! assert_eq!(now.next_weekday(Weekday::Tue).sub_minutes(2).to_string(), "2023-06-20 15:28:00 +00:00");
//! assert_eq!(now.end_of_day().to_string(), "2023-06-14 23:59:59 +00:00");
//! ```
//!
//! All the work happens in the `calendar` crate; this one only
//! gathers its public surface in one place.

// Re-exports
pub use calendar::{
    now, today, tomorrow, warp, yesterday, Clock, Components, Elapsed, FixedClock, SystemClock,
    TimeWarp, Unit, UtcClock, WarpError,
};
pub use chrono::Weekday;
