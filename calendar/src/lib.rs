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

//! Calendar arithmetic on top of `chrono`. A [`TimeWarp`] wraps an
//! instant and gives back new instants, moved by durations, snapped
//! to the beginning or end of their day, or to some other day of
//! their week. Everything is chainable:
//!
//! ```
//! use calendar::{warp, Components};
//! use chrono::{TimeZone, Utc, Weekday};
//!
//! let t = warp(Utc.with_ymd_and_hms(2023, 6, 14, 15, 30, 0).unwrap());
//! let meeting = t
//!     .next_weekday(Weekday::Tue)
//!     .beginning_of_day()
//!     .add_components(Components::hms(9, 30, 0));
//! assert_eq!(meeting, warp(Utc.with_ymd_and_hms(2023, 6, 20, 9, 30, 0).unwrap()));
//! ```
//!
//! There is no notion of timezones beyond the offset the instant
//! carries. **Convert to the desired timezone before warping**.
//!
//! Nothing here reads the system clock implicitly: `now`, `today`,
//! `tomorrow` and `yesterday` receive a [`Clock`], which can be a
//! [`FixedClock`] in tests.
//!
//! ```
//! use calendar::{today, tomorrow, FixedClock, warp};
//! use chrono::{TimeZone, Utc};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2023, 12, 31, 18, 0, 0).unwrap());
//! assert_eq!(today(&clock), warp(Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap()));
//! assert_eq!(tomorrow(&clock), warp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
//! ```
//!
//! # Interaction with Serde
//!
//! You can enable the `serde` feature and do stuff like this:
//!
//! ```ignore
//! use calendar::Components;
//! use serde_json; // import "serde_json" and enable feature "serde"
//!
//! let v = r#"{"hours": 2, "minutes": -30}"#;
//! let c : Components = serde_json::from_str(&v).unwrap();
//! assert_eq!(c, Components::hms(2, -30, 0));
//! ```

mod clock;
pub use crate::clock::{Clock, FixedClock, SystemClock, UtcClock};
mod components;
pub use crate::components::{Components, Unit};
mod elapsed;
pub use crate::elapsed::Elapsed;
mod error;
pub use crate::error::WarpError;
mod warp;
pub use crate::warp::{now, today, tomorrow, warp, yesterday, TimeWarp};
