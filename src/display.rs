// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The display module contains the text presentation of positions and
//! `LocationRelativeToTrack` results.
//!
//! Numbers are shown with up to seven fractional digits and a `.` decimal
//! separator, without trailing zeros or digit grouping.

use crate::{LatLong, LocationRelativeToTrack};
use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

/// The maximum number of fractional digits shown by `format_value`.
pub const MAX_FRACTION_DIGITS: usize = 7;

/// Format a number with at most `MAX_FRACTION_DIGITS` fractional digits.
/// * `value` - the number to format.
/// # Examples
/// ```
/// use cross_track::display::format_value;
///
/// assert_eq!("2060.0153128", format_value(2060.015312779759));
/// assert_eq!("1.5", format_value(1.5));
/// assert_eq!("-42", format_value(-42.0));
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "+∞" } else { "-∞" }.to_string();
    }

    let text = format!("{value:.precision$}", precision = MAX_FRACTION_DIGITS);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    // values that round to zero
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Format the latitude and longitude of a position.
/// * `position` - the position.
///
/// returns the latitude and longitude text.
#[must_use]
pub fn format_lat_long(position: &LatLong) -> (String, String) {
    (format_value(position.lat().0), format_value(position.lon().0))
}

/// The text of the fields that present a `LocationRelativeToTrack`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    /// The track length in metres, e.g. "2060.0153128m".
    pub track_length: String,
    /// The track angle in radians, e.g. "0.6348056".
    pub track_angle_rad: String,
    /// The track angle in degrees at full precision, e.g. "36.37168419294218°".
    pub track_angle_degrees: String,
    /// The cross track distance in metres, e.g. "-1023.8976644m".
    pub cross_track: String,
    /// The side of the track: "left", "right" or "on line".
    pub answer: &'static str,
}

impl From<&LocationRelativeToTrack> for Readout {
    fn from(location: &LocationRelativeToTrack) -> Self {
        let info = location.info();
        Self {
            track_length: format!("{}m", format_value(info.track_length().0)),
            track_angle_rad: format_value(info.track_angle().0),
            track_angle_degrees: format!("{:?}°", info.track_angle_degrees().0),
            cross_track: format!("{}m", format_value(info.cross_track().0)),
            answer: location.label(),
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "track length: {}", self.track_length)?;
        writeln!(f, "track angle: {} rad", self.track_angle_rad)?;
        writeln!(f, "track angle: {}", self.track_angle_degrees)?;
        writeln!(f, "cross track: {}", self.cross_track)?;
        write!(f, "answer: {}", self.answer)
    }
}
