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

//! The geodesy module contains the great circle functions used to calculate
//! distances, courses and cross track errors between positions on a
//! spherical Earth.
//!
//! The functions follow the formulae of Ed Williams'
//! [Aviation Formulary](http://www.edwilliams.org/avform.htm).
//! All of them are pure: they take positions by reference and return a value.
//!
//! Note: coincident or antipodal positions are outside the domain of
//! [`initial_course`] and [`cross_track_error`]; they return `NaN` rather
//! than panicking.

#![allow(clippy::suboptimal_flops)]

pub mod sphere;

use crate::{Degrees, LatLong, Metres, Radians};
use core::f64::consts::PI;

/// Convert an angle in degrees to radians.
/// * `angle` - the angle in `Degrees`.
/// # Examples
/// ```
/// use cross_track::{Degrees, geodesy::degrees_to_radians};
///
/// assert_eq!(core::f64::consts::PI, degrees_to_radians(Degrees(180.0)).0);
/// ```
#[must_use]
pub fn degrees_to_radians(angle: Degrees) -> Radians {
    Radians(PI * angle.0 / 180.0)
}

/// Convert an angle in radians to degrees.
/// * `angle` - the angle in `Radians`.
#[must_use]
pub fn radians_to_degrees(angle: Radians) -> Degrees {
    Degrees(angle.0 * 180.0 / PI)
}

/// The latitude and longitude of a position in radians.
fn to_radians(position: &LatLong) -> (f64, f64) {
    (
        degrees_to_radians(position.lat()).0,
        degrees_to_radians(position.lon()).0,
    )
}

/// Calculate the great circle angular distance between a pair of positions.
///
/// Uses the haversine form of the great circle distance formula, which
/// remains accurate for short distances.
/// * `a`, `b` - the positions.
///
/// returns the angular distance in `Radians`, multiply it by the Earth
/// radius to get a length.
/// # Examples
/// ```
/// use cross_track::{Degrees, LatLong, geodesy::angular_distance};
/// use angle_sc::is_within_tolerance;
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let b = LatLong::new(Degrees(0.0), Degrees(90.0));
/// assert!(is_within_tolerance(
///     core::f64::consts::FRAC_PI_2,
///     angular_distance(&a, &b).0,
///     4.0 * f64::EPSILON
/// ));
/// ```
#[must_use]
pub fn angular_distance(a: &LatLong, b: &LatLong) -> Radians {
    let (lat1, lon1) = to_radians(a);
    let (lat2, lon2) = to_radians(b);

    let sin_half_dlat = libm::sin((lat1 - lat2) / 2.0);
    let sin_half_dlon = libm::sin((lon1 - lon2) / 2.0);
    let haversine = sin_half_dlat * sin_half_dlat
        + libm::cos(lat1) * libm::cos(lat2) * sin_half_dlon * sin_half_dlon;
    Radians(2.0 * libm::asin(libm::sqrt(haversine)))
}

/// Calculate the great circle distance between a pair of positions on the
/// spherical Earth.
/// * `a`, `b` - the positions.
///
/// returns the distance in `Metres`.
#[must_use]
pub fn distance(a: &LatLong, b: &LatLong) -> Metres {
    Metres(angular_distance(a, b).0 * sphere::EARTH_RADIUS.0)
}

/// Calculate the initial great circle course from one position to another.
///
/// The course uses the Aviation Formulary convention where longitude is
/// positive West, so for East positive positions it increases anticlockwise
/// from North. It is the course used by [`cross_track_error`].
///
/// If `from` is at a pole the course is `π` at the North pole and `2π` at
/// the South pole, whatever the position of `to`.
/// * `from` - the start position, it must not be the same as `to`.
/// * `to` - the destination position.
///
/// returns the course in `Radians`.
#[must_use]
pub fn initial_course(from: &LatLong, to: &LatLong) -> Radians {
    let (lat1, lon1) = to_radians(from);
    let (lat2, lon2) = to_radians(to);

    let cos_lat1 = libm::cos(lat1);
    if cos_lat1 < sphere::POLE_COS_THRESHOLD {
        return if lat1 > 0.0 {
            Radians(PI)
        } else {
            Radians(2.0 * PI)
        };
    }

    let d = angular_distance(from, to).0;
    let course =
        libm::acos((libm::sin(lat2) - libm::sin(lat1) * libm::cos(d)) / (libm::sin(d) * cos_lat1));
    if libm::sin(lon2 - lon1) < 0.0 {
        Radians(course)
    } else {
        Radians(2.0 * PI - course)
    }
}

/// Calculate the initial great circle bearing from one position to another,
/// measured clockwise from North.
/// * `from`, `to` - the start and destination positions.
///
/// returns the bearing in `Radians`, in the range (-π, π].
#[must_use]
pub fn bearing(from: &LatLong, to: &LatLong) -> Radians {
    let (lat1, lon1) = to_radians(from);
    let (lat2, lon2) = to_radians(to);
    let delta_lon = lon2 - lon1;

    let y = libm::sin(delta_lon) * libm::cos(lat2);
    let x = libm::cos(lat1) * libm::sin(lat2)
        - libm::sin(lat1) * libm::cos(lat2) * libm::cos(delta_lon);
    Radians(libm::atan2(y, x))
}

/// Calculate the initial great circle bearing from one position to another,
/// measured clockwise from North and normalised to the range [0, 2π).
/// * `from`, `to` - the start and destination positions.
/// # Examples
/// ```
/// use cross_track::{Degrees, LatLong, geodesy::bearing_to_north};
/// use angle_sc::is_within_tolerance;
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let west = LatLong::new(Degrees(0.0), Degrees(-1.0));
/// assert!(is_within_tolerance(
///     3.0 * core::f64::consts::FRAC_PI_2,
///     bearing_to_north(&a, &west).0,
///     8.0 * f64::EPSILON
/// ));
/// ```
#[must_use]
pub fn bearing_to_north(from: &LatLong, to: &LatLong) -> Radians {
    const TWO_PI: f64 = 2.0 * PI;
    Radians(libm::fmod(bearing(from, to).0 + TWO_PI, TWO_PI))
}

/// Calculate the cross track error of a position from the great circle
/// track between a pair of positions.
/// * `position` - the position.
/// * `track_start`, `track_end` - the start and end of the track, they must
///   not be coincident.
///
/// returns the perpendicular distance from the track in `Metres`:
/// positive if the position is to the left of the track, negative if it is
/// to the right.
/// # Examples
/// ```
/// use cross_track::{Degrees, LatLong, geodesy::cross_track_error};
///
/// let start = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let end = LatLong::new(Degrees(0.0), Degrees(1.0));
///
/// // North of an Eastbound track is to its left.
/// let position = LatLong::new(Degrees(1.0), Degrees(0.5));
/// assert!(0.0 < cross_track_error(&position, &start, &end).0);
/// ```
#[must_use]
pub fn cross_track_error(position: &LatLong, track_start: &LatLong, track_end: &LatLong) -> Metres {
    let distance_ad = angular_distance(track_start, position).0;
    let course_ad = initial_course(track_start, position).0;
    let course_ab = initial_course(track_start, track_end).0;

    Metres(
        libm::asin(libm::sin(distance_ad) * libm::sin(course_ad - course_ab))
            * sphere::EARTH_RADIUS.0,
    )
}
