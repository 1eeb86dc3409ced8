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

//! cross-track
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for determining where a position lies relative to a
//! [great circle](https://en.wikipedia.org/wiki/Great_circle) track on a
//! spherical Earth.
//!
//! ## Cross track navigation
//!
//! A track is the great circle arc from a start position to an end position.
//! Given the position of an aircraft (the "plane") and a track, the library
//! calculates:
//!
//! - the length of the track;
//! - the bearing of the track from North, in radians and degrees;
//! - the cross track distance of the plane from the track;
//! - and whether the plane is to the left of, to the right of, or on the track.
//!
//! The formulae are from Ed Williams'
//! [Aviation Formulary](http://www.edwilliams.org/avform.htm) and use a
//! spherical Earth with a radius of 6371 km, see the [`geodesy`] module.
//!
//! ## Design
//!
//! Every calculation is a pure function of its input positions: nothing is
//! cached and no state is shared, so a result can be recalculated whenever
//! a position changes.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [log](https://crates.io/crates/log) - to report classifications and
//!   rejected input;
//! - [serde_json](https://crates.io/crates/serde_json) - to export a track
//!   scenario as `GeoJSON`, see the [`geojson`] module.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications, it requires `alloc` for its
//! text and `GeoJSON` output.
//!
//! # Examples
//! ```
//! use cross_track::*;
//!
//! let plane = LatLong::new(Degrees(39.570), Degrees(-105.030));
//! let track_start = LatLong::new(Degrees(39.55934984624357), Degrees(-105.03045558929443));
//! let track_end = LatLong::new(Degrees(39.57426600071248), Degrees(-105.01620233058928));
//!
//! let location = classify(&plane, &track_start, &track_end);
//! assert!(location.is_left());
//! assert_eq!("left", location.label());
//!
//! let info = location.info();
//! println!("track length: {:?}", info.track_length());
//! println!("track angle: {:?}", info.track_angle_degrees());
//! println!("cross track distance: {:?}", info.cross_track());
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod display;
pub mod geodesy;
pub mod geojson;

pub use angle_sc::{Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use core::fmt;

/// The values calculated for a plane position and a track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackInfo {
    /// The great circle length of the track.
    track_length: Metres,
    /// The bearing of the track from North, in the range [0, 2π).
    track_angle: Radians,
    /// The bearing of the track from North in degrees, in the range [0, 360).
    track_angle_degrees: Degrees,
    /// The cross track distance of the plane, positive to the left of the track.
    cross_track: Metres,
}

impl TrackInfo {
    /// Constructor.
    /// * `track_length` - the great circle length of the track.
    /// * `track_angle` - the bearing of the track from North.
    /// * `track_angle_degrees` - the bearing of the track from North in degrees.
    /// * `cross_track` - the cross track distance of the plane.
    #[must_use]
    pub const fn new(
        track_length: Metres,
        track_angle: Radians,
        track_angle_degrees: Degrees,
        cross_track: Metres,
    ) -> Self {
        Self {
            track_length,
            track_angle,
            track_angle_degrees,
            cross_track,
        }
    }

    /// Accessor for the great circle length of the track.
    #[must_use]
    pub const fn track_length(&self) -> Metres {
        self.track_length
    }

    /// The great circle length of the track in nautical miles.
    #[must_use]
    pub fn track_length_nm(&self) -> NauticalMiles {
        NauticalMiles::from(self.track_length)
    }

    /// Accessor for the bearing of the track from North.
    #[must_use]
    pub const fn track_angle(&self) -> Radians {
        self.track_angle
    }

    /// Accessor for the bearing of the track from North in degrees.
    #[must_use]
    pub const fn track_angle_degrees(&self) -> Degrees {
        self.track_angle_degrees
    }

    /// Accessor for the cross track distance, positive to the left of the track.
    #[must_use]
    pub const fn cross_track(&self) -> Metres {
        self.cross_track
    }

    /// Whether all of the values are finite, i.e. the track was not degenerate.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.track_length.0.is_finite()
            && self.track_angle.0.is_finite()
            && self.track_angle_degrees.0.is_finite()
            && self.cross_track.0.is_finite()
    }
}

/// Where a plane is relative to a track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocationRelativeToTrack {
    /// The plane is to the left of the track.
    Left(TrackInfo),
    /// The plane is to the right of the track.
    Right(TrackInfo),
    /// The plane is on the track.
    OnLine(TrackInfo),
}

impl LocationRelativeToTrack {
    /// Accessor for the `TrackInfo` of every variant.
    #[must_use]
    pub const fn info(&self) -> &TrackInfo {
        match self {
            Self::Left(info) | Self::Right(info) | Self::OnLine(info) => info,
        }
    }

    /// The human readable name of the variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Left(_) => "left",
            Self::Right(_) => "right",
            Self::OnLine(_) => "on line",
        }
    }

    /// Whether the plane is to the left of the track.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether the plane is to the right of the track.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Whether the plane is on the track.
    #[must_use]
    pub const fn is_on_line(&self) -> bool {
        matches!(self, Self::OnLine(_))
    }
}

impl fmt::Display for LocationRelativeToTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The positions that describe a plane and a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The plane position.
    Plane,
    /// The start of the track.
    TrackStart,
    /// The end of the track.
    TrackEnd,
}

impl Point {
    /// The name of the point.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::TrackStart => "track start",
            Self::TrackEnd => "track end",
        }
    }
}

/// The reasons that `Classifier::try_classify` rejects its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackError {
    /// A latitude or longitude is out of range.
    InvalidPosition(Point),
    /// The start and end of the track are at the same position.
    DegenerateTrack,
    /// A calculated value is not finite, e.g. the track is antipodal.
    NonFinite,
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(point) => write!(f, "invalid {} position", point.name()),
            Self::DegenerateTrack => f.write_str("track start and end are coincident"),
            Self::NonFinite => f.write_str("track values are not finite"),
        }
    }
}

impl core::error::Error for TrackError {}

/// Classifies plane positions relative to a track.
///
/// The default `Classifier` reports a plane as on the track only when its
/// cross track distance is exactly zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classifier {
    /// The magnitude of cross track distance treated as on the track.
    on_line_tolerance: Metres,
}

impl Classifier {
    /// Construct a `Classifier` with a zero `on_line_tolerance`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_line_tolerance: Metres(0.0),
        }
    }

    /// Set the cross track distance within which a plane is on the track.
    /// * `tolerance` - the tolerance, its sign is ignored.
    #[must_use]
    pub fn with_on_line_tolerance(mut self, tolerance: Metres) -> Self {
        self.on_line_tolerance = Metres(libm::fabs(tolerance.0));
        self
    }

    /// Accessor for the `on_line_tolerance`.
    #[must_use]
    pub const fn on_line_tolerance(&self) -> Metres {
        self.on_line_tolerance
    }

    /// Calculate where a plane is relative to a track.
    ///
    /// The track must not have coincident start and end positions,
    /// otherwise the `TrackInfo` values are `NaN` and the plane is
    /// reported as `OnLine`.
    /// * `plane` - the plane position.
    /// * `track_start`, `track_end` - the start and end of the track.
    #[must_use]
    pub fn classify(
        &self,
        plane: &LatLong,
        track_start: &LatLong,
        track_end: &LatLong,
    ) -> LocationRelativeToTrack {
        let track_angle = geodesy::bearing_to_north(track_start, track_end);
        let info = TrackInfo::new(
            geodesy::distance(track_start, track_end),
            track_angle,
            geodesy::radians_to_degrees(track_angle),
            geodesy::cross_track_error(plane, track_start, track_end),
        );

        let xtd = info.cross_track().0;
        let location = if xtd > self.on_line_tolerance.0 {
            LocationRelativeToTrack::Left(info)
        } else if xtd < -self.on_line_tolerance.0 {
            LocationRelativeToTrack::Right(info)
        } else {
            LocationRelativeToTrack::OnLine(info)
        };
        log::trace!("plane is {location}, cross track: {xtd} m");
        location
    }

    /// Calculate where a plane is relative to a track, rejecting input that
    /// would give undefined values.
    ///
    /// A plane at the start of the track is `OnLine` with a zero cross
    /// track distance, whereas `classify` reports a `NaN` cross track
    /// distance for it.
    /// * `plane` - the plane position.
    /// * `track_start`, `track_end` - the start and end of the track.
    ///
    /// # Errors
    ///
    /// Returns `TrackError::InvalidPosition` if a position is out of range,
    /// `TrackError::DegenerateTrack` if the track has no length and
    /// `TrackError::NonFinite` if any calculated value is not finite.
    pub fn try_classify(
        &self,
        plane: &LatLong,
        track_start: &LatLong,
        track_end: &LatLong,
    ) -> Result<LocationRelativeToTrack, TrackError> {
        let positions = [
            (Point::Plane, plane),
            (Point::TrackStart, track_start),
            (Point::TrackEnd, track_end),
        ];
        if let Some((point, _)) = positions
            .iter()
            .find(|(_, position)| !position.is_valid())
        {
            log::warn!("rejected invalid {} position", point.name());
            return Err(TrackError::InvalidPosition(*point));
        }

        if geodesy::angular_distance(track_start, track_end).0 <= 0.0 {
            log::warn!("rejected zero length track");
            return Err(TrackError::DegenerateTrack);
        }

        let location = self.classify(plane, track_start, track_end);

        // the course to a plane at the track start is undefined
        let location = if geodesy::angular_distance(track_start, plane).0 <= 0.0 {
            let info = location.info();
            LocationRelativeToTrack::OnLine(TrackInfo::new(
                info.track_length(),
                info.track_angle(),
                info.track_angle_degrees(),
                Metres(0.0),
            ))
        } else {
            location
        };
        finite_or_error(location)
    }
}

/// Return `location` if all of its values are finite.
fn finite_or_error(
    location: LocationRelativeToTrack,
) -> Result<LocationRelativeToTrack, TrackError> {
    if location.info().is_finite() {
        Ok(location)
    } else {
        log::warn!("rejected track, values are not finite: {:?}", location.info());
        Err(TrackError::NonFinite)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate where a plane is relative to a track.
///
/// The plane is `Left` of the track if its cross track distance is positive,
/// `Right` if it is negative and `OnLine` otherwise.
/// * `plane` - the plane position.
/// * `track_start`, `track_end` - the start and end of the track, they must
///   not be coincident.
///
/// # Examples
/// ```
/// use cross_track::*;
///
/// let track_start = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let track_end = LatLong::new(Degrees(0.0), Degrees(1.0));
///
/// let plane = LatLong::new(Degrees(-0.1), Degrees(0.5));
/// let location = classify(&plane, &track_start, &track_end);
/// assert!(location.is_right());
/// assert_eq!(90.0, location.info().track_angle_degrees().0.round());
/// ```
#[must_use]
pub fn classify(
    plane: &LatLong,
    track_start: &LatLong,
    track_end: &LatLong,
) -> LocationRelativeToTrack {
    Classifier::new().classify(plane, track_start, track_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use core::f64::consts::PI;

    fn plane() -> LatLong {
        LatLong::new(Degrees(39.57426600071248), Degrees(-105.01620233058928))
    }

    fn track_start() -> LatLong {
        LatLong::new(Degrees(39.55934984624357), Degrees(-105.03045558929443))
    }

    fn track_end() -> LatLong {
        LatLong::new(Degrees(39.57426600071248), Degrees(-105.01620233058928))
    }

    #[test]
    fn test_classify_plane_at_track_end() {
        let location = classify(&plane(), &track_start(), &track_end());
        assert!(location.is_on_line());
        assert_eq!("on line", location.label());

        let info = location.info();
        assert_eq!(0.0, info.cross_track().0);
        assert!(is_within_tolerance(2060.015312779759, info.track_length().0, 1e-6));
        assert!(is_within_tolerance(0.6348056436624177, info.track_angle().0, 1e-12));
        assert!(is_within_tolerance(
            36.37168419294218,
            info.track_angle_degrees().0,
            1e-10
        ));

        let expected = geodesy::angular_distance(&track_start(), &track_end()).0 * 6_371_000.0;
        assert_eq!(expected, info.track_length().0);
    }

    #[test]
    fn test_classify_left_and_right() {
        let left = LatLong::new(Degrees(39.570), Degrees(-105.030));
        let location = classify(&left, &track_start(), &track_end());
        assert!(location.is_left());
        assert!(is_within_tolerance(670.8381468057078, location.info().cross_track().0, 1e-6));

        let right = LatLong::new(Degrees(39.560), Degrees(-105.015));
        let location = classify(&right, &track_start(), &track_end());
        assert!(location.is_right());
        assert_eq!("right", location.to_string());
        assert!(is_within_tolerance(-1023.8976644253396, location.info().cross_track().0, 1e-6));
    }

    #[test]
    fn test_classify_variant_matches_sign() {
        let start = LatLong::new(Degrees(10.0), Degrees(20.0));
        let end = LatLong::new(Degrees(12.0), Degrees(23.0));
        for i in -20..=20 {
            for j in -5..=5 {
                let plane = LatLong::new(
                    Degrees(11.0 + f64::from(i) * 0.1),
                    Degrees(21.45 + f64::from(j) * 0.3),
                );
                let location = classify(&plane, &start, &end);
                let xtd = location.info().cross_track().0;
                assert_eq!(xtd > 0.0, location.is_left());
                assert_eq!(xtd < 0.0, location.is_right());
                assert_eq!(!(xtd > 0.0 || xtd < 0.0), location.is_on_line());
                assert!(xtd.is_finite());

                let angle = location.info().track_angle().0;
                assert!((0.0..2.0 * PI).contains(&angle));
                assert_eq!(angle * 180.0 / PI, location.info().track_angle_degrees().0);
            }
        }
    }

    #[test]
    fn test_classify_midpoint() {
        let start = LatLong::new(Degrees(0.0), Degrees(0.0));
        let end = LatLong::new(Degrees(0.0), Degrees(2.0));
        let middle = LatLong::new(Degrees(0.0), Degrees(1.0));

        let location = classify(&middle, &start, &end);
        assert!(libm::fabs(location.info().cross_track().0) < 1e-9);
    }

    #[test]
    fn test_classifier_on_line_tolerance() {
        let left = LatLong::new(Degrees(39.570), Degrees(-105.030));

        let classifier = Classifier::default();
        assert_eq!(Classifier::new(), classifier);
        assert_eq!(0.0, classifier.on_line_tolerance().0);
        assert!(classifier.classify(&left, &track_start(), &track_end()).is_left());

        let classifier = Classifier::new().with_on_line_tolerance(Metres(-1000.0));
        assert_eq!(1000.0, classifier.on_line_tolerance().0);
        let location = classifier.classify(&left, &track_start(), &track_end());
        assert!(location.is_on_line());
        assert_eq!(
            classify(&left, &track_start(), &track_end()).info(),
            location.info()
        );

        let classifier = Classifier::new().with_on_line_tolerance(Metres(100.0));
        assert!(classifier.classify(&left, &track_start(), &track_end()).is_left());
    }

    #[test]
    fn test_classify_degenerate_track() {
        let location = classify(&plane(), &track_start(), &track_start());
        assert!(location.is_on_line());
        assert!(!location.info().is_finite());
        assert_eq!(0.0, location.info().track_length().0);
    }

    #[test]
    fn test_try_classify() {
        let classifier = Classifier::new();

        let result = classifier.try_classify(&plane(), &track_start(), &track_end());
        assert_eq!(Ok(classify(&plane(), &track_start(), &track_end())), result);

        let result = classifier.try_classify(&plane(), &track_start(), &track_start());
        assert_eq!(Err(TrackError::DegenerateTrack), result);

        let invalid = LatLong::new(Degrees(91.0), Degrees(0.0));
        let result = classifier.try_classify(&plane(), &invalid, &track_end());
        assert_eq!(Err(TrackError::InvalidPosition(Point::TrackStart)), result);

        let invalid = LatLong::new(Degrees(0.0), Degrees(-180.5));
        let result = classifier.try_classify(&invalid, &track_start(), &track_end());
        assert_eq!(Err(TrackError::InvalidPosition(Point::Plane)), result);
    }

    #[test]
    fn test_try_classify_plane_at_track_start() {
        let location = classify(&track_start(), &track_start(), &track_end());
        assert!(location.is_on_line());
        assert!(location.info().cross_track().0.is_nan());

        let result = Classifier::new().try_classify(&track_start(), &track_start(), &track_end());
        let Ok(location) = result else {
            panic!("unexpected result: {result:?}");
        };
        assert!(location.is_on_line());
        assert!(location.info().is_finite());
        assert_eq!(0.0, location.info().cross_track().0);
        assert!(is_within_tolerance(2060.015312779759, location.info().track_length().0, 1e-6));

        // A plane at the end of the track is on the track too.
        let result = Classifier::new().try_classify(&track_end(), &track_start(), &track_end());
        assert_eq!(Ok(classify(&track_end(), &track_start(), &track_end())), result);
    }

    #[test]
    fn test_finite_or_error() {
        let location = classify(&plane(), &track_start(), &track_end());
        assert_eq!(Ok(location), finite_or_error(location));

        let info = TrackInfo::new(Metres(1.0), Radians(0.0), Degrees(0.0), Metres(f64::NAN));
        let result = finite_or_error(LocationRelativeToTrack::OnLine(info));
        assert_eq!(Err(TrackError::NonFinite), result);

        let info = TrackInfo::new(Metres(1.0), Radians(f64::INFINITY), Degrees(0.0), Metres(2.0));
        let result = finite_or_error(LocationRelativeToTrack::Left(info));
        assert_eq!(Err(TrackError::NonFinite), result);
    }

    #[test]
    fn test_validate_positions() {
        assert!(LatLong::new(Degrees(90.0), Degrees(180.0)).is_valid());
        assert!(LatLong::new(Degrees(-90.0), Degrees(-180.0)).is_valid());
        assert!(!LatLong::new(Degrees(90.5), Degrees(0.0)).is_valid());
        assert!(!LatLong::new(Degrees(0.0), Degrees(-180.5)).is_valid());

        let invalid = LatLong::new(Degrees(0.0), Degrees(181.0));
        let result = Classifier::new().try_classify(&plane(), &track_start(), &invalid);
        assert_eq!(Err(TrackError::InvalidPosition(Point::TrackEnd)), result);
    }

    #[test]
    fn test_track_error_display() {
        assert_eq!(
            "invalid track end position",
            TrackError::InvalidPosition(Point::TrackEnd).to_string()
        );
        assert_eq!(
            "track start and end are coincident",
            TrackError::DegenerateTrack.to_string()
        );
        assert_eq!("track values are not finite", TrackError::NonFinite.to_string());
    }

    #[test]
    fn test_track_info_traits() {
        let info = *classify(&plane(), &track_start(), &track_end()).info();
        let info_clone = info;
        assert_eq!(info_clone, info);
        assert!(info.is_finite());
        assert!(is_within_tolerance(
            2060.015312779759 / 1852.0,
            info.track_length_nm().0,
            1e-9
        ));

        println!("TrackInfo: {:?}", info);
    }
}
