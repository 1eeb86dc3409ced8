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

//! The geojson module exports a plane and track as a
//! [GeoJSON](https://datatracker.ietf.org/doc/html/rfc7946) `FeatureCollection`,
//! so that it can be previewed with tools such as <https://geojson.io/>.

use crate::{classify, Degrees, LatLong, LocationRelativeToTrack};
use alloc::string::{String, ToString};
use serde_json::{json, Value};

/// The position of a plane and the start and end of a track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    /// The plane position.
    pub plane: LatLong,
    /// The start of the track.
    pub track_start: LatLong,
    /// The end of the track.
    pub track_end: LatLong,
}

impl Default for Scenario {
    /// A track near Denver, with the plane at the end of the track.
    fn default() -> Self {
        let track_end = LatLong::new(Degrees(39.57426600071248), Degrees(-105.01620233058928));
        Self {
            plane: track_end,
            track_start: LatLong::new(Degrees(39.55934984624357), Degrees(-105.03045558929443)),
            track_end,
        }
    }
}

/// A `GeoJSON` position: longitude first.
fn coordinates(position: &LatLong) -> Value {
    json!([position.lon().0, position.lat().0])
}

impl Scenario {
    /// Constructor.
    /// * `plane` - the plane position.
    /// * `track_start`, `track_end` - the start and end of the track.
    #[must_use]
    pub const fn new(plane: LatLong, track_start: LatLong, track_end: LatLong) -> Self {
        Self {
            plane,
            track_start,
            track_end,
        }
    }

    /// Calculate where the plane is relative to the track.
    #[must_use]
    pub fn classify(&self) -> LocationRelativeToTrack {
        classify(&self.plane, &self.track_start, &self.track_end)
    }

    /// The scenario as a `GeoJSON` `FeatureCollection` containing the track
    /// as a `LineString`, and the plane and track end as `Point`s.
    /// # Examples
    /// ```
    /// use cross_track::geojson::Scenario;
    ///
    /// let value = Scenario::default().to_geojson();
    /// assert_eq!("FeatureCollection", value["type"]);
    /// assert_eq!(3, value["features"].as_array().map_or(0, Vec::len));
    /// ```
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {
                        "stroke": "#555555",
                        "stroke-width": 2.1,
                        "stroke-opacity": 1
                    },
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [
                            coordinates(&self.track_start),
                            coordinates(&self.track_end)
                        ]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {
                        "marker-color": "#7e7e7e",
                        "marker-size": "medium",
                        "marker-symbol": "airport"
                    },
                    "geometry": {
                        "type": "Point",
                        "coordinates": coordinates(&self.plane)
                    }
                },
                {
                    "type": "Feature",
                    "properties": {
                        "marker-color": "#7e7e7e",
                        "marker-size": "medium",
                        "marker-symbol": "triangle-stroked",
                        "it_is_end": ""
                    },
                    "geometry": {
                        "type": "Point",
                        "coordinates": coordinates(&self.track_end)
                    }
                }
            ]
        })
    }

    /// The scenario as `GeoJSON` text.
    #[must_use]
    pub fn to_geojson_string(&self) -> String {
        self.to_geojson().to_string()
    }
}
