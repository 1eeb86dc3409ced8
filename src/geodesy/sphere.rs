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

//! The sphere module contains the parameters of the spherical Earth model
//! used for great circle navigation, see the
//! [Aviation Formulary](http://www.edwilliams.org/avform.htm).

use crate::Metres;

/// The mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The mean radius of the Earth in metres.  
/// Great circle angular distances are multiplied by this to give lengths.
pub const EARTH_RADIUS: Metres = Metres(EARTH_RADIUS_KM * 1000.0);

/// A position whose latitude cosine is below this value is treated as
/// being at the North or South pole.
pub const POLE_COS_THRESHOLD: f64 = 1e-11;
