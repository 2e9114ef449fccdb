/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! numeric leaf utilities for angles in degrees and radians.
//! All functions are total - out of domain inputs are folded or clamped, never turned into NaN
//! (unless the input already is NaN)

use crate::geo_constants::MAP_BREAK_LON;

#[inline(always)] pub fn deg2rad (deg: f64)->f64 { deg.to_radians() }
#[inline(always)] pub fn rad2deg (rad: f64)->f64 { rad.to_degrees() }

/// wrap longitude degrees into [-180,180]
#[inline]
pub fn normalize_lon (lon: f64) -> f64 {
    let x = lon % 360.0;

    if x < -180.0 { x + 360.0 }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// fold latitude degrees into [-90,90] by reflecting at the poles, which is where a great circle
/// continues when it crosses a pole
#[inline]
pub fn normalize_lat (lat: f64) -> f64 {
    let x = normalize_lon(lat);

    if x > 90.0 { 180.0 - x }
    else if x < -90.0 { -180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// `acos(num/dem)` with the ratio clamped to [-1,1]. Rounding errors can push the ratio
/// slightly outside of the acos domain, which would otherwise produce NaN.
/// A 0/0 ratio is treated as 1 (no angle)
#[inline]
pub fn safe_arccos (num: f64, dem: f64) -> f64 {
    let ratio = num / dem;
    if ratio.is_nan() { 0.0 } else { ratio.clamp( -1.0, 1.0).acos() }
}

/// `asin(x)` with x clamped to [-1,1]
#[inline]
pub fn safe_arcsin (x: f64) -> f64 {
    x.clamp( -1.0, 1.0).asin()
}

/// the two halves of the equirectangular map as seen from the map break meridian.
/// Points on different halves of a footprint indicate the footprint crosses the map border
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum MapHalf {
    West, // [MAP_BREAK_LON, MAP_BREAK_LON+180)
    East  // [MAP_BREAK_LON+180, MAP_BREAK_LON+360]
}

pub fn map_half (lon: f64) -> MapHalf {
    if (lon >= MAP_BREAK_LON && lon < MAP_BREAK_LON + 180.0) || (lon >= MAP_BREAK_LON - 360.0 && lon < MAP_BREAK_LON - 180.0) {
        MapHalf::West
    } else {
        MapHalf::East
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lon () {
        assert_eq!( normalize_lon( 0.0), 0.0);
        assert_eq!( normalize_lon( 180.0), 180.0);
        assert_eq!( normalize_lon( -180.0), -180.0);
        assert_eq!( normalize_lon( 190.0), -170.0);
        assert_eq!( normalize_lon( -190.0), 170.0);
        assert_eq!( normalize_lon( 725.0), 5.0);
        assert_eq!( normalize_lon( -725.0), -5.0);
        assert!( normalize_lon( f64::INFINITY).is_nan()); // no endless wrapping
    }

    #[test]
    fn test_normalize_lat () {
        assert_eq!( normalize_lat( 45.0), 45.0);
        assert_eq!( normalize_lat( 90.0), 90.0);
        assert_eq!( normalize_lat( 100.0), 80.0);
        assert_eq!( normalize_lat( -100.0), -80.0);
        assert_eq!( normalize_lat( -90.0), -90.0);
    }

    #[test]
    fn test_safe_arccos () {
        assert_eq!( safe_arccos( 1.0 + 1e-12, 1.0), 0.0);
        assert_eq!( safe_arccos( -1.0 - 1e-12, 1.0), std::f64::consts::PI);
        assert_eq!( safe_arccos( 5.0, 0.0), 0.0); // +inf is clamped
        assert_eq!( safe_arccos( 0.0, 0.0), 0.0);
        assert!( (safe_arccos( 0.0, 2.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_map_half () {
        assert_eq!( map_half( -180.0), MapHalf::West);
        assert_eq!( map_half( -0.5), MapHalf::West);
        assert_eq!( map_half( 0.0), MapHalf::East);
        assert_eq!( map_half( 179.9), MapHalf::East);
        assert_eq!( map_half( 180.0), MapHalf::East);
    }
}
