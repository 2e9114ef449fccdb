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

//! geographic point type used for footprint and ground track geometries, together with the
//! spherical distance functions needed to decide pole coverage.
//! GeoPoint wraps a `geo::Point` (x = longitude, y = latitude degrees) so that results can be handed
//! to algorithms of the [geo](https://docs.rs/geo/latest/geo/index.html) crate without copying

use std::fmt;
use geo::{Distance, HaversineMeasure, Point};
use serde::{Serialize,Deserialize};
use serde::ser::{Serializer, SerializeStruct};
use serde::de::Deserializer;

use crate::angle::{normalize_lat, normalize_lon};
use crate::geo_constants::{MEAN_EARTH_RADIUS_KM, NORTH_POLE_LAT, SOUTH_POLE_LAT};

/* #region GeoPoint ***********************************************************************************************/

/// immutable lon/lat value in degrees. Constructors normalize into lon [-180,180], lat [-90,90]
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point<f64>);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_lon(lon), normalize_lat(lat)))
    }

    /// ground track samples come as (lat,lon) pairs
    pub fn from_lat_lon_degrees (lat: f64, lon: f64) -> Self {
        GeoPoint::from_lon_lat_degrees( lon, lat)
    }

    #[inline] pub fn lon (&self) -> f64 { self.0.x() }
    #[inline] pub fn lat (&self) -> f64 { self.0.y() }

    /// copy with replaced longitude (normalized)
    pub fn with_lon (&self, lon: f64) -> Self { GeoPoint::from_lon_lat_degrees( lon, self.lat()) }

    pub fn point (&self) -> &Point<f64> { &self.0 }

    pub fn is_finite (&self) -> bool { self.0.x().is_finite() && self.0.y().is_finite() }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lon(), self.lat())
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from (p: GeoPoint) -> Self { p.0 }
}

impl From<(f64,f64)> for GeoPoint {
    /// note the tuple order is (lat,lon), which is how track samples are stored
    fn from (lat_lon: (f64,f64)) -> Self { GeoPoint::from_lat_lon_degrees( lat_lon.0, lat_lon.1) }
}

impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.lon())?;
        state.serialize_field("lat", &self.lat())?;
        state.end()
    }
}

// we accept "lon"/"longitude"/"x" and "lat"/"latitude"/"y" so that geo and GeoJSON-ish sources can be read directly
#[derive(Deserialize)]
struct LonLatDegrees {
    #[serde(alias="longitude", alias="x")]
    lon: f64,
    #[serde(alias="latitude", alias="y")]
    lat: f64
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<GeoPoint, D::Error> where D: Deserializer<'de> {
        let ll = LonLatDegrees::deserialize( deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat))
    }
}

/* #endregion GeoPoint */

/* #region spherical distances ************************************************************************************/

/// great circle distance in km on a sphere with the given radius (all angles in degrees)
pub fn haversine_distance_with_radius (lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius_km: f64) -> f64 {
    HaversineMeasure::new( radius_km).distance( Point::new( lon1, lat1), Point::new( lon2, lat2))
}

/// great circle distance in km on the mean earth sphere (6371 km)
#[inline]
pub fn haversine_distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance_with_radius( lat1, lon1, lat2, lon2, MEAN_EARTH_RADIUS_KM)
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum CoveredPole { North, South }

impl CoveredPole {
    pub fn latitude (&self) -> f64 {
        match self {
            CoveredPole::North => NORTH_POLE_LAT,
            CoveredPole::South => SOUTH_POLE_LAT
        }
    }

    /// the pole row a pole-covering footprint is pinned to. This follows the hemisphere of the
    /// sub-satellite point, which is the pole that is covered unless the footprint covers both
    pub fn for_sub_satellite_lat (lat: f64) -> Self {
        if lat > 0.0 { CoveredPole::North } else { CoveredPole::South }
    }
}

pub fn north_pole_covered_with_radius (lat: f64, lon: f64, radius_km: f64, earth_radius_km: f64) -> bool {
    haversine_distance_with_radius( lat, lon, NORTH_POLE_LAT, 0.0, earth_radius_km) <= radius_km
}

pub fn south_pole_covered_with_radius (lat: f64, lon: f64, radius_km: f64, earth_radius_km: f64) -> bool {
    haversine_distance_with_radius( lat, lon, SOUTH_POLE_LAT, 0.0, earth_radius_km) <= radius_km
}

/// true if a footprint with the given radius around the sub-satellite point (lat,lon) includes either pole
pub fn pole_covered_with_radius (lat: f64, lon: f64, radius_km: f64, earth_radius_km: f64) -> bool {
    north_pole_covered_with_radius( lat, lon, radius_km, earth_radius_km) ||
    south_pole_covered_with_radius( lat, lon, radius_km, earth_radius_km)
}

#[inline]
pub fn pole_covered (lat: f64, lon: f64, radius_km: f64) -> bool {
    pole_covered_with_radius( lat, lon, radius_km, MEAN_EARTH_RADIUS_KM)
}

#[inline]
pub fn north_pole_covered (lat: f64, lon: f64, radius_km: f64) -> bool {
    north_pole_covered_with_radius( lat, lon, radius_km, MEAN_EARTH_RADIUS_KM)
}

/* #endregion spherical distances */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine () {
        // a quarter meridian
        let d = haversine_distance( 0.0, 0.0, 90.0, 0.0);
        assert!( (d - std::f64::consts::FRAC_PI_2 * MEAN_EARTH_RADIUS_KM).abs() < 1e-6);

        // one degree along the equator
        let d = haversine_distance( 0.0, 179.5, 0.0, -179.5);
        assert!( (d - 1.0_f64.to_radians() * MEAN_EARTH_RADIUS_KM).abs() < 1e-6);

        assert_eq!( haversine_distance( 37.0, -122.0, 37.0, -122.0), 0.0);

        // distances scale with the sphere radius
        let d = haversine_distance_with_radius( -45.0, 30.0, 90.0, 0.0, 1.0);
        assert!( (d - 135.0_f64.to_radians()).abs() < 1e-12);
        assert!( north_pole_covered_with_radius( 80.0, 0.0, 1200.0, 6371.0));
        assert!( !north_pole_covered_with_radius( 80.0, 0.0, 1200.0, 12742.0));
    }

    #[test]
    fn test_pole_covered () {
        // 5 deg from the north pole is ~556 km
        assert!( pole_covered( 85.0, 10.0, 2000.0));
        assert!( north_pole_covered( 85.0, 10.0, 2000.0));
        assert!( !pole_covered( 85.0, 10.0, 500.0));

        assert!( pole_covered( -85.0, 10.0, 600.0));
        assert!( !north_pole_covered( -85.0, 10.0, 600.0));

        assert!( !pole_covered( 0.0, 0.0, 500.0));
    }

    #[test]
    fn test_geopoint_normalization () {
        let p = GeoPoint::from_lon_lat_degrees( 190.0, 45.0);
        assert_eq!( p.lon(), -170.0);
        assert_eq!( p.lat(), 45.0);

        let p: GeoPoint = (10.0, 20.0).into();
        assert_eq!( p.lat(), 10.0);
        assert_eq!( p.lon(), 20.0);
    }
}
