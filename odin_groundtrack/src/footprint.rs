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

//! visibility footprints on an equirectangular map.
//!
//! A footprint is the spherical cap of the given radius around the sub-satellite point. Its boundary
//! is sampled with one degree azimuth steps on the western half and mirrored across the sub-satellite
//! meridian for the eastern half, which gives 360 points in angular sweep order
//! (north -> west -> south -> east). The sweep is then turned into map polygons:
//!
//! - caps that cover a pole are opened into a single polygon that spans the whole map width and
//!   is closed along the pole row of the map
//! - caps that cross the antimeridian are split into two polygons that end on the map borders
//! - all other caps are returned as the unmodified sweep

use std::f64::consts::PI;
use serde::ser::{Serialize, Serializer, SerializeStruct};
use geo::{LineString, MultiPolygon, Polygon};
use tracing::{debug, trace, warn};

use crate::{sin, cos};
use crate::angle::{deg2rad, rad2deg, normalize_lon, normalize_360, safe_arccos, safe_arcsin, map_half, MapHalf};
use crate::config::FootprintConfig;
use crate::errors::{Result, invalid_input, OdinGroundTrackError};
use crate::geo::{GeoPoint, CoveredPole, pole_covered_with_radius, north_pole_covered_with_radius};
use crate::geo_constants::{HALF_CIRCLE_AZIMUTHS, FOOTPRINT_POINTS, MAP_EAST_LON, MAP_WEST_LON};

// below this cos(sub_lat) we consider the sub-satellite point to be on a pole
const POLE_COS_EPSILON: f64 = 1e-12;

/* #region result types *******************************************************************************************/

/// the map polygon(s) of a footprint. Points are lon/lat degrees
#[derive(Debug,Clone,PartialEq)]
pub enum Footprint {
    Single(Vec<GeoPoint>),
    Split(Vec<GeoPoint>,Vec<GeoPoint>)
}

impl Footprint {
    pub fn parts (&self) -> usize {
        match self {
            Footprint::Single(_) => 1,
            Footprint::Split(..) => 2
        }
    }

    pub fn polygon1 (&self) -> &[GeoPoint] {
        match self {
            Footprint::Single(p1) => p1.as_slice(),
            Footprint::Split(p1,_) => p1.as_slice()
        }
    }

    pub fn polygon2 (&self) -> Option<&[GeoPoint]> {
        match self {
            Footprint::Single(_) => None,
            Footprint::Split(_,p2) => Some(p2.as_slice())
        }
    }

    pub fn is_split (&self) -> bool { matches!( self, Footprint::Split(..)) }

    /// all points of all polygons
    pub fn points (&self) -> impl Iterator<Item=&GeoPoint> {
        self.polygon1().iter().chain( self.polygon2().unwrap_or(&[]).iter())
    }

    /// x = longitude, y = latitude degrees
    pub fn to_multi_polygon (&self) -> MultiPolygon<f64> {
        let polygons = match self {
            Footprint::Single(p1) => vec![ to_polygon(p1) ],
            Footprint::Split(p1,p2) => vec![ to_polygon(p1), to_polygon(p2) ]
        };
        MultiPolygon::new( polygons)
    }
}

fn to_polygon (points: &[GeoPoint]) -> Polygon<f64> {
    let exterior: LineString<f64> = points.iter().map( |p| p.point().0).collect::<Vec<_>>().into();
    Polygon::new( exterior, vec![])
}

impl Serialize for Footprint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        let n_fields = 1 + self.parts();
        let mut state = serializer.serialize_struct("Footprint", n_fields)?;
        state.serialize_field("parts", &self.parts())?;
        state.serialize_field("polygon1", self.polygon1())?;
        if let Some(p2) = self.polygon2() {
            state.serialize_field("polygon2", p2)?;
        }
        state.end()
    }
}

/// the raw boundary sweep of a footprint before it gets turned into map polygons
#[derive(Debug,Clone)]
pub struct BoundarySamples {
    pub points: Vec<GeoPoint>, // FOOTPRINT_POINTS in sweep order
    pub warped: bool,          // at least one boundary point is on the other side of the map break
}

/// the polygon assembly policy for a footprint
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Topology {
    PoleCovered(CoveredPole),
    Warped,
    Nominal
}

/* #endregion result types */

/* #region engine *************************************************************************************************/

/// computes footprints for a given spherical earth model. The engine does not keep any state
/// between calls and can be shared between threads
#[derive(Debug,Clone,Default)]
pub struct FootprintEngine {
    config: FootprintConfig
}

impl FootprintEngine {
    pub fn new (config: FootprintConfig) -> Result<Self> {
        config.check()?;
        Ok( FootprintEngine { config } )
    }

    pub fn config (&self) -> &FootprintConfig { &self.config }

    /// compute the map polygon(s) of the footprint with `radius_km` around the sub-satellite point
    pub fn compute (&self, sub_lat: f64, sub_lon: f64, radius_km: f64) -> Result<Footprint> {
        let (sub_lat, sub_lon) = self.check_input( sub_lat, sub_lon, radius_km)?;
        let samples = self.boundary( sub_lat, sub_lon, radius_km);

        let footprint = match self.classify( sub_lat, sub_lon, radius_km, &samples) {
            Topology::PoleCovered(pole) => {
                debug!("footprint at {sub_lat},{sub_lon} r={radius_km}km covers {pole:?} pole");
                Footprint::Single( open_at_pole( &samples.points, pole))
            }
            Topology::Warped => {
                debug!("footprint at {sub_lat},{sub_lon} r={radius_km}km crosses antimeridian");
                split_at_antimeridian( samples.points, sub_lon, self.config.dateline_threshold_deg)
            }
            Topology::Nominal => {
                debug!("nominal footprint at {sub_lat},{sub_lon} r={radius_km}km");
                Footprint::Single( samples.points)
            }
        };

        Ok(footprint)
    }

    /// the topology decision for the footprint, in priority order pole coverage, warp, nominal
    pub fn topology (&self, sub_lat: f64, sub_lon: f64, radius_km: f64) -> Result<Topology> {
        let (sub_lat, sub_lon) = self.check_input( sub_lat, sub_lon, radius_km)?;
        let samples = self.boundary( sub_lat, sub_lon, radius_km);
        Ok( self.classify( sub_lat, sub_lon, radius_km, &samples) )
    }

    /// the raw 360 point boundary sweep (before any pole or antimeridian processing)
    pub fn sample_boundary (&self, sub_lat: f64, sub_lon: f64, radius_km: f64) -> Result<BoundarySamples> {
        let (sub_lat, sub_lon) = self.check_input( sub_lat, sub_lon, radius_km)?;
        Ok( self.boundary( sub_lat, sub_lon, radius_km) )
    }

    fn check_input (&self, sub_lat: f64, sub_lon: f64, radius_km: f64) -> Result<(f64,f64)> {
        if !sub_lat.is_finite() || !sub_lon.is_finite() {
            return Err( invalid_input!("non-finite sub-satellite point {sub_lat},{sub_lon}"))
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err( invalid_input!("footprint radius has to be positive: {radius_km}"))
        }
        let max_radius = self.config.half_circumference_km();
        if radius_km > max_radius {
            return Err( invalid_input!("footprint radius {radius_km} exceeds half earth circumference {max_radius}"))
        }

        let p = GeoPoint::from_lon_lat_degrees( sub_lon, sub_lat);
        Ok( (p.lat(), p.lon()) )
    }

    fn classify (&self, sub_lat: f64, sub_lon: f64, radius_km: f64, samples: &BoundarySamples) -> Topology {
        if pole_covered_with_radius( sub_lat, sub_lon, radius_km, self.config.earth_radius_km) {
            Topology::PoleCovered( CoveredPole::for_sub_satellite_lat( sub_lat))
        } else if samples.warped {
            Topology::Warped
        } else {
            Topology::Nominal
        }
    }

    fn boundary (&self, sub_lat: f64, sub_lon: f64, radius_km: f64) -> BoundarySamples {
        let beta = radius_km / self.config.earth_radius_km; // angular radius
        let ssplat = deg2rad(sub_lat);

        if cos(ssplat).abs() < POLE_COS_EPSILON {
            return pole_centered_ring( sub_lat, beta)
        }

        let north_covered = north_pole_covered_with_radius( sub_lat, sub_lon, radius_km, self.config.earth_radius_km);
        let ssplon = deg2rad(sub_lon);

        let mut west: Vec<GeoPoint> = Vec::with_capacity( HALF_CIRCLE_AZIMUTHS);
        let mut east: Vec<GeoPoint> = Vec::with_capacity( HALF_CIRCLE_AZIMUTHS);
        let mut warped = false;

        for azi in 0..HALF_CIRCLE_AZIMUTHS as i32 {
            let azimuth = deg2rad( azi as f64);
            let rangelat = safe_arcsin( sin(ssplat) * cos(beta) + cos(azimuth) * sin(beta) * cos(ssplat));
            let num = cos(beta) - sin(ssplat) * sin(rangelat);
            let dem = cos(ssplat) * cos(rangelat);

            let rangelon = if azi == 0 && north_covered {
                ssplon + PI // azimuth 0 and 180 degenerate if the cap contains the pole
            } else if (num / dem).abs() > 1.0 {
                ssplon
            } else {
                ssplon - safe_arccos( num, dem)
            };

            let lat = rad2deg(rangelat);
            let lon = normalize_lon( rad2deg(rangelon));
            let (mlon, is_warped) = mirror_lon( lon, sub_lon);
            if is_warped {
                trace!("boundary point at azimuth {azi} crosses map break: {lon} / {mlon}");
                warped = true;
            }

            west.push( GeoPoint::from_lon_lat_degrees( lon, lat));
            east.push( GeoPoint::from_lon_lat_degrees( mlon, lat));
        }

        // the mirror of azimuth a goes to index 359-a
        let points: Vec<GeoPoint> = west.into_iter().chain( east.into_iter().rev()).collect();
        BoundarySamples { points, warped }
    }
}

/// shortcut for computing a footprint on the mean earth sphere with default dateline policy
pub fn compute_footprint (sub_lat: f64, sub_lon: f64, radius_km: f64) -> Result<Footprint> {
    FootprintEngine::default().compute( sub_lat, sub_lon, radius_km)
}

/* #endregion engine */

/* #region sampling helpers ***************************************************************************************/

/// mirror a boundary longitude across the sub-satellite meridian and check if the footprint
/// crosses the map break there.
/// Only the boundary point that faces the map break from the sub-satellite half can cross it: for a
/// sub-satellite point on the western map half that is the sampled (western) point, for the eastern
/// half it is the mirrored (eastern) point
pub fn mirror_lon (range_lon: f64, ssp_lon: f64) -> (f64,bool) {
    let diff = normalize_360( ssp_lon - range_lon);
    let mlon = normalize_lon( ssp_lon + diff);

    let warped = match map_half( ssp_lon) {
        MapHalf::West => map_half( range_lon) != MapHalf::West,
        MapHalf::East => map_half( mlon) == MapHalf::West
    };

    (mlon, warped)
}

/// the boundary of a cap that is centered on a pole is a parallel. We can't use the spherical
/// law of cosines here since the sub-satellite meridian is undefined (cos(sub_lat) = 0)
fn pole_centered_ring (sub_lat: f64, beta: f64) -> BoundarySamples {
    let lat = if sub_lat > 0.0 { 90.0 - rad2deg(beta) } else { -90.0 + rad2deg(beta) };
    let points: Vec<GeoPoint> = (0..FOOTPRINT_POINTS)
        .map( |i| GeoPoint::from_lon_lat_degrees( MAP_WEST_LON + i as f64, lat))
        .collect();

    BoundarySamples { points, warped: false }
}

/* #endregion sampling helpers */

/* #region polygon assembly ***************************************************************************************/

/// open a pole covering sweep into a polygon that spans the map width: sort by longitude, move the
/// second and second-to-last points onto the west and east map border and pin first and last point
/// to the map corners of the covered pole row
fn open_at_pole (points: &[GeoPoint], pole: CoveredPole) -> Vec<GeoPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by( |a,b| a.lon().total_cmp( &b.lon()));

    let n = sorted.len();
    let last_lat = sorted[n-1].lat();
    let pole_lat = pole.latitude();

    sorted.iter().enumerate().map( |(i,p)| {
        if i == 0 { GeoPoint::from_lon_lat_degrees( MAP_WEST_LON, pole_lat) }
        else if i == 1 { p.with_lon( MAP_WEST_LON) }
        else if i == n-2 { GeoPoint::from_lon_lat_degrees( MAP_EAST_LON, last_lat) }
        else if i == n-1 { GeoPoint::from_lon_lat_degrees( MAP_EAST_LON, pole_lat) }
        else { *p }
    }).collect()
}

/// split a warped sweep into the parts on either side of the antimeridian
fn split_at_antimeridian (points: Vec<GeoPoint>, sub_lon: f64, dateline_threshold: f64) -> Footprint {
    let (part1, part2) = if sub_lon.abs() >= dateline_threshold {
        partition_by_lon_sign( &points)
    } else {
        partition_by_sweep( &points, sub_lon)
    };

    if part1.is_empty() || part2.is_empty() {
        // no sample on one side of the map break, keep the cap in one piece on the sub-satellite side
        warn!("empty antimeridian split part ({}/{} points), clamping to map border", part1.len(), part2.len());
        return Footprint::Single( clamp_to_border( points, sub_lon))
    }

    let edge1 = if part1[0].lon() >= 0.0 { MAP_EAST_LON } else { MAP_WEST_LON };
    let edge2 = -edge1;

    Footprint::Split( pin_ends( part1, edge1), pin_ends( part2, edge2))
}

/// positive longitudes go into the first, all others into the second part. Both parts are ordered by
/// latitude since a sweep order would self-intersect when the sub-satellite point sits on the antimeridian
fn partition_by_lon_sign (points: &[GeoPoint]) -> (Vec<GeoPoint>,Vec<GeoPoint>) {
    let (mut pos, mut neg): (Vec<GeoPoint>,Vec<GeoPoint>) = points.iter().partition( |p| p.lon() > 0.0);
    pos.sort_by( |a,b| a.lat().total_cmp( &b.lat()));
    neg.sort_by( |a,b| a.lat().total_cmp( &b.lat()));
    (pos, neg)
}

/// the contiguous run of points on the other side of the map (as seen from the sub-satellite point)
/// becomes the first part, the remaining points (wrapping around the end of the sweep) the second.
/// Both keep their sweep order
fn partition_by_sweep (points: &[GeoPoint], sub_lon: f64) -> (Vec<GeoPoint>,Vec<GeoPoint>) {
    let n = points.len();
    let is_east = sub_lon >= 0.0;
    let wrong_side = |p: &GeoPoint| if is_east { p.lon() < 0.0 } else { p.lon() > 0.0 };

    match wrong_side_run( points, wrong_side, is_east) {
        Some((start,len)) => {
            let run: Vec<GeoPoint> = (0..len).map( |i| points[(start + i) % n]).collect();
            let rest: Vec<GeoPoint> = (len..n).map( |i| points[(start + i) % n]).collect();
            (run, rest)
        }
        None => (Vec::new(), points.to_vec())
    }
}

/// find (start,len) of a circular run of points that satisfy `is_wrong`. Scans forward for the first run
/// start or backward for the last run end
fn wrong_side_run<F> (points: &[GeoPoint], is_wrong: F, forward: bool) -> Option<(usize,usize)> where F: Fn(&GeoPoint)->bool {
    let n = points.len();
    let prev = |i: usize| (i + n - 1) % n;
    let next = |i: usize| (i + 1) % n;

    if forward {
        let start = (0..n).find( |&i| is_wrong(&points[i]) && !is_wrong(&points[prev(i)]))?;
        let len = (0..n).take_while( |&k| is_wrong(&points[(start + k) % n])).count();
        Some((start,len))

    } else {
        let end = (0..n).rev().find( |&i| is_wrong(&points[i]) && !is_wrong(&points[next(i)]))?;
        let len = (0..n).take_while( |&k| is_wrong(&points[(end + n - k) % n])).count();
        Some(((end + n + 1 - len) % n, len))
    }
}

/// move first and last point of a part onto the map border. A part with a single point (the cap only
/// grazes the antimeridian) becomes a border segment of two points at the same latitude
fn pin_ends (points: Vec<GeoPoint>, edge_lon: f64) -> Vec<GeoPoint> {
    if let [p] = points.as_slice() {
        debug!("single point antimeridian crossing at lat {}", p.lat());
        let pinned = p.with_lon( edge_lon);
        return vec![ pinned, pinned ]
    }

    let n = points.len();
    points.into_iter().enumerate().map( |(i,p)| {
        if i == 0 || i == n-1 { p.with_lon( edge_lon) } else { p }
    }).collect()
}

/// move points that wrapped to the other side of the map onto the map border of the sub-satellite side
fn clamp_to_border (points: Vec<GeoPoint>, sub_lon: f64) -> Vec<GeoPoint> {
    let is_east = sub_lon >= 0.0;
    points.into_iter().map( |p| {
        if is_east && p.lon() < 0.0 { p.with_lon( MAP_EAST_LON) }
        else if !is_east && p.lon() > 0.0 { p.with_lon( MAP_WEST_LON) }
        else { p }
    }).collect()
}

/* #endregion polygon assembly */
