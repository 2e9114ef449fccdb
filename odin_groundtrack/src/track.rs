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

use serde::Serialize;
use geo::{LineString, MultiLineString};
use tracing::{debug, warn};

use crate::geo::GeoPoint;

/// longitude jumps between consecutive samples larger than this are wraps across the antimeridian
pub const MAX_LON_DELTA: f64 = 180.0;

/// ground track polylines that can be drawn on an equirectangular map without crossing it.
/// Each polyline has at least two points
#[derive(Debug,Clone,PartialEq,Default,Serialize)]
#[serde(transparent)]
pub struct TrackSegments(Vec<Vec<GeoPoint>>);

impl TrackSegments {
    pub fn len (&self) -> usize { self.0.len() }
    pub fn is_empty (&self) -> bool { self.0.is_empty() }
    pub fn iter (&self) -> impl Iterator<Item=&Vec<GeoPoint>> { self.0.iter() }
    pub fn segments (&self) -> &[Vec<GeoPoint>] { self.0.as_slice() }
    pub fn into_inner (self) -> Vec<Vec<GeoPoint>> { self.0 }

    /// total number of points in all segments
    pub fn n_points (&self) -> usize { self.0.iter().map( |s| s.len()).sum() }

    /// x = longitude, y = latitude degrees
    pub fn to_multi_line_string (&self) -> MultiLineString<f64> {
        let lines: Vec<LineString<f64>> = self.0.iter()
            .map( |s| s.iter().map( |p| p.point().0).collect::<Vec<_>>().into())
            .collect();
        MultiLineString::new( lines)
    }
}

impl IntoIterator for TrackSegments {
    type Item = Vec<GeoPoint>;
    type IntoIter = std::vec::IntoIter<Vec<GeoPoint>>;
    fn into_iter (self) -> Self::IntoIter { self.0.into_iter() }
}

/// split an ordered sequence of ground track samples into polylines wherever two consecutive
/// samples are more than 180 degrees of longitude apart (the track wraps around the map).
/// Single samples between two wraps can't be drawn as lines and are dropped, non-finite samples are skipped
pub fn segment_track<P> (samples: &[P]) -> TrackSegments where P: Into<GeoPoint> + Copy {
    let mut segments: Vec<Vec<GeoPoint>> = Vec::new();
    let mut current: Vec<GeoPoint> = Vec::new();
    let mut n_wraps = 0;
    let mut n_skipped = 0;

    for p in samples.iter().map( |p| -> GeoPoint { (*p).into() }) {
        if !p.is_finite() {
            n_skipped += 1;
            continue
        }

        if let Some(last) = current.last() {
            if (p.lon() - last.lon()).abs() > MAX_LON_DELTA {
                n_wraps += 1;
                let segment = std::mem::take( &mut current);
                if segment.len() >= 2 { segments.push( segment) }
            }
        }
        current.push(p);
    }
    if current.len() >= 2 { segments.push( current) }

    if n_skipped > 0 { warn!("skipped {n_skipped} non-finite track samples") }
    debug!("segmented {} track samples into {} polylines ({} wraps)", samples.len(), segments.len(), n_wraps);
    TrackSegments( segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lat_lons (segments: &TrackSegments) -> Vec<Vec<(f64,f64)>> {
        segments.iter().map( |s| s.iter().map( |p| (p.lat(),p.lon())).collect()).collect()
    }

    #[test]
    fn test_dateline_wrap () {
        let samples = [ (0.0,170.0), (0.0,175.0), (0.0,-175.0), (0.0,-170.0) ];
        let segments = segment_track( &samples);
        assert_eq!( lat_lons( &segments), vec![
            vec![ (0.0,170.0), (0.0,175.0) ],
            vec![ (0.0,-175.0), (0.0,-170.0) ]
        ]);
    }

    #[test]
    fn test_no_wrap () {
        let samples = [ (10.0,-20.0), (11.0,-10.0), (12.0,0.0), (13.0,10.0) ];
        let segments = segment_track( &samples);
        assert_eq!( segments.len(), 1);
        assert_eq!( segments.n_points(), 4);
    }

    #[test]
    fn test_isolated_point_dropped () {
        // the single sample between two wraps can't be drawn
        let samples = [ (0.0,170.0), (1.0,178.0), (2.0,-179.0), (3.0,179.5), (4.0,175.0) ];
        let segments = segment_track( &samples);
        assert_eq!( lat_lons( &segments), vec![
            vec![ (0.0,170.0), (1.0,178.0) ],
            vec![ (3.0,179.5), (4.0,175.0) ]
        ]);
    }

    #[test]
    fn test_exact_half_circle_is_no_wrap () {
        let samples = [ (0.0,-90.0), (0.0,90.0) ];
        assert_eq!( segment_track( &samples).len(), 1);
    }

    #[test]
    fn test_non_finite_samples_skipped () {
        let samples = [ (0.0,10.0), (f64::NAN,11.0), (1.0,f64::INFINITY), (2.0,12.0) ];
        let segments = segment_track( &samples);
        assert_eq!( lat_lons( &segments), vec![ vec![ (0.0,10.0), (2.0,12.0) ] ]);
    }

    #[test]
    fn test_degenerate_input () {
        let empty: [(f64,f64);0] = [];
        assert!( segment_track( &empty).is_empty());
        assert!( segment_track( &[ (1.0,2.0) ]).is_empty());
    }
}
