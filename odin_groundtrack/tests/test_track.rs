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

use odin_groundtrack::{segment_track, GeoPoint, TrackSegments};

/// a synthetic ground track that drifts west by a fixed longitude step per sample
fn drifting_track (n: usize, lon0: f64, lon_step: f64) -> Vec<GeoPoint> {
    (0..n).map( |i| {
        let t = i as f64;
        GeoPoint::from_lon_lat_degrees( lon0 + t * lon_step, 50.0 * (t / 20.0).sin())
    }).collect()
}

fn assert_segment_invariants (samples: &[GeoPoint], segments: &TrackSegments) {
    // no segment is too short to be drawn, no segment jumps across the map
    for s in segments.iter() {
        assert!( s.len() >= 2);
        assert!( s.windows(2).all( |w| (w[1].lon() - w[0].lon()).abs() <= 180.0));
    }

    // all segment points are an ordered subsequence of the input
    let mut it = samples.iter();
    for p in segments.iter().flatten() {
        assert!( it.any( |q| q == p), "{p} not in input order");
    }
}

#[test]
fn test_dateline_crossing () {
    let samples = [ (0.0,170.0), (0.0,175.0), (0.0,-175.0), (0.0,-170.0) ];
    let segments = segment_track( &samples);
    println!("segments: {segments:?}");

    assert_eq!( segments.len(), 2);
    let s = segments.segments();
    assert_eq!( s[0], vec![ GeoPoint::from_lat_lon_degrees( 0.0, 170.0), GeoPoint::from_lat_lon_degrees( 0.0, 175.0) ]);
    assert_eq!( s[1], vec![ GeoPoint::from_lat_lon_degrees( 0.0, -175.0), GeoPoint::from_lat_lon_degrees( 0.0, -170.0) ]);
}

#[test]
fn test_multiple_orbits () {
    // 25 deg per sample westward drift wraps the map several times
    let samples = drifting_track( 100, 0.0, -25.0);
    let segments = segment_track( &samples);
    println!("{} samples -> {} segments", samples.len(), segments.len());

    assert!( segments.len() > 5);
    assert_segment_invariants( &samples, &segments);
    assert!( segments.n_points() <= samples.len());
}

#[test]
fn test_sparse_track_drops_single_points () {
    // every consecutive longitude difference is 190 deg
    let samples: Vec<GeoPoint> = [ 100.0, -90.0, 100.0, -90.0 ].iter().map( |lon| GeoPoint::from_lon_lat_degrees( *lon, 0.0)).collect();
    let segments = segment_track( &samples);
    assert!( segments.is_empty());
}

#[test]
fn test_serialize_segments () {
    let samples = [ (1.0,179.0), (2.0,179.5), (3.0,-179.5), (4.0,-179.0) ];
    let segments = segment_track( &samples);

    let s = serde_json::to_string( &segments).unwrap();
    println!("{s}");
    assert_eq!( s, r#"[[{"lon":179.0,"lat":1.0},{"lon":179.5,"lat":2.0}],[{"lon":-179.5,"lat":3.0},{"lon":-179.0,"lat":4.0}]]"#);

    let mls = segments.to_multi_line_string();
    assert_eq!( mls.0.len(), 2);
    assert_eq!( mls.0[1].0[0].x, -179.5);
    assert_eq!( mls.0[1].0[0].y, 3.0);
}

#[test]
fn test_deserialized_samples () {
    let input = r#"[ { "lon": 178.0, "lat": 10.0 }, { "longitude": 179.0, "latitude": 11.0 }, { "x": -179.0, "y": 12.0 }, { "lon": -178.0, "lat": 13.0 } ]"#;
    let samples: Vec<GeoPoint> = serde_json::from_str( input).unwrap();
    let segments = segment_track( &samples);

    assert_eq!( segments.len(), 2);
    assert_segment_invariants( &samples, &segments);
}

#[test]
fn test_non_finite_samples () {
    let samples = [ (0.0,170.0), (0.0,f64::NAN), (0.0,175.0), (f64::INFINITY,-175.0), (0.0,-175.0), (0.0,-170.0) ];
    let segments = segment_track( &samples);

    assert_eq!( segments.len(), 2);
    assert!( segments.iter().flatten().all( |p| p.is_finite() && p.lon().abs() <= 180.0 && p.lat().abs() <= 90.0));
    assert_eq!( segments.n_points(), 4);
}
