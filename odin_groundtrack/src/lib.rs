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

//! geometry of satellite ground tracks and visibility footprints on an equirectangular map.
//!
//! The two entry points are [`compute_footprint`], which turns a sub-satellite point and footprint
//! radius into one or two map polygons (handling pole coverage and antimeridian crossings), and
//! [`segment_track`], which splits a sequence of ground track samples into polylines that do not
//! jump across the map. Both are pure functions - the sub-satellite position and orbit samples
//! are computed elsewhere.

use std::path::Path;
use serde::Deserialize;

pub mod errors;
pub mod geo_constants;
pub mod angle;
pub mod geo;
pub mod config;
pub mod footprint;
pub mod track;
pub mod visibility;

use crate::errors::Result;

pub use crate::errors::OdinGroundTrackError;
pub use crate::geo::GeoPoint;
pub use crate::config::FootprintConfig;
pub use crate::footprint::{compute_footprint, Footprint, FootprintEngine};
pub use crate::track::{segment_track, TrackSegments};
pub use crate::visibility::{footprint_radius, footprint_radius_km};

// syntactic sugar - this is just more readable in trig heavy code
#[inline(always)] pub(crate) fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub(crate) fn cos(x:f64) -> f64 { x.cos() }

/// read a RON config file (e.g. `configs/footprint.ron`)
pub fn load_config<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
