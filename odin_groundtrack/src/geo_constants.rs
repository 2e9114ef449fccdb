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

//! geodetic and map constants for ground track and footprint computation.
//! Footprints are computed on a spherical earth model and projected on an equirectangular
//! (Plate Carrée) map that spans [-180,180] longitude and [-90,90] latitude degrees

/// mean earth radius in kilometers (spherical model)
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// the meridian at which the equirectangular map is cut (left map border)
pub const MAP_BREAK_LON: f64 = -180.0;

pub const MAP_WEST_LON: f64 = -180.0;
pub const MAP_EAST_LON: f64 = 180.0;
pub const NORTH_POLE_LAT: f64 = 90.0;
pub const SOUTH_POLE_LAT: f64 = -90.0;

/// sub-satellite longitudes with an absolute value at or above this are treated as sitting on
/// the antimeridian when splitting footprints.
/// This is an empirical value that has not been derived from the sampling resolution
pub const DATELINE_THRESHOLD_DEG: f64 = 179.4;

/// number of one-degree azimuth steps we compute per half circle. Each step is mirrored so that
/// footprint boundaries always have twice as many points
pub const HALF_CIRCLE_AZIMUTHS: usize = 180;
pub const FOOTPRINT_POINTS: usize = 2 * HALF_CIRCLE_AZIMUTHS;
