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

//! footprint radius from orbit altitude and the minimum elevation under which a ground station can
//! still see the satellite. This is the radius the footprint engine expects if it is not provided
//! by the telemetry source

use uom::si::{f64::Length, length::kilometer};

use crate::{sin, cos};
use crate::angle::{deg2rad, rad2deg};
use crate::errors::{Result, invalid_input, OdinGroundTrackError};
use crate::geo_constants::MEAN_EARTH_RADIUS_KM;

/// great circle radius (km) of the ground area from which a satellite at `altitude_km` is seen at or
/// above `min_elevation_deg`.
/// The earth central angle is `acos( R/(R+h) * cos(eps)) - eps`
pub fn footprint_radius_km (altitude_km: f64, min_elevation_deg: f64, earth_radius_km: f64) -> Result<f64> {
    if !altitude_km.is_finite() || altitude_km <= 0.0 {
        return Err( invalid_input!("satellite altitude has to be positive: {altitude_km}"))
    }
    if !min_elevation_deg.is_finite() || !(0.0..90.0).contains( &min_elevation_deg) {
        return Err( invalid_input!("minimum elevation not within [0..90): {min_elevation_deg}"))
    }
    if !earth_radius_km.is_finite() || earth_radius_km <= 0.0 {
        return Err( invalid_input!("earth radius has to be positive: {earth_radius_km}"))
    }

    let eps = deg2rad(min_elevation_deg);
    let rho = earth_radius_km / (earth_radius_km + altitude_km);
    let lambda = (rho * cos(eps)).acos() - eps;

    Ok( earth_radius_km * lambda.max(0.0) )
}

/// units-of-measure version on the mean earth sphere
pub fn footprint_radius (altitude: Length, min_elevation_deg: f64) -> Result<Length> {
    let r = footprint_radius_km( altitude.get::<kilometer>(), min_elevation_deg, MEAN_EARTH_RADIUS_KM)?;
    Ok( Length::new::<kilometer>(r) )
}

/// elevation (degrees) under which a satellite at `altitude_km` is seen from a ground point that is
/// `ground_distance_km` (great circle) away from the sub-satellite point. Negative values mean the
/// satellite is below the horizon
pub fn elevation_at_distance (altitude_km: f64, ground_distance_km: f64, earth_radius_km: f64) -> f64 {
    let lambda = ground_distance_km / earth_radius_km;
    let rho = earth_radius_km / (earth_radius_km + altitude_km);
    rad2deg( (cos(lambda) - rho).atan2( sin(lambda)))
}
