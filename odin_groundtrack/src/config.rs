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

use serde::{Serialize,Deserialize};
use crate::errors::{Result, invalid_input, OdinGroundTrackError};
use crate::geo_constants::{MEAN_EARTH_RADIUS_KM, DATELINE_THRESHOLD_DEG};

/// tunable parameters of the footprint computation. Missing fields in a RON config file fall back
/// to the defaults (mean earth sphere and the empirical dateline threshold)
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
#[serde(default)]
pub struct FootprintConfig {
    /// radius of the spherical earth model in km
    pub earth_radius_km: f64,

    /// sub-satellite longitudes with |lon| >= this are split by longitude sign instead of by sweep order
    pub dateline_threshold_deg: f64,
}

impl Default for FootprintConfig {
    fn default() -> Self {
        FootprintConfig { earth_radius_km: MEAN_EARTH_RADIUS_KM, dateline_threshold_deg: DATELINE_THRESHOLD_DEG }
    }
}

impl FootprintConfig {
    pub fn check (&self) -> Result<()> {
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err( invalid_input!("earth radius has to be positive: {}", self.earth_radius_km))
        }
        if !(self.dateline_threshold_deg.is_finite() && self.dateline_threshold_deg > 0.0 && self.dateline_threshold_deg <= 180.0) {
            return Err( invalid_input!("dateline threshold not within (0..180]: {}", self.dateline_threshold_deg))
        }
        Ok(())
    }

    pub fn half_circumference_km (&self) -> f64 {
        std::f64::consts::PI * self.earth_radius_km
    }
}
