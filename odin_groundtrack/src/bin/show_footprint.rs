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

use anyhow::{anyhow, Result};
use clap::Parser;
use lazy_static::lazy_static;
use ron::ser::PrettyConfig;
use tracing_subscriber::EnvFilter;
use odin_groundtrack::{footprint_radius_km, load_config, FootprintConfig, FootprintEngine};

#[derive(Parser)]
#[command(about="compute the equirectangular map polygon(s) of a satellite visibility footprint")]
struct CliOpts {
    #[arg(help="sub-satellite latitude in degrees", long, allow_hyphen_values=true)]
    lat: f64,

    #[arg(help="sub-satellite longitude in degrees", long, allow_hyphen_values=true)]
    lon: f64,

    #[arg(help="footprint radius in km", long)]
    radius: Option<f64>,

    #[arg(help="satellite altitude in km (to compute radius if none is given)", long)]
    altitude: Option<f64>,

    #[arg(help="minimum elevation in degrees (used with --altitude)", long, default_value="0.0")]
    min_elevation: f64,

    #[arg(help="optional RON file with FootprintConfig", long)]
    config: Option<String>,

    #[arg(help="print JSON instead of RON", long)]
    json: bool,
}

lazy_static! { static ref ARGS: CliOpts = CliOpts::parse(); }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let config: FootprintConfig = if let Some(path) = &ARGS.config { load_config( path)? } else { FootprintConfig::default() };

    let radius = match (ARGS.radius, ARGS.altitude) {
        (Some(r), _) => r,
        (None, Some(alt)) => footprint_radius_km( alt, ARGS.min_elevation, config.earth_radius_km)?,
        (None, None) => return Err( anyhow!("either --radius or --altitude has to be specified"))
    };

    let engine = FootprintEngine::new( config)?;
    let topology = engine.topology( ARGS.lat, ARGS.lon, radius)?;
    let footprint = engine.compute( ARGS.lat, ARGS.lon, radius)?;
    println!("-- footprint at {},{} radius {:.1} km: {:?}, {} part(s)", ARGS.lat, ARGS.lon, radius, topology, footprint.parts());

    let s = if ARGS.json {
        serde_json::to_string_pretty( &footprint)?
    } else {
        ron::ser::to_string_pretty( &footprint, PrettyConfig::default().compact_structs(true))?
    };
    println!("{s}");

    Ok(())
}
