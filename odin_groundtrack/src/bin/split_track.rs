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

use std::path::Path;
use anyhow::Result;
use clap::Parser;
use lazy_static::lazy_static;
use tracing_subscriber::EnvFilter;
use odin_groundtrack::{segment_track, GeoPoint};

#[derive(Parser)]
#[command(about="split a ground track into polylines that do not wrap around the map")]
struct CliOpts {
    #[arg(help="JSON or RON (*.ron) file with a list of {lon,lat} track samples")]
    path: String,
}

lazy_static! { static ref ARGS: CliOpts = CliOpts::parse(); }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .init();

    let path = Path::new( &ARGS.path);
    let data = std::fs::read_to_string( path)?;
    let samples: Vec<GeoPoint> = if path.extension().is_some_and( |ext| ext == "ron") {
        ron::from_str( &data)?
    } else {
        serde_json::from_str( &data)?
    };

    let segments = segment_track( &samples);
    println!("-- {} samples -> {} segments", samples.len(), segments.len());
    for (i,s) in segments.iter().enumerate() {
        let first = &s[0];
        let last = &s[s.len()-1];
        println!("[{:3}]: {:5} points, {} .. {}", i, s.len(), first, last);
    }

    println!("{}", serde_json::to_string( &segments)?);
    Ok(())
}
