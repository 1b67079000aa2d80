//! Decode command implementation.
//!
//! Turns a raw 1080-byte sweep frame into a JSON profile.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sweepalign_core::Profile;

use super::profile_file::write_profile_json;

/// Run the decode command
pub fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let profile = Profile::from_raw_frame(&bytes)?;
    write_profile_json(&profile, output)
}
