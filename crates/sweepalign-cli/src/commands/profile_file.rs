//! Reading and writing profile files.
//!
//! Accepted inputs:
//! - `*.bin`: one raw 1080-byte sweep frame
//! - JSON reference (`{"label", "captured_at", "profile"}`)
//! - JSON array of 360 samples

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sweepalign_core::{Profile, ReferenceProfile};

pub fn is_raw(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bin"))
}

pub fn load_profile(path: &Path) -> Result<Profile> {
    if is_raw(path) {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        return Profile::from_raw_frame(&bytes)
            .with_context(|| format!("decoding {}", path.display()));
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if let Ok(reference) = serde_json::from_str::<ReferenceProfile>(&content) {
        return Ok(reference.profile);
    }
    serde_json::from_str::<Profile>(&content)
        .with_context(|| format!("parsing profile from {}", path.display()))
}

pub fn write_profile_json(profile: &Profile, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
