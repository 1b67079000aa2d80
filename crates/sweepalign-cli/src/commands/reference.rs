//! Reference command implementation.
//!
//! Stores a sweep as the reference later sweeps are aligned against.

use std::path::Path;

use anyhow::Result;
use sweepalign_core::ReferenceProfile;

use super::profile_file::load_profile;

/// Run the reference command
pub fn run(input: &Path, output: &Path, label: &str) -> Result<()> {
    let profile = load_profile(input)?;
    let reference = ReferenceProfile::new(label, profile);
    reference.save(output)?;

    println!(
        "Stored reference '{}' ({}) -> {}",
        reference.label,
        reference.captured_at.format("%Y-%m-%d %H:%M:%S UTC"),
        output.display()
    );
    Ok(())
}
