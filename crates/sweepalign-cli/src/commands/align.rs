//! Align command implementation.
//!
//! Runs one alignment cycle of a profile against a reference, under the
//! configured match mode and no-match policy.

use std::path::Path;

use anyhow::Result;
use sweepalign_core::{AlignConfig, Alignment, AlignmentEngine};
use tracing::debug;

use super::profile_file::load_profile;

/// Run the align command
pub fn run(
    reference: &Path,
    profile: &Path,
    config: AlignConfig,
    json: bool,
) -> Result<Alignment> {
    let reference = load_profile(reference)?;
    let profile = load_profile(profile)?;

    let mut engine = AlignmentEngine::with_reference(config, reference);
    let alignment = engine.submit(profile);
    debug!("Aligned in {} mode", engine.config().mode);

    if json {
        println!("{}", serde_json::to_string(&alignment)?);
    } else {
        match alignment.signed_degrees() {
            Some(signed) => println!("Offset: {} ({:+} deg)", alignment, signed),
            None => println!("Offset: {}", alignment),
        }
    }

    Ok(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use sweepalign_core::{MatchMode, Profile};
    use tempfile::TempDir;

    fn write_pair(dir: &TempDir, shift: usize) -> (PathBuf, PathBuf) {
        let reference = Profile::from_fn(|i| (i * i) as i32);
        let reference_path = dir.path().join("reference.bin");
        let profile_path = dir.path().join("current.bin");
        fs::write(&reference_path, reference.to_raw_frame().unwrap()).unwrap();
        fs::write(
            &profile_path,
            reference.rotate_left(shift).to_raw_frame().unwrap(),
        )
        .unwrap();
        (reference_path, profile_path)
    }

    #[test]
    fn test_align_files() {
        let dir = TempDir::new().unwrap();
        let (reference_path, profile_path) = write_pair(&dir, 270);

        let alignment = run(
            &reference_path,
            &profile_path,
            AlignConfig::default(),
            false,
        )
        .unwrap();
        assert_eq!(alignment, Alignment::Offset(270));
        assert_eq!(alignment.signed_degrees(), Some(-90));
    }

    #[test]
    fn test_align_honours_self_align_mode() {
        let dir = TempDir::new().unwrap();
        let (reference_path, profile_path) = write_pair(&dir, 270);
        let config = AlignConfig::builder().mode(MatchMode::SelfAlign).build();

        let alignment = run(&reference_path, &profile_path, config, true).unwrap();
        assert_eq!(alignment, Alignment::Offset(0));
    }
}
