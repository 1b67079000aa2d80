//! Simulate command implementation.
//!
//! Synthesises a reference sweep, rotates it by a known shift, optionally
//! corrupts a few samples, and runs it through the alignment engine.

use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sweepalign_core::{AlignConfig, Alignment, AlignmentEngine, PROFILE_LEN, Profile};
use tracing::debug;

/// Range of synthetic readings (mm)
const MIN_RANGE_MM: i32 = 200;
const MAX_RANGE_MM: i32 = 4000;

pub struct SimulateOptions {
    pub shift: usize,
    pub seed: u64,
    pub noise: usize,
}

/// Random room-like sweep: piecewise flat walls with jittered readings.
pub fn synth_profile(rng: &mut StdRng) -> Profile {
    let mut wall = rng.gen_range(MIN_RANGE_MM..MAX_RANGE_MM);
    Profile::from_fn(|_| {
        if rng.gen_ratio(1, 20) {
            wall = rng.gen_range(MIN_RANGE_MM..MAX_RANGE_MM);
        }
        wall + rng.gen_range(-15..=15)
    })
}

/// Run the simulate command
pub fn run(options: &SimulateOptions, config: AlignConfig) -> Result<Alignment> {
    if options.shift >= PROFILE_LEN {
        bail!("shift must be below {}, got {}", PROFILE_LEN, options.shift);
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let reference = synth_profile(&mut rng);

    let mut samples = *reference.rotate_left(options.shift).samples();
    for _ in 0..options.noise {
        let heading = rng.gen_range(0..PROFILE_LEN);
        samples[heading] += rng.gen_range(1..=50);
        debug!("Perturbed heading {}", heading);
    }
    let current = Profile::new(samples);

    let mut engine = AlignmentEngine::with_reference(config, reference);
    let alignment = engine.submit(current);

    println!("Mode:      {}", engine.config().mode);
    println!("Shift:     {} deg", options.shift);
    println!("Noise:     {} samples", options.noise);
    println!("Computed:  {}", alignment);
    println!("Published: {}", engine.offset());

    Ok(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepalign_core::MatchMode;

    #[test]
    fn test_recovers_shift() {
        for shift in [0usize, 1, 90, 359] {
            let options = SimulateOptions {
                shift,
                seed: 42,
                noise: 0,
            };
            assert_eq!(
                run(&options, AlignConfig::default()).unwrap(),
                Alignment::Offset(shift as u16)
            );
        }
    }

    #[test]
    fn test_noise_breaks_exact_match() {
        let options = SimulateOptions {
            shift: 45,
            seed: 7,
            noise: 3,
        };
        assert_eq!(
            run(&options, AlignConfig::default()).unwrap(),
            Alignment::NoMatch
        );
    }

    #[test]
    fn test_self_align_mode_ignores_shift() {
        let options = SimulateOptions {
            shift: 120,
            seed: 1,
            noise: 0,
        };
        let config = AlignConfig::builder().mode(MatchMode::SelfAlign).build();
        assert_eq!(run(&options, config).unwrap(), Alignment::Offset(0));
    }

    #[test]
    fn test_rejects_out_of_range_shift() {
        let options = SimulateOptions {
            shift: 360,
            seed: 0,
            noise: 0,
        };
        assert!(run(&options, AlignConfig::default()).is_err());
    }

    #[test]
    fn test_synth_is_deterministic() {
        let a = synth_profile(&mut StdRng::seed_from_u64(9));
        let b = synth_profile(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(
            a.as_slice()
                .iter()
                .all(|&v| (MIN_RANGE_MM - 15..MAX_RANGE_MM + 15).contains(&v))
        );
    }
}
