//! Angular range profiles.
//!
//! A [`Profile`] is one full sweep: exactly [`PROFILE_LEN`] samples, indexed by
//! heading in whole degrees. A [`DoubledProfile`] is a profile written twice
//! back to back, so every cyclic rotation of the profile shows up as a
//! contiguous run of [`PROFILE_LEN`] samples inside it.
//!
//! ```text
//!  heading:  0 1 2 ... 359 | 0 1 2 ... 359
//!            └── profile ──┘└── copy ─────┘
//! ```

mod codec;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use codec::*;

/// Number of samples in one sweep (one per degree)
pub const PROFILE_LEN: usize = 360;
/// Number of samples in a doubled profile
pub const DOUBLED_LEN: usize = PROFILE_LEN * 2;

/// One full 360-sample sweep.
///
/// Construction validates the length, so a `Profile` value always holds
/// exactly [`PROFILE_LEN`] samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct Profile {
    samples: [i32; PROFILE_LEN],
}

impl Profile {
    pub fn new(samples: [i32; PROFILE_LEN]) -> Self {
        Self { samples }
    }

    /// Build a profile from a slice, rejecting anything that is not exactly
    /// [`PROFILE_LEN`] samples long.
    pub fn from_slice(samples: &[i32]) -> Result<Self> {
        let samples: [i32; PROFILE_LEN] =
            samples.try_into().map_err(|_| Error::ProfileLength {
                expected: PROFILE_LEN,
                actual: samples.len(),
            })?;
        Ok(Self { samples })
    }

    /// Build a profile by evaluating `f` for every heading.
    pub fn from_fn<F: FnMut(usize) -> i32>(f: F) -> Self {
        Self {
            samples: std::array::from_fn(f),
        }
    }

    pub fn samples(&self) -> &[i32; PROFILE_LEN] {
        &self.samples
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.samples
    }

    /// Sample at `heading` degrees, wrapping around a full turn.
    pub fn at(&self, heading: usize) -> i32 {
        self.samples[heading % PROFILE_LEN]
    }

    /// Cyclic left rotation: `rotated[i] == self[(i + k) % 360]`.
    pub fn rotate_left(&self, k: usize) -> Self {
        let mut samples = self.samples;
        samples.rotate_left(k % PROFILE_LEN);
        Self { samples }
    }

    pub fn doubled(&self) -> DoubledProfile {
        DoubledProfile::from_profile(self)
    }
}

impl TryFrom<Vec<i32>> for Profile {
    type Error = Error;

    fn try_from(samples: Vec<i32>) -> Result<Self> {
        Self::from_slice(&samples)
    }
}

impl From<Profile> for Vec<i32> {
    fn from(profile: Profile) -> Self {
        profile.samples.to_vec()
    }
}

/// A profile followed by an exact copy of itself.
///
/// Invariant: `doubled[i] == doubled[i + PROFILE_LEN]` for all `i < PROFILE_LEN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubledProfile {
    samples: [i32; DOUBLED_LEN],
}

impl DoubledProfile {
    pub fn from_profile(profile: &Profile) -> Self {
        let mut samples = [0; DOUBLED_LEN];
        let (head, tail) = samples.split_at_mut(PROFILE_LEN);
        head.copy_from_slice(profile.as_slice());
        tail.copy_from_slice(profile.as_slice());
        Self { samples }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.samples
    }
}
