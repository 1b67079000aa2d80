//! Raw sample codec for the ranging sensor.
//!
//! The sensor reports each range reading as three bytes, most significant
//! first. A raw sweep frame is the 360 readings laid out back to back, which is
//! also the layout pushed out over the serial link.

use super::{PROFILE_LEN, Profile};
use crate::error::{Error, Result};

/// Bytes per raw range sample
pub const RAW_SAMPLE_LEN: usize = 3;
/// Bytes per raw sweep frame
pub const RAW_FRAME_LEN: usize = PROFILE_LEN * RAW_SAMPLE_LEN;
/// Largest value a raw sample can carry
pub const RAW_SAMPLE_MAX: i32 = 0x00FF_FFFF;

pub fn decode_sample(bytes: [u8; RAW_SAMPLE_LEN]) -> i32 {
    (i32::from(bytes[0]) << 16) | (i32::from(bytes[1]) << 8) | i32::from(bytes[2])
}

/// Encode a sample into its 3-byte wire form, or `None` if it does not fit.
pub fn encode_sample(value: i32) -> Option<[u8; RAW_SAMPLE_LEN]> {
    if !(0..=RAW_SAMPLE_MAX).contains(&value) {
        return None;
    }
    let [_, b0, b1, b2] = value.to_be_bytes();
    Some([b0, b1, b2])
}

impl Profile {
    /// Decode a 1080-byte raw sweep frame.
    pub fn from_raw_frame(frame: &[u8]) -> Result<Self> {
        if frame.len() != RAW_FRAME_LEN {
            return Err(Error::FrameLength {
                expected: RAW_FRAME_LEN,
                actual: frame.len(),
            });
        }

        Ok(Self::from_fn(|heading| {
            let start = heading * RAW_SAMPLE_LEN;
            decode_sample([frame[start], frame[start + 1], frame[start + 2]])
        }))
    }

    /// Encode into a raw sweep frame.
    pub fn to_raw_frame(&self) -> Result<Vec<u8>> {
        let mut frame = Vec::with_capacity(RAW_FRAME_LEN);
        for (heading, &value) in self.as_slice().iter().enumerate() {
            let bytes = encode_sample(value).ok_or(Error::SampleOutOfRange { heading, value })?;
            frame.extend_from_slice(&bytes);
        }
        Ok(frame)
    }
}

/// Split a capture made of consecutive raw frames into profiles.
///
/// A trailing partial frame is an error rather than being silently dropped.
pub fn split_raw_frames(capture: &[u8]) -> Result<Vec<Profile>> {
    let remainder = capture.len() % RAW_FRAME_LEN;
    if remainder != 0 {
        return Err(Error::FrameLength {
            expected: RAW_FRAME_LEN,
            actual: remainder,
        });
    }

    capture
        .chunks_exact(RAW_FRAME_LEN)
        .map(Profile::from_raw_frame)
        .collect()
}
