//! # sweepalign-core
//!
//! Circular alignment of 360° range sweeps.
//!
//! A rotating range sensor produces one [`Profile`] per full turn. This crate
//! finds the rotation at which a new profile lines up with a reference by
//! searching a doubled reference for the new profile with a prefix-table
//! (failure function) search, in time linear in the profile length.
//!
//! This crate provides:
//! - Profile model, raw 3-byte sample codec and frame splitting
//! - Prefix-table construction and cyclic matching
//! - A single-writer published offset readable from any thread
//! - The per-sweep alignment engine and a dedicated worker thread
//! - Sweep sequencing behind sensor/actuator traits
//! - TOML configuration and JSON reference storage

pub mod acquisition;
pub mod config;
pub mod engine;
pub mod error;
pub mod matching;
pub mod profile;
pub mod publisher;
pub mod reference;
pub mod worker;

pub use acquisition::{CompletedSweep, FixedMount, RangeSensor, ServoPulse, SweepActuator, Sweeper};
pub use config::{AlignConfig, AlignConfigBuilder, Config, MatchMode, NoMatchPolicy, SweepConfig};
pub use engine::AlignmentEngine;
pub use error::{Error, Result};
pub use matching::{Alignment, NO_MATCH, PrefixTable, align, find_first, prefix_table, self_align};
pub use profile::{
    DOUBLED_LEN, DoubledProfile, PROFILE_LEN, Profile, RAW_FRAME_LEN, RAW_SAMPLE_LEN,
    decode_sample, encode_sample, split_raw_frames,
};
pub use publisher::{OffsetPublisher, OffsetReader};
pub use reference::ReferenceProfile;
pub use worker::{AlignmentWorker, CycleReport, ProfileSender};
