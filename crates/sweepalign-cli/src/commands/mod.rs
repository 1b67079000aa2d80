//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod align;
pub mod decode;
pub mod profile_file;
pub mod reference;
pub mod replay;
pub mod simulate;
