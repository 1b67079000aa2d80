//! Prefix-table matching over angular profiles.
//!
//! - [`prefix`]: failure-function construction
//! - [`search`]: linear-time exact search using that table
//! - [`cyclic`]: rotation recovery by searching a doubled reference

mod alignment;
pub mod cyclic;
pub mod prefix;
pub mod search;

pub use alignment::*;
pub use cyclic::{align, align_prepared, self_align};
pub use prefix::{PrefixTable, fill_prefix_table, prefix_table};
pub use search::find_first;
