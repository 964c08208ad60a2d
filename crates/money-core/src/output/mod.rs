//! Output
//!
//! Run records for analysis and plotting.

pub mod record;

pub use record::{OutputError, RunRecord, RECORD_OUTPUT_PATH};
