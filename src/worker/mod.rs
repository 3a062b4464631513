//! Per-story task processing and fan-out

pub mod process;

pub use process::{process_story, run_digest};
