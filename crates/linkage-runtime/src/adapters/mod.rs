//! File adapters of the runtime.

pub mod json_file;

pub use json_file::{read_json, write_json, JsonIdatFile};
