// src/config/mod.rs

//! Reactor configuration.
//!
//! Responsibilities:
//! - Define the raw and validated data model (`model.rs`).
//! - Validate invariants such as "no ignore rule matches every path"
//!   (`validate.rs`).
//!
//! There is no config file: the raw model is filled from CLI arguments (or
//! directly by tests) and turned into a [`ReactorConfig`] via `TryFrom`.

pub mod model;
pub mod validate;

pub use model::{
    RawReactorConfig, ReactorConfig, DEFAULT_FILE_SUFFIX, DEFAULT_IGNORED_SUBSTRINGS,
    DEFAULT_TOOL,
};
