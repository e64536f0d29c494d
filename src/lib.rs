//! Dirscout library
//!
//! Local filesystem exploration toolkit: a bounded, refreshable directory
//! index with cache-accelerated filename lookup, live glob search, visual
//! tree rendering, and positional file comparison.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod config;
pub mod diff;
pub mod error;
pub mod observability;
pub mod pattern;
pub mod tree;

pub use cache::DirectoryCache;
pub use config::Config;
pub use diff::{diff_files, DiffOutcome};
pub use error::{Error, Result};
pub use tree::{render, RenderOptions};
