//! Testing infrastructure for taskmail integration tests.
//!
//! - `HookWorld`: isolated environment for running the hook binary
//! - `fixtures`: caller payloads and transcripts
//! - `assertions`: checks on rendered HTML

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{HookResult, HookWorld};
