//! Shared plumbing for the numbered kassa demos.
pub mod common;
