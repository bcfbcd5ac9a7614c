//! Common utilities for Vatra.
//!
//! This crate provides the foundational types used across all Vatra crates:
//!
//! - [`BinaryReader`] - Zero-copy little-endian reading from byte slices
//! - [`Error`] / [`Result`] - Shared error type for binary parsing

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;
