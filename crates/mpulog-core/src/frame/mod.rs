//! MPU log frame decoding.
//!
//! The layered structure follows the usual convention:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `crc`: the logger's CRC-8 checksum
//! - `reader`: safe byte access over a payload slice
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsing is pure and contains no I/O; the streaming `decoder` module
//! handles stream access and framing.

pub mod crc;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::parse_payload;
