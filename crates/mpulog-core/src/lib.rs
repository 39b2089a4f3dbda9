//! Core decoder for MPU telemetry log files.
//!
//! An MPU logger writes fixed-size frames over an unreliable serial link:
//! a single sync byte, a big-endian payload (one u32 timestamp field and
//! ten i16 sensor channels), and a trailing CRC-8. This crate implements
//! the streaming decode loop: sentinel-based resynchronization, fixed-size
//! payload extraction, checksum verification, and tolerant recovery from
//! corrupted frames. Parsing is byte-oriented and side-effect free; stream
//! access is isolated in the decoder.
//!
//! Invariants:
//! - A payload is only interpreted after its sync byte matched exactly;
//!   noise between frames is skipped one byte at a time, silently and
//!   without limit.
//! - A checksum mismatch is surfaced as data ([`Outcome::Corrupted`]),
//!   never as an error; a single corrupted frame must not abort the rest
//!   of the log.
//! - The sequence ends only at end-of-stream, whether at a frame boundary
//!   or mid-payload; a truncated trailing frame is dropped silently.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use mpulog_core::{Decoder, Outcome};
//!
//! let mut decoder = Decoder::open(Path::new("session.log"))?;
//! while let Some(outcome) = decoder.next_outcome()? {
//!     match outcome {
//!         Outcome::Record(record) => println!("{}", record.timestamp),
//!         Outcome::Corrupted => eprintln!("corrupted entry"),
//!     }
//! }
//! # Ok::<(), mpulog_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod decoder;
mod frame;

pub use decoder::{DecodeError, Decoder, Outcome};
pub use frame::crc::crc8;
pub use frame::error::FrameError;
pub use frame::layout::{CHANNEL_COUNT, FRAME_LEN, PAYLOAD_LEN, SYNC_BYTE};
pub use frame::parser::parse_payload;

/// One decoded log entry: the numeric values of a validated payload.
///
/// Immutable once produced; a record has no identity beyond its position
/// in the output sequence.
///
/// # Examples
/// ```
/// use mpulog_core::Record;
///
/// let record = Record {
///     timestamp: 42,
///     channels: [0; 10],
/// };
/// assert_eq!(record.timestamp, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unsigned 32-bit counter field (device timestamp ticks).
    pub timestamp: u32,
    /// The ten signed 16-bit sensor channels, in wire order.
    pub channels: [i16; CHANNEL_COUNT],
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn record_serializes_all_fields() {
        let record = Record {
            timestamp: 42,
            channels: [1, -2, 0, 0, 0, 0, 0, 0, 0, 0],
        };

        let value = serde_json::to_value(&record).expect("record json");
        assert_eq!(value["timestamp"], 42);
        assert_eq!(value["channels"][0], 1);
        assert_eq!(value["channels"][1], -2);
        assert_eq!(value["channels"].as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = Record {
            timestamp: u32::MAX,
            channels: [i16::MIN, i16::MAX, 0, 0, 0, 0, 0, 0, 0, 0],
        };

        let json = serde_json::to_string(&record).expect("record json");
        let back: Record = serde_json::from_str(&json).expect("record back");
        assert_eq!(back, record);
    }
}
