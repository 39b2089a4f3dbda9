//! Wire-format offsets and literal values (source of truth).
//!
//! One frame on the wire is the sync byte followed by a fixed-size payload:
//! a big-endian u32 timestamp, ten big-endian i16 channels, and a trailing
//! CRC-8 over the preceding payload bytes. The sync byte is never covered
//! by the checksum.

pub const SYNC_BYTE: u8 = 0x41;

pub const TIMESTAMP_RANGE: std::ops::Range<usize> = 0..4;
pub const CHANNELS_RANGE: std::ops::Range<usize> = 4..24;
pub const CHECKSUM_OFFSET: usize = 24;

pub const CHANNEL_COUNT: usize = 10;
pub const CHANNEL_SIZE: usize = 2;

pub const PAYLOAD_LEN: usize = CHECKSUM_OFFSET + 1;
pub const FRAME_LEN: usize = PAYLOAD_LEN + 1;
