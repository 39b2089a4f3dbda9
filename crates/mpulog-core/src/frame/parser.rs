use crate::Record;

use super::crc::crc8;
use super::error::FrameError;
use super::layout;
use super::reader::PayloadReader;

/// Parse one fixed-size payload into a record.
///
/// Returns `Ok(None)` when the trailing checksum byte does not match the
/// CRC-8 computed over the preceding payload bytes; no field value is
/// recovered from a corrupted payload.
///
/// # Errors
/// Returns `FrameError::TooShort` when `payload` is shorter than the fixed
/// payload length.
pub fn parse_payload(payload: &[u8]) -> Result<Option<Record>, FrameError> {
    let reader = PayloadReader::new(payload);
    reader.require_len(layout::PAYLOAD_LEN)?;

    let received = reader.read_u8(layout::CHECKSUM_OFFSET)?;
    let covered = reader.read_slice(0..layout::CHECKSUM_OFFSET)?;
    if crc8(covered) != received {
        return Ok(None);
    }

    let timestamp = reader.read_u32_be(layout::TIMESTAMP_RANGE.clone())?;
    let mut channels = [0i16; layout::CHANNEL_COUNT];
    for (index, channel) in channels.iter_mut().enumerate() {
        let start = layout::CHANNELS_RANGE.start + index * layout::CHANNEL_SIZE;
        *channel = reader.read_i16_be(start..start + layout::CHANNEL_SIZE)?;
    }

    Ok(Some(Record {
        timestamp,
        channels,
    }))
}

#[cfg(test)]
mod tests {
    use super::parse_payload;
    use crate::frame::crc::crc8;
    use crate::frame::error::FrameError;
    use crate::frame::layout;

    fn build_payload(timestamp: u32, channels: [i16; layout::CHANNEL_COUNT]) -> Vec<u8> {
        let mut payload = Vec::with_capacity(layout::PAYLOAD_LEN);
        payload.extend_from_slice(&timestamp.to_be_bytes());
        for channel in channels {
            payload.extend_from_slice(&channel.to_be_bytes());
        }
        payload.push(crc8(&payload));
        payload
    }

    #[test]
    fn parse_valid_payload() {
        let mut channels = [0i16; layout::CHANNEL_COUNT];
        channels[0] = 1;
        channels[1] = -2;
        let payload = build_payload(42, channels);

        let record = parse_payload(&payload).unwrap().expect("valid record");
        assert_eq!(record.timestamp, 42);
        assert_eq!(record.channels, channels);
    }

    #[test]
    fn parse_extreme_field_values() {
        let channels = [i16::MIN, i16::MAX, -1, 1, 0, 0, 0, 0, 0, 0];
        let payload = build_payload(u32::MAX, channels);

        let record = parse_payload(&payload).unwrap().expect("valid record");
        assert_eq!(record.timestamp, u32::MAX);
        assert_eq!(record.channels, channels);
    }

    #[test]
    fn parse_corrupted_checksum() {
        let mut payload = build_payload(7, [0; layout::CHANNEL_COUNT]);
        payload[layout::CHECKSUM_OFFSET] ^= 0xFF;

        let parsed = parse_payload(&payload).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn parse_corrupted_field_byte() {
        let mut payload = build_payload(7, [3; layout::CHANNEL_COUNT]);
        payload[2] ^= 0x01;

        let parsed = parse_payload(&payload).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn parse_short_payload() {
        let payload = vec![0u8; layout::PAYLOAD_LEN - 1];
        let err = parse_payload(&payload).unwrap_err();
        assert!(matches!(err, FrameError::TooShort { .. }));
    }
}
