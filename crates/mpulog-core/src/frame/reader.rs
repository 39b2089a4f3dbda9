use super::error::FrameError;

/// Bounds-checked reads over a payload slice.
///
/// All offsets and ranges come from `layout`; parsers never index payload
/// bytes directly.
pub struct PayloadReader<'a> {
    payload: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FrameError> {
        if self.payload.len() < needed {
            return Err(FrameError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, FrameError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(FrameError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_i16_be(&self, range: std::ops::Range<usize>) -> Result<i16, FrameError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(FrameError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, FrameError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(FrameError::TooShort {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], FrameError> {
        self.payload
            .get(range.clone())
            .ok_or(FrameError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}
