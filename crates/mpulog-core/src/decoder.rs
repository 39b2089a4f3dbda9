use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use thiserror::Error;

use crate::Record;
use crate::frame::error::FrameError;
use crate::frame::layout;
use crate::frame::parser::parse_payload;

/// One decode outcome per successfully framed payload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A payload whose checksum validated, unpacked into field values.
    Record(Record),
    /// A full-length payload whose checksum did not match. The payload is
    /// discarded whole; nothing is recovered from it.
    Corrupted,
}

/// Errors surfaced while pulling outcomes from a stream.
///
/// Corruption is not an error: a checksum mismatch is reported as
/// [`Outcome::Corrupted`] and decoding continues.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
}

/// Streaming decoder over a sequential byte source.
///
/// The decoder scans forward for the sync byte, skipping noise one byte at
/// a time, then reads one fixed-size payload and checks its CRC-8. It holds
/// no buffer beyond one payload's worth of bytes and never rewinds the
/// underlying reader.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use mpulog_core::{Decoder, Outcome};
///
/// // Sync byte, 24 zero payload bytes, and the matching zero checksum.
/// let mut bytes = vec![0x41];
/// bytes.extend_from_slice(&[0u8; 25]);
///
/// let mut decoder = Decoder::new(Cursor::new(bytes));
/// let outcome = decoder.next_outcome()?.expect("one frame");
/// assert!(matches!(outcome, Outcome::Record(_)));
/// assert!(decoder.next_outcome()?.is_none());
/// # Ok::<(), mpulog_core::DecodeError>(())
/// ```
pub struct Decoder<R> {
    reader: R,
}

impl Decoder<BufReader<File>> {
    /// Open a log file for decoding.
    ///
    /// # Errors
    /// Returns `DecodeError::Io` when the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, DecodeError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Pull the next outcome from the stream.
    ///
    /// Returns `Ok(None)` on clean end-of-stream, which includes a stream
    /// that ends mid-payload after a sync byte: the partial frame is
    /// dropped silently because it cannot be distinguished from an
    /// interrupted write. Any byte other than the sync byte between frames
    /// is skipped without limit and without a diagnostic.
    ///
    /// # Errors
    /// Returns `DecodeError::Io` when the underlying reader fails with
    /// anything other than `ErrorKind::Interrupted`.
    pub fn next_outcome(&mut self) -> Result<Option<Outcome>, DecodeError> {
        loop {
            let byte = match self.read_byte()? {
                Some(byte) => byte,
                None => return Ok(None),
            };
            if byte != layout::SYNC_BYTE {
                continue;
            }

            let mut payload = [0u8; layout::PAYLOAD_LEN];
            if !self.fill(&mut payload)? {
                return Ok(None);
            }

            return match parse_payload(&payload)? {
                Some(record) => Ok(Some(Outcome::Record(record))),
                None => Ok(Some(Outcome::Corrupted)),
            };
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Fill `buf` completely; `false` means the stream ended first.
    fn fill(&mut self, buf: &mut [u8]) -> Result<bool, DecodeError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => return Ok(false),
                Ok(read) => filled += read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(true)
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = Result<Outcome, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_outcome().transpose()
    }
}
