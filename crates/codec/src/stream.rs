//! Read cursor and write accumulator over flat byte buffers.

use crate::errors::CodecError;
use crate::types::{Decoder, Encoder};

/// Read cursor over an arbitrary [`AsRef`] on a byte slice.
///
/// The cursor never passes the end of the buffer, and a failed read leaves it
/// where it was, so callers can probe a format and fall back.
#[derive(Debug)]
pub struct ReadStream<B> {
    buf: B,
    at: usize,
}

impl<B: AsRef<[u8]>> ReadStream<B> {
    /// Constructs a new instance by wrapping a buffer and starting at the
    /// beginning.
    pub fn new(buf: B) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Returns the current cursor position.
    pub fn position(&self) -> usize {
        self.at
    }

    /// Returns the slice of the remaining unread bytes, which might be empty.
    fn rest(&self) -> &[u8] {
        &self.buf.as_ref()[self.at..]
    }

    fn check(&self, wanted: usize) -> Result<(), CodecError> {
        if wanted > self.remaining() {
            return Err(CodecError::underflow(wanted, self.remaining()));
        }
        Ok(())
    }
}

impl<B: AsRef<[u8]>> Decoder for ReadStream<B> {
    fn read_buf(&mut self, into: &mut [u8]) -> Result<(), CodecError> {
        self.check(into.len())?;
        into.copy_from_slice(&self.rest()[..into.len()]);
        self.at += into.len();
        Ok(())
    }

    fn read_arr<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let buf = self.peek_arr::<N>()?;
        self.at += N;
        Ok(buf)
    }

    fn peek_buf(&self, into: &mut [u8]) -> Result<(), CodecError> {
        self.check(into.len())?;
        into.copy_from_slice(&self.rest()[..into.len()]);
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.len() - self.at
    }
}

/// Append-only write accumulator.
///
/// The bytes written can only be read back by calling
/// [`WriteStream::finalize`], which consumes the stream.
#[derive(Debug, Default)]
pub struct WriteStream {
    buf: Vec<u8>,
}

impl WriteStream {
    /// Constructs an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty stream with room for `hint` bytes.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            buf: Vec::with_capacity(hint),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Freezes the stream, returning the written bytes.
    pub fn finalize(self) -> Vec<u8> {
        self.buf
    }
}

impl Encoder for WriteStream {
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.buf.extend_from_slice(buf);
        Ok(())
    }
}
