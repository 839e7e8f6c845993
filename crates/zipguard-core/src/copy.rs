//! Buffered copy with a reusable buffer.
//!
//! One `CopyBuffer` is allocated per extraction and reused for every file
//! entry, so copying does not allocate per entry the way `std::io::copy`
//! with a fresh `BufReader` would.

use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Buffer size for entry copies (64KB).
pub const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable buffer for copying entry contents to disk.
///
/// # Examples
///
/// ```no_run
/// # use zipguard_core::copy::{CopyBuffer, copy_with_buffer};
/// # fn example() -> std::io::Result<()> {
/// let mut buffer = CopyBuffer::new();
/// let mut input = std::fs::File::open("input.txt")?;
/// let mut output = std::fs::File::create("output.txt")?;
///
/// let bytes_copied = copy_with_buffer(&mut input, &mut output, &mut buffer)?;
/// println!("Copied {} bytes", bytes_copied);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zero-initialized copy buffer.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `reader` to `writer` until end-of-stream using `buffer`.
///
/// Interrupted reads are retried. Returns the number of bytes copied.
///
/// # Errors
///
/// Returns the first read or write error, or an error if the byte count
/// would overflow `u64`.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;

        total = total
            .checked_add(bytes_read as u64)
            .ok_or_else(|| io::Error::other("copied byte count overflowed u64"))?;
    }

    Ok(total)
}
