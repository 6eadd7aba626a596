//! The fixed-size record codec trait.
//!
//! Every entity persists as one fixed-size binary block: fixed-width,
//! zero-padded UTF-8 text fields and little-endian integers. A record is
//! always encoded and decoded as a whole block, never field by field on disk.

use crate::error::{Error, Result};

/// A value that can be stored as one fixed-size binary record.
///
/// `SIZE` is the exact on-disk size in bytes. `encode` must fill the whole
/// buffer and `decode` must consume exactly `SIZE` bytes; the file engine
/// relies on this to compute record offsets as `index * SIZE`.
pub trait Record: Sized + Clone {
    /// Exact on-disk size of one record in bytes.
    const SIZE: usize;

    /// Encode into `buf`, which is exactly `SIZE` bytes long.
    ///
    /// Fails with [`Error::FieldTooLong`] if a text field exceeds its fixed
    /// width. On failure the buffer contents are unspecified and must not be
    /// written to disk.
    fn encode(&self, buf: &mut [u8]) -> Result<()>;

    /// Decode from `buf`, which is exactly `SIZE` bytes long.
    ///
    /// Fails with [`Error::Corrupt`] if an enum byte or text field is not a
    /// value this codec could have produced.
    fn decode(buf: &[u8]) -> Result<Self>;
}

/// Write `value` into the fixed-width text field `buf`, zero-padded.
pub(crate) fn put_text(buf: &mut [u8], field: &'static str, value: &str) -> Result<()> {
    let bytes = value.as_bytes();
    if bytes.len() > buf.len() {
        return Err(Error::FieldTooLong {
            field,
            max: buf.len(),
        });
    }
    buf[..bytes.len()].copy_from_slice(bytes);
    buf[bytes.len()..].fill(0);
    Ok(())
}

/// Read a fixed-width text field, stopping at the first padding byte.
pub(crate) fn get_text(buf: &[u8], field: &'static str) -> Result<String> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    std::str::from_utf8(&buf[..end])
        .map(str::to_owned)
        .map_err(|_| Error::Corrupt(format!("field `{}` is not valid UTF-8", field)))
}
