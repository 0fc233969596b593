use std::borrow::Cow;

use base64::engine::{GeneralPurpose, general_purpose};
use base64::{DecodeError, DecodeSliceError, Engine};

const PAD: u8 = b'=';

/// Base64 decoder that tolerates missing trailing `=` padding.
///
/// Input whose length is not a multiple of four is padded with `=` before
/// being handed to the wrapped engine. Everything else, including errors,
/// comes straight from the engine.
#[derive(Debug, Clone)]
pub struct Encoding<E = GeneralPurpose> {
    engine: E,
}

/// Standard alphabet (`+`, `/`).
pub static STANDARD: Encoding = Encoding::new(general_purpose::STANDARD);

/// URL and filename safe alphabet (`-`, `_`).
pub static URL_SAFE: Encoding = Encoding::new(general_purpose::URL_SAFE);

impl<E> Encoding<E> {
    pub const fn new(engine: E) -> Self {
        Encoding { engine }
    }

    /// The wrapped engine, e.g. for encoding with the matching alphabet.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::new(general_purpose::STANDARD)
    }
}

impl<E> Encoding<E>
where
    E: Engine,
    Self: Send + Sync,
{
    /// Decodes `src` into `dst`, returning the number of bytes written.
    ///
    /// `dst` must hold the decoded output; see [`Encoding::decoded_len_estimate`].
    pub fn decode(&self, dst: &mut [u8], src: &[u8]) -> Result<usize, DecodeSliceError> {
        let padded = pad_bytes(src);
        self.engine
            .decode_slice(&*padded, dst)
            .inspect_err(|e| log::debug!("[decode] rejected {} bytes: {e}", padded.len()))
    }

    /// Decodes a base64 string into a new buffer.
    pub fn decode_string(&self, s: &str) -> Result<Vec<u8>, DecodeError> {
        let padded = pad_str(s);
        self.engine
            .decode(padded.as_bytes())
            .inspect_err(|e| log::debug!("[decode_string] rejected {:?}: {e}", padded))
    }

    /// Byte-input counterpart of [`Encoding::decode_string`].
    pub fn decode_vec<T>(&self, src: T) -> Result<Vec<u8>, DecodeError>
    where
        T: AsRef<[u8]>,
    {
        let padded = pad_bytes(src.as_ref());
        self.engine
            .decode(&*padded)
            .inspect_err(|e| log::debug!("[decode_vec] rejected {} bytes: {e}", padded.len()))
    }

    /// Upper bound on the bytes [`Encoding::decode`] writes for `len` input
    /// characters, padding included.
    pub fn decoded_len_estimate(&self, len: usize) -> usize {
        base64::decoded_len_estimate(len + missing_padding(len))
    }
}

fn missing_padding(len: usize) -> usize {
    match len % 4 {
        0 => 0,
        r => 4 - r,
    }
}

fn pad_bytes(src: &[u8]) -> Cow<'_, [u8]> {
    let missing = missing_padding(src.len());
    if missing == 0 {
        return Cow::Borrowed(src);
    }

    log::trace!("Appending {missing} padding byte(s) to {} byte input", src.len());
    let mut padded = Vec::with_capacity(src.len() + missing);
    padded.extend_from_slice(src);
    padded.resize(src.len() + missing, PAD);
    Cow::Owned(padded)
}

fn pad_str(s: &str) -> Cow<'_, str> {
    let missing = missing_padding(s.len());
    if missing == 0 {
        return Cow::Borrowed(s);
    }

    log::trace!("Appending {missing} padding char(s) to {} char input", s.len());
    Cow::Owned(format!("{s}{}", "=".repeat(missing)))
}
