//! Draining a response body into one contiguous buffer.
//!
//! Constrained transports may hand back a few bytes per `read` call, so the
//! reader keeps asking for the remaining bytes until the declared length is
//! reached or the stream reports end of input.

use std::io::{ErrorKind, Read};

use tracing::warn;

use crate::{Error, Result};

/// Default cap on a buffered response body (8 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Limits applied while reading a body.
#[derive(Debug, Clone, Copy)]
pub struct BodyPolicy {
    /// Fail instead of accepting a body shorter than declared
    pub strict_length: bool,
    /// Largest body that will be buffered
    pub max_bytes: usize,
}

impl Default for BodyPolicy {
    fn default() -> Self {
        Self {
            strict_length: false,
            max_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Read a full response body.
///
/// With a declared length `N`, exactly `N` bytes are returned however the
/// underlying reads are chunked. If the stream ends first, the bytes read so
/// far are returned (or, under [`BodyPolicy::strict_length`], an
/// [`Error::Transport`]). Without a declared length the stream is drained to
/// its end.
///
/// # Errors
///
/// Any I/O error other than `Interrupted`, a body above
/// [`BodyPolicy::max_bytes`], or a strict short read.
pub fn read_body<R: Read + ?Sized>(
    reader: &mut R,
    declared_len: Option<u64>,
    policy: BodyPolicy,
) -> Result<Vec<u8>> {
    match declared_len {
        Some(len) => {
            let len = usize::try_from(len)
                .ok()
                .filter(|len| *len <= policy.max_bytes)
                .ok_or_else(|| {
                    Error::Transport(format!(
                        "declared body length {} exceeds limit of {} bytes",
                        len, policy.max_bytes
                    ))
                })?;
            read_declared(reader, len, policy.strict_length)
        }
        None => read_to_end_bounded(reader, policy.max_bytes),
    }
}

fn read_declared<R: Read + ?Sized>(reader: &mut R, len: usize, strict: bool) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    let mut filled = 0;

    while filled < len {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled < len {
        if strict {
            return Err(Error::Transport(format!(
                "stream ended after {} of {} declared bytes",
                filled, len
            )));
        }
        warn!(
            received = filled,
            declared = len,
            "Response body shorter than declared length; accepting as complete"
        );
        buf.truncate(filled);
    }

    Ok(buf)
}

fn read_to_end_bounded<R: Read + ?Sized>(reader: &mut R, max: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
    Read::take(&mut *reader, limit).read_to_end(&mut buf)?;

    if buf.len() > max {
        return Err(Error::Transport(format!(
            "response body exceeds limit of {} bytes",
            max
        )));
    }
    Ok(buf)
}
