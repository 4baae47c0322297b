//! Immutable byte-string keys
//!
//! Keys order lexicographically by unsigned byte value. The empty key is the
//! global minimum. The global maximum is an out-of-band marker rather than a
//! byte string, since no finite byte string bounds every other one.
//!
//! For prefix and splitting arithmetic the maximum behaves as an unbounded
//! run of `0xFF` bytes: its `n`-byte prefix is `n` bytes of `0xFF`.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use super::errors::{KeyspaceError, KeyspaceResult};

/// Rendering of the maximum key in diagnostics.
const MAX_KEY_DISPLAY: &str = "<max>";

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr {
    // Variant order matters: every byte string sorts below the maximum.
    Bytes(Bytes),
    Max,
}

/// An immutable key.
///
/// Cloning is cheap (reference counted) and prefixes of a key share its
/// buffer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Repr);

impl Key {
    /// The empty key, lowest in the key space.
    pub const fn empty() -> Self {
        Key(Repr::Bytes(Bytes::new()))
    }

    /// The out-of-band maximum, above every byte string.
    pub const fn max() -> Self {
        Key(Repr::Max)
    }

    /// Key over a static byte string, without copying.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Key(Repr::Bytes(Bytes::from_static(bytes)))
    }

    /// Key copied from a byte slice.
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        Key(Repr::Bytes(Bytes::copy_from_slice(bytes)))
    }

    /// Returns true for the maximum marker.
    pub fn is_max(&self) -> bool {
        matches!(self.0, Repr::Max)
    }

    /// Returns true for the zero-length key.
    pub fn is_empty(&self) -> bool {
        matches!(&self.0, Repr::Bytes(b) if b.is_empty())
    }

    /// Raw bytes, or `None` for the maximum.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Repr::Bytes(b) => Some(b.as_ref()),
            Repr::Max => None,
        }
    }

    /// Byte length, or `None` for the maximum.
    pub fn len(&self) -> Option<usize> {
        self.as_bytes().map(<[u8]>::len)
    }

    /// Length used by the splitting scans; unbounded for the maximum.
    pub(crate) fn extent(&self) -> usize {
        self.len().unwrap_or(usize::MAX)
    }

    /// Byte at `index`. Caller keeps `index < extent()`.
    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        match &self.0 {
            Repr::Bytes(b) => b[index],
            Repr::Max => 0xFF,
        }
    }

    /// First `len` bytes of this key.
    ///
    /// Zero-copy for byte strings. For the maximum this materialises `len`
    /// bytes of `0xFF`.
    pub fn prefix(&self, len: usize) -> Key {
        match &self.0 {
            Repr::Bytes(b) => Key(Repr::Bytes(b.slice(..len.min(b.len())))),
            Repr::Max => Key(Repr::Bytes(Bytes::from(vec![0xFF; len]))),
        }
    }

    /// Returns true if this key begins with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        match &self.0 {
            Repr::Bytes(b) => b.starts_with(prefix),
            Repr::Max => prefix.iter().all(|&byte| byte == 0xFF),
        }
    }

    /// This key with `prefix` removed. Caller checks `starts_with` first.
    ///
    /// The maximum stays the maximum.
    pub fn remove_prefix(&self, prefix: &[u8]) -> Key {
        debug_assert!(self.starts_with(prefix));
        match &self.0 {
            Repr::Bytes(b) => Key(Repr::Bytes(b.slice(prefix.len()..))),
            Repr::Max => Key::max(),
        }
    }

    /// `prefix` followed by this key.
    ///
    /// The maximum stays the maximum; callers that need the end of a prefix
    /// namespace use [`Key::strinc`] on the prefix instead.
    pub fn with_prefix(&self, prefix: &[u8]) -> Key {
        match &self.0 {
            Repr::Bytes(b) => {
                let mut buf = BytesMut::with_capacity(prefix.len() + b.len());
                buf.extend_from_slice(prefix);
                buf.extend_from_slice(b);
                Key(Repr::Bytes(buf.freeze()))
            }
            Repr::Max => Key::max(),
        }
    }

    /// This key followed by `suffix`. The maximum absorbs suffixes.
    pub fn with_suffix(&self, suffix: &[u8]) -> Key {
        match &self.0 {
            Repr::Bytes(b) => {
                let mut buf = BytesMut::with_capacity(b.len() + suffix.len());
                buf.extend_from_slice(b);
                buf.extend_from_slice(suffix);
                Key(Repr::Bytes(buf.freeze()))
            }
            Repr::Max => Key::max(),
        }
    }

    /// New key equal to this one except at `index`.
    pub(crate) fn with_byte(&self, index: usize, value: u8) -> Key {
        match &self.0 {
            Repr::Bytes(b) => {
                let mut buf = BytesMut::from(b.as_ref());
                buf[index] = value;
                Key(Repr::Bytes(buf.freeze()))
            }
            Repr::Max => Key::max(),
        }
    }

    /// The immediate successor: this key followed by a single `0x00`.
    pub fn key_after(&self) -> Key {
        self.with_suffix(&[0x00])
    }

    /// Smallest key greater than every key that starts with this one.
    ///
    /// Trailing `0xFF` bytes are dropped and the last remaining byte is
    /// incremented. Returns `None` when no such key exists (empty key, all
    /// `0xFF`, or the maximum).
    pub fn strinc(&self) -> Option<Key> {
        let bytes = self.as_bytes()?;
        let keep = bytes.iter().rposition(|&byte| byte != 0xFF)?;
        let mut buf = BytesMut::from(&bytes[..=keep]);
        buf[keep] += 1;
        Some(Key(Repr::Bytes(buf.freeze())))
    }

    /// Escaped rendering: printable ASCII as-is, `\\` for backslash and
    /// `\xNN` for everything else.
    pub fn printable(&self) -> String {
        match &self.0 {
            Repr::Bytes(b) => printable(b),
            Repr::Max => MAX_KEY_DISPLAY.to_string(),
        }
    }

    /// Decodes the output of [`Key::printable`] for byte-string keys.
    pub fn from_printable(input: &str) -> KeyspaceResult<Key> {
        let raw = input.as_bytes();
        let mut out = BytesMut::with_capacity(raw.len());
        let mut i = 0;

        while i < raw.len() {
            if raw[i] != b'\\' {
                out.put_u8(raw[i]);
                i += 1;
                continue;
            }

            match raw.get(i + 1) {
                Some(b'\\') => {
                    out.put_u8(b'\\');
                    i += 2;
                }
                Some(b'x') => {
                    let digits = raw
                        .get(i + 2..i + 4)
                        .filter(|d| d.iter().all(u8::is_ascii_hexdigit))
                        .ok_or_else(|| {
                            KeyspaceError::invalid_key_encoding(input, "\\x needs two hex digits")
                        })?;
                    // Both digits are ASCII hex, so neither conversion can fail.
                    let value = std::str::from_utf8(digits)
                        .ok()
                        .and_then(|d| u8::from_str_radix(d, 16).ok())
                        .ok_or_else(|| {
                            KeyspaceError::invalid_key_encoding(input, "\\x needs two hex digits")
                        })?;
                    out.put_u8(value);
                    i += 4;
                }
                _ => {
                    return Err(KeyspaceError::invalid_key_encoding(
                        input,
                        format!("unsupported escape at byte {}", i),
                    ))
                }
            }
        }

        Ok(Key(Repr::Bytes(out.freeze())))
    }
}

fn printable(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out
}

impl Default for Key {
    fn default() -> Self {
        Key::empty()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printable())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(\"{}\")", self.printable())
    }
}

impl From<Bytes> for Key {
    fn from(bytes: Bytes) -> Self {
        Key(Repr::Bytes(bytes))
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Key(Repr::Bytes(Bytes::from(bytes)))
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Key::copy_from_slice(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(bytes: &[u8; N]) -> Self {
        Key::copy_from_slice(bytes)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::copy_from_slice(s.as_bytes())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}
