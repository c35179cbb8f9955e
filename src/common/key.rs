//! Trace key type.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// A single reference in an access trace.
///
/// Keys are opaque bytes: two keys are the same reference iff their bytes
/// are equal. They need not be valid UTF-8. No trimming or case folding
/// happens here; the trace reader only strips line terminators before a
/// key is built.
///
/// # Example
/// ```
/// use cachesim::Key;
///
/// let key = Key::from("0x7ffe1000");
/// assert_eq!(key.as_bytes(), b"0x7ffe1000");
/// assert_ne!(key, Key::from("0x7FFE1000"));
///
/// // Invalid UTF-8 is still a distinct key; only display is lossy
/// let raw = Key::new(&b"\xff\xfe"[..]);
/// assert_ne!(raw, Key::new(&b"\xff\xfd"[..]));
/// assert_eq!(raw.to_string_lossy(), "\u{fffd}\u{fffd}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(Vec<u8>);

impl Key {
    /// Create a new key from owned bytes or text.
    #[inline]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Key(bytes.into())
    }

    /// The raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The key as text, with invalid UTF-8 replaced. For display only.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Consume the key, returning its bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key(text.as_bytes().to_vec())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key(text.into_bytes())
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Key(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Key(bytes)
    }
}

impl Borrow<[u8]> for Key {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
