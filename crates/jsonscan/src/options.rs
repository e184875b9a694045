#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The nesting limit used by [`ScanOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Which bytes the scanner skips between tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Whitespace {
    /// The four whitespace bytes of the JSON grammar: space (0x20), horizontal
    /// tab (0x09), line feed (0x0A) and carriage return (0x0D).
    #[default]
    Json,
    /// Only the space character (0x20).
    ///
    /// Matches validators that never accepted tabs or line breaks between
    /// tokens. Inputs valid under this mode are valid under [`Whitespace::Json`].
    SpaceOnly,
}

impl Whitespace {
    #[inline]
    pub(crate) fn contains(self, byte: u8) -> bool {
        match self {
            Whitespace::Json => matches!(byte, b' ' | b'\t' | b'\n' | b'\r'),
            Whitespace::SpaceOnly => byte == b' ',
        }
    }
}

/// Configuration options for the scanner.
///
/// # Examples
///
/// ```rust
/// use jsonscan::{ScanOptions, Whitespace, is_valid_with};
///
/// let legacy = ScanOptions {
///     whitespace: Whitespace::SpaceOnly,
///     allow_trailing_content: true,
///     ..Default::default()
/// };
/// assert!(is_valid_with("{ }garbage", &legacy));
/// assert!(!is_valid_with("{\n}", &legacy));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    /// Maximum nesting depth of objects and arrays.
    ///
    /// The top-level container is at depth 1. Opening a container beyond this
    /// depth fails with [`ScanError::DepthExceeded`](crate::ScanError).
    ///
    /// This value is trusted: the scanner recurses for every nesting level up
    /// to it and does not check how much stack is left. Each level costs two
    /// frames (the container rule plus [`Scanner::value`](crate::Scanner::value)),
    /// roughly 100 to 200 bytes in release builds and several times that in
    /// debug builds. Size the limit against the smallest thread stack that
    /// will run validation; `max_depth: 1_000_000` on deeply nested input will
    /// overflow a default 2 MiB thread stack.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`] (128)
    pub max_depth: usize,

    /// The whitespace set skipped between tokens.
    ///
    /// # Default
    ///
    /// [`Whitespace::Json`]
    pub whitespace: Whitespace,

    /// Whether bytes after the top-level value are ignored.
    ///
    /// When `false`, only whitespace may follow the top-level value. When
    /// `true`, the scanner stops as soon as the top-level value is complete
    /// and never looks at the rest of the buffer.
    ///
    /// # Examples
    ///
    /// ```json
    /// {}garbage
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_content: bool,

    /// Whether any value may appear at the top level.
    ///
    /// When `false`, the document must be an object or an array.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_scalar_root: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            whitespace: Whitespace::Json,
            allow_trailing_content: false,
            allow_scalar_root: false,
        }
    }
}
