use thiserror::Error;

/// Why a buffer is not a well-formed document.
///
/// Errors carry the class of the failure only; the scanner does not track
/// line or column information.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// The buffer ended while a token or container was still open.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// The first significant byte cannot start an accepted top-level value.
    #[error("document must start with '{{' or '['")]
    InvalidRoot,
    /// An object key was not a string, or a trailing comma preceded `}`.
    #[error("expected a string key")]
    ExpectedKey,
    /// An object key was not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// A member or element was not followed by `,` or the closing delimiter.
    #[error("expected ',' or '{0}'")]
    ExpectedCommaOrEnd(char),
    /// The lead byte cannot start any value.
    #[error("invalid value")]
    InvalidValue,
    /// `true`, `false` or `null` misspelled or truncated.
    #[error("invalid literal")]
    InvalidLiteral,
    /// Leading zeros, a bare `-`, or a missing fraction or exponent digit.
    #[error("invalid number")]
    InvalidNumber,
    /// A byte below 0x20 appeared unescaped inside a string.
    #[error("unescaped control character in string")]
    ControlCharacterInString,
    /// A backslash was followed by a byte that does not start an escape.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid unicode escape sequence")]
    InvalidUnicodeEscape,
    /// Non-whitespace bytes followed the top-level value.
    #[error("trailing content after document")]
    TrailingContent,
    /// Objects and arrays were nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl ScanError {
    /// Returns `true` for [`ScanError::DepthExceeded`], which reports a
    /// resource limit rather than malformed input.
    #[must_use]
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, Self::DepthExceeded { .. })
    }
}
