//! A strict JSON syntax validator.
//!
//! `jsonscan` answers one question: is a byte buffer a well-formed JSON
//! document? It never builds a value tree and never allocates. The scanner
//! walks the input once, left to right, with a recursive-descent rule per
//! grammar production and an explicit nesting limit so that adversarial input
//! cannot exhaust the call stack.
//!
//! ```rust
//! use jsonscan::{ScanError, ScanOptions, is_valid, validate_with};
//!
//! assert!(is_valid(r#"{"a": [1, 2.5e3, "x\u0041", true, null]}"#));
//! assert!(!is_valid(r#"{"a": 01}"#));
//!
//! let shallow = ScanOptions {
//!     max_depth: 2,
//!     ..Default::default()
//! };
//! assert_eq!(
//!     validate_with("[[[]]]", &shallow),
//!     Err(ScanError::DepthExceeded { limit: 2 })
//! );
//! ```
//!
//! # Grammar choices
//!
//! By default the top-level value must be an object or an array, whitespace is
//! the four JSON whitespace bytes (space, tab, line feed, carriage return), and
//! nothing but whitespace may follow the top-level value. Each of these can be
//! relaxed through [`ScanOptions`].
//!
//! `\u` escapes are checked for shape only (four hex digits); they are not
//! decoded, and surrogate pairing is not enforced.

#![no_std]

#[cfg(test)]
extern crate std;

/// Trace-level logging macro that forwards to `tracing::trace!` when the
/// `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Trace-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Debug-level logging macro that forwards to `tracing::debug!` when the
/// `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Debug-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod error;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use options::{DEFAULT_MAX_DEPTH, ScanOptions, Whitespace};
pub use scanner::Scanner;

/// Returns `true` if `input` is a well-formed JSON document under the default
/// [`ScanOptions`].
///
/// Empty input, input whose first significant byte is not `{` or `[`, and
/// input nested deeper than [`DEFAULT_MAX_DEPTH`] are all rejected.
#[must_use]
pub fn is_valid(input: impl AsRef<[u8]>) -> bool {
    validate(input).is_ok()
}

/// Like [`is_valid`], with explicit options.
#[must_use]
pub fn is_valid_with(input: impl AsRef<[u8]>, options: &ScanOptions) -> bool {
    validate_with(input, options).is_ok()
}

/// Validates `input` under the default [`ScanOptions`], reporting which class
/// of error made it invalid.
///
/// # Errors
///
/// Returns the first [`ScanError`] encountered, in input order.
pub fn validate(input: impl AsRef<[u8]>) -> Result<(), ScanError> {
    validate_with(input, &ScanOptions::default())
}

/// Validates `input` with explicit options.
///
/// # Errors
///
/// Returns the first [`ScanError`] encountered, in input order.
pub fn validate_with(input: impl AsRef<[u8]>, options: &ScanOptions) -> Result<(), ScanError> {
    let input = input.as_ref();
    let result = Scanner::new(input, options).scan_document();
    debug!(len = input.len(), ?result, "validated document");
    result
}
