//! Scanner: cursor-based recursive-descent validation over a byte buffer.
//!
//! Each grammar rule is a method that takes the cursor (`pos`, the offset of
//! the next unconsumed byte) and returns the cursor just past the bytes it
//! accepted, or the error that stopped it. The scanner itself is immutable;
//! the cursor is threaded through calls by value, so one `Scanner` can be
//! shared across threads and rules can be called in any order.
//!
//! Invariants
//! - `pos <= input.len()` at every call boundary. Reads go through
//!   [`Scanner::peek`] or slice `get`, so a rule that runs out of input fails
//!   instead of indexing past the end.
//! - On error the cursor is discarded; callers never resume from it.
//! - Objects and arrays carry the nesting depth of their parent and fail with
//!   [`ScanError::DepthExceeded`] before recursing past `max_depth`.
//!
//! Whitespace is skipped by the structural rules (document, object, array)
//! and after each value; the token rules (string, number, literals) never
//! skip whitespace themselves.

mod number;
mod string;


use crate::{ScanError, ScanOptions};

/// A borrowed view of one input buffer plus the options that govern it.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'src> {
    input: &'src [u8],
    options: ScanOptions,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `input`.
    #[must_use]
    pub fn new(input: &'src [u8], options: &ScanOptions) -> Self {
        Self {
            input,
            options: *options,
        }
    }

    /// The exclusive upper bound for the cursor.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.input.len()
    }

    /// The byte at `pos`, or `None` once the input is exhausted.
    #[inline]
    #[must_use]
    pub fn peek(&self, pos: usize) -> Option<u8> {
        self.input.get(pos).copied()
    }

    /// The byte at `pos`; running off the end is an error.
    #[inline]
    fn byte(&self, pos: usize) -> Result<u8, ScanError> {
        self.peek(pos).ok_or_else(|| {
            trace!(pos, "unexpected end of input");
            ScanError::UnexpectedEndOfInput
        })
    }

    /// Advances past any bytes in the configured whitespace set.
    #[must_use]
    pub fn skip_whitespace(&self, pos: usize) -> usize {
        let ws = self.options.whitespace;
        let run = self.input.get(pos..).map_or(0, |rest| {
            rest.iter().take_while(|&&b| ws.contains(b)).count()
        });
        pos + run
    }

    /// Validates the whole buffer as one document.
    ///
    /// # Errors
    ///
    /// Fails on the first grammar violation, when the root is not an accepted
    /// value, or, unless `allow_trailing_content` is set, when anything other
    /// than whitespace follows the root.
    pub fn scan_document(&self) -> Result<(), ScanError> {
        let pos = self.skip_whitespace(0);
        let end = match self.byte(pos)? {
            b'{' => self.object(pos, 0)?,
            b'[' => self.array(pos, 0)?,
            _ if self.options.allow_scalar_root => self.value(pos, 0)?,
            _ => return Err(ScanError::InvalidRoot),
        };

        if self.options.allow_trailing_content {
            return Ok(());
        }
        if self.skip_whitespace(end) == self.limit() {
            Ok(())
        } else {
            Err(ScanError::TrailingContent)
        }
    }

    /// Accounts for one more level of nesting below `depth`.
    fn descend(&self, depth: usize) -> Result<usize, ScanError> {
        let limit = self.options.max_depth;
        depth
            .checked_add(1)
            .filter(|&next| next <= limit)
            .ok_or_else(|| {
                trace!(depth, limit, "nesting limit reached");
                ScanError::DepthExceeded { limit }
            })
    }

    /// `{ (string : value (, string : value)*)? }`
    ///
    /// `depth` is the nesting depth of the enclosing container (0 at the
    /// root). Returns the cursor just past the closing `}`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed member, a missing separator, a trailing comma, a
    /// buffer that ends before `}`, or when the object would exceed
    /// `max_depth`.
    pub fn object(&self, pos: usize, depth: usize) -> Result<usize, ScanError> {
        if self.byte(pos)? != b'{' {
            return Err(ScanError::InvalidValue);
        }
        let depth = self.descend(depth)?;
        trace!(pos, depth, "object");

        let mut pos = self.skip_whitespace(pos + 1);
        if self.peek(pos) == Some(b'}') {
            return Ok(pos + 1);
        }

        loop {
            pos = match self.byte(pos)? {
                b'"' => self.string(pos)?,
                _ => return Err(ScanError::ExpectedKey),
            };

            pos = self.skip_whitespace(pos);
            pos = match self.byte(pos)? {
                b':' => self.skip_whitespace(pos + 1),
                _ => return Err(ScanError::ExpectedColon),
            };

            pos = self.value(pos, depth)?;

            pos = self.skip_whitespace(pos);
            match self.byte(pos)? {
                b',' => pos = self.skip_whitespace(pos + 1),
                b'}' => return Ok(pos + 1),
                _ => return Err(ScanError::ExpectedCommaOrEnd('}')),
            }
        }
    }

    /// `[ (value (, value)*)? ]`
    ///
    /// Mirrors [`Scanner::object`]: an array cut off before its `]` is an
    /// error, never a success.
    ///
    /// # Errors
    ///
    /// Fails on a malformed element, a missing separator, a trailing comma, a
    /// buffer that ends before `]`, or when the array would exceed
    /// `max_depth`.
    pub fn array(&self, pos: usize, depth: usize) -> Result<usize, ScanError> {
        if self.byte(pos)? != b'[' {
            return Err(ScanError::InvalidValue);
        }
        let depth = self.descend(depth)?;
        trace!(pos, depth, "array");

        let mut pos = self.skip_whitespace(pos + 1);
        if self.peek(pos) == Some(b']') {
            return Ok(pos + 1);
        }

        loop {
            pos = self.value(pos, depth)?;

            pos = self.skip_whitespace(pos);
            match self.byte(pos)? {
                b',' => pos = self.skip_whitespace(pos + 1),
                b']' => return Ok(pos + 1),
                _ => return Err(ScanError::ExpectedCommaOrEnd(']')),
            }
        }
    }

    /// Any value, chosen by the lead byte without consuming it.
    ///
    /// Whitespace after the value is skipped before returning.
    ///
    /// # Errors
    ///
    /// Fails when the lead byte cannot start a value or the selected rule
    /// fails.
    pub fn value(&self, pos: usize, depth: usize) -> Result<usize, ScanError> {
        let end = match self.byte(pos)? {
            b'{' => self.object(pos, depth)?,
            b'[' => self.array(pos, depth)?,
            b'"' => self.string(pos)?,
            b't' => self.literal(pos, b"true")?,
            b'f' => self.literal(pos, b"false")?,
            b'n' => self.literal(pos, b"null")?,
            b'-' | b'0'..=b'9' => self.number(pos)?,
            _ => {
                trace!(pos, "no value starts here");
                return Err(ScanError::InvalidValue);
            }
        };
        Ok(self.skip_whitespace(end))
    }

    /// Matches `expected` exactly at `pos`.
    fn literal(&self, pos: usize, expected: &'static [u8]) -> Result<usize, ScanError> {
        let end = pos + expected.len();
        // `get` fails when fewer than `expected.len()` bytes remain.
        match self.input.get(pos..end) {
            Some(found) if found == expected => Ok(end),
            _ => {
                trace!(pos, "malformed literal");
                Err(ScanError::InvalidLiteral)
            }
        }
    }
}
