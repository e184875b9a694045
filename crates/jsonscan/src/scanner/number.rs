use super::Scanner;
use crate::ScanError;

impl Scanner<'_> {
    /// `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?`
    ///
    /// Returns the cursor just past the last byte of the number. Whatever
    /// follows (whitespace, a delimiter, garbage) is left for the caller.
    ///
    /// # Errors
    ///
    /// Fails with [`ScanError::InvalidNumber`] on a bare `-`, a leading zero
    /// followed by digits, or a `.`/exponent marker without digits after it.
    pub fn number(&self, pos: usize) -> Result<usize, ScanError> {
        let mut pos = pos;
        if self.peek(pos) == Some(b'-') {
            pos += 1;
        }

        pos = match self.peek(pos) {
            Some(b'0') => {
                if self.peek(pos + 1).is_some_and(|b| b.is_ascii_digit()) {
                    return Err(ScanError::InvalidNumber);
                }
                pos + 1
            }
            Some(b'1'..=b'9') => self.digits(pos)?,
            _ => return Err(ScanError::InvalidNumber),
        };

        if self.peek(pos) == Some(b'.') {
            pos = self.digits(pos + 1)?;
        }

        if matches!(self.peek(pos), Some(b'e' | b'E')) {
            pos += 1;
            if matches!(self.peek(pos), Some(b'+' | b'-')) {
                pos += 1;
            }
            pos = self.digits(pos)?;
        }

        Ok(pos)
    }

    /// One or more ASCII digits, consumed greedily.
    ///
    /// # Errors
    ///
    /// Fails with [`ScanError::InvalidNumber`] when `pos` is not a digit.
    pub fn digits(&self, pos: usize) -> Result<usize, ScanError> {
        let run = self.input.get(pos..).map_or(0, |rest| {
            rest.iter().take_while(|b| b.is_ascii_digit()).count()
        });
        if run == 0 {
            return Err(ScanError::InvalidNumber);
        }
        Ok(pos + run)
    }
}
